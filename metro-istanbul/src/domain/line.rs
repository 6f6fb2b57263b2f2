//! Metro lines and their identifiers.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Serialize, Serializer};

use super::error::DomainError;
use super::text::LocalizedText;
use super::time::parse_time_of_day;

/// A line operated by Metro Istanbul.
///
/// The API identifies lines by a small integer; riders know them by their
/// route code ("M2", "T1", ...). Only the codes below are in service, so any
/// other number coming back from the API is treated as malformed data.
///
/// # Examples
///
/// ```
/// use metro_istanbul::domain::LineId;
///
/// let m2: LineId = "M2".parse().unwrap();
/// assert_eq!(m2.number(), 1);
/// assert_eq!(LineId::try_from(9u32).unwrap(), LineId::M1A);
/// assert!(LineId::try_from(18u32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineId {
    M2,
    M3,
    M4,
    F1,
    M5,
    M6,
    M7,
    M8,
    M1A,
    M1B,
    T1,
    T3,
    T4,
    T5,
    TF1,
    TF2,
    M9,
    F4,
}

impl LineId {
    /// Every known line, in API id order.
    pub const ALL: [LineId; 18] = [
        LineId::M2,
        LineId::M3,
        LineId::M4,
        LineId::F1,
        LineId::M5,
        LineId::M6,
        LineId::M7,
        LineId::M8,
        LineId::M1A,
        LineId::M1B,
        LineId::T1,
        LineId::T3,
        LineId::T4,
        LineId::T5,
        LineId::TF1,
        LineId::TF2,
        LineId::M9,
        LineId::F4,
    ];

    /// The numeric id used in API payloads and paths.
    pub fn number(self) -> u32 {
        match self {
            LineId::M2 => 1,
            LineId::M3 => 2,
            LineId::M4 => 3,
            LineId::F1 => 4,
            LineId::M5 => 5,
            LineId::M6 => 6,
            LineId::M7 => 7,
            LineId::M8 => 8,
            LineId::M1A => 9,
            LineId::M1B => 10,
            LineId::T1 => 11,
            LineId::T3 => 12,
            LineId::T4 => 13,
            LineId::T5 => 14,
            LineId::TF1 => 15,
            LineId::TF2 => 16,
            LineId::M9 => 17,
            LineId::F4 => 20,
        }
    }

    /// The route code shown to riders.
    pub fn code(self) -> &'static str {
        match self {
            LineId::M2 => "M2",
            LineId::M3 => "M3",
            LineId::M4 => "M4",
            LineId::F1 => "F1",
            LineId::M5 => "M5",
            LineId::M6 => "M6",
            LineId::M7 => "M7",
            LineId::M8 => "M8",
            LineId::M1A => "M1A",
            LineId::M1B => "M1B",
            LineId::T1 => "T1",
            LineId::T3 => "T3",
            LineId::T4 => "T4",
            LineId::T5 => "T5",
            LineId::TF1 => "TF1",
            LineId::TF2 => "TF2",
            LineId::M9 => "M9",
            LineId::F4 => "F4",
        }
    }
}

impl TryFrom<u32> for LineId {
    type Error = DomainError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        LineId::ALL
            .into_iter()
            .find(|line| line.number() == n)
            .ok_or(DomainError::UnknownLineId(n))
    }
}

impl FromStr for LineId {
    type Err = DomainError;

    /// Parse a route code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LineId::ALL
            .into_iter()
            .find(|line| line.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownLineCode(s.to_string()))
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for LineId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// RGB color of a line on maps and signage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// CSS-style hex string, e.g. `#00A650`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// A metro, tram or funicular line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    /// Long-form content about the line, per language.
    pub content: LocalizedText,
    pub short_description: String,
    pub long_description: String,
    pub en_description: String,
    pub ar_description: String,
    pub is_active: bool,
    pub functional_code: String,
    pub color: Color,
    /// Sort key for presenting lines in the operator's order.
    pub order: i32,
    /// First departure of the day, local time of day as sent by the API.
    pub first_time: String,
    /// Last departure of the day, local time of day as sent by the API.
    pub last_time: String,
}

impl Line {
    pub fn first_departure(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.first_time)
    }

    pub fn last_departure(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.last_time)
    }
}
