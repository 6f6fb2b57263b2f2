//! Stations and their facilities.

use std::fmt;

use serde::Serialize;

use super::line::LineId;

/// Numeric station identifier, unique across all lines.
///
/// Interchange stations appear once per line, each with its own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl From<u32> for StationId {
    fn from(id: u32) -> Self {
        StationId(id)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station on a single line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Numeric id of the line this station entry belongs to. Lines opened
    /// after this crate was released still come through here.
    pub line_id: u32,
    pub line_name: String,
    pub description: String,
    /// Position along the line.
    pub order: i32,
    /// `None` when the API does not know, which is not the same as inactive.
    pub is_active: Option<bool>,
    pub functional_code: String,
    pub detail: StationDetail,
}

/// Accessibility facilities and location of a station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationDetail {
    /// Number of escalators.
    pub escalator: u32,
    /// Number of lifts.
    pub lift: u32,
    pub baby_room: bool,
    pub wc: bool,
    pub masjid: bool,
    /// Decimal degrees, kept as the API's text to avoid precision drift.
    pub latitude: String,
    pub longitude: String,
}

impl Station {
    /// The line this entry belongs to, if it is one this crate knows.
    pub fn line(&self) -> Option<LineId> {
        LineId::try_from(self.line_id).ok()
    }
}

impl StationDetail {
    /// Latitude and longitude as numbers, if both parse.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.trim().parse::<f64>().ok()?;
        let lon = self.longitude.trim().parse::<f64>().ok()?;
        Some((lat, lon))
    }

    /// Whether the station can be reached without stairs.
    pub fn step_free(&self) -> bool {
        self.lift > 0
    }
}
