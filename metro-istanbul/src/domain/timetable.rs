//! Departure timetables.

use chrono::NaiveTime;
use serde::Serialize;

use super::line::LineId;
use super::station::StationId;
use super::text::LocalizedText;
use super::time::parse_time_of_day;

/// Departures from one station towards one terminus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timetable {
    pub boarding_station_id: StationId,
    pub boarding_station_name: String,
    pub line_id: u32,
    pub line_name: String,
    pub first_station_id: StationId,
    pub first_station: String,
    pub last_station_id: StationId,
    pub last_station: String,
    pub language_text: LocalizedText,
    pub time_infos: TimeInfos,
}

impl Timetable {
    /// The line served, if it is one this crate knows.
    pub fn line(&self) -> Option<LineId> {
        LineId::try_from(self.line_id).ok()
    }
}

/// The departure times for one kind of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeInfos {
    pub day: i32,
    /// `None` for an unnamed special day.
    pub day_name: Option<String>,
    /// Departure times in the order the API sent them.
    pub times: Vec<String>,
}

impl TimeInfos {
    /// Departure times that parse as a time of day, in received order.
    ///
    /// Services after midnight sort before earlier ones as plain times, so
    /// this deliberately does not reorder anything.
    pub fn departures(&self) -> impl Iterator<Item = NaiveTime> + '_ {
        self.times.iter().filter_map(|t| parse_time_of_day(t))
    }
}
