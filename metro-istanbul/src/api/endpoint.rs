//! API endpoints.

use crate::domain::LineId;

/// The endpoints this client knows, with their path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Lines,
    LineStations(LineId),
    LineDirections(LineId),
    Stations,
    Timetable,
    Maps,
    Faqs,
}

impl Endpoint {
    /// Path relative to the base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Lines => "GetLines".to_string(),
            Endpoint::LineStations(line) => format!("GetStationById/{}", line.number()),
            Endpoint::LineDirections(line) => format!("GetDirectionById/{}", line.number()),
            Endpoint::Stations => "GetStations".to_string(),
            Endpoint::Timetable => "GetTimeTable".to_string(),
            Endpoint::Maps => "GetMaps".to_string(),
            Endpoint::Faqs => "FrequentlyAskedQuestions".to_string(),
        }
    }

    /// Whether the endpoint takes a POST body.
    pub fn is_post(&self) -> bool {
        matches!(self, Endpoint::Timetable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Endpoint::Lines.path(), "GetLines");
        assert_eq!(Endpoint::LineStations(LineId::M2).path(), "GetStationById/1");
        assert_eq!(Endpoint::LineDirections(LineId::F4).path(), "GetDirectionById/20");
        assert_eq!(Endpoint::Stations.path(), "GetStations");
        assert_eq!(Endpoint::Timetable.path(), "GetTimeTable");
        assert_eq!(Endpoint::Maps.path(), "GetMaps");
        assert_eq!(Endpoint::Faqs.path(), "FrequentlyAskedQuestions");
    }

    #[test]
    fn only_timetable_posts() {
        assert!(Endpoint::Timetable.is_post());
        assert!(!Endpoint::Stations.is_post());
    }
}
