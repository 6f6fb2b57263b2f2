//! Travel directions along a line.

use std::fmt;

use serde::Serialize;

use super::line::LineId;

/// Identifier of one direction of travel, as used by the timetable endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DirectionId(pub u32);

impl From<u32> for DirectionId {
    fn from(id: u32) -> Self {
        DirectionId(id)
    }
}

impl fmt::Display for DirectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One direction of a line, usually named after its terminus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionInfo {
    pub line_id: u32,
    pub line_name: String,
    pub direction_id: DirectionId,
    pub direction_name: String,
    pub direction_value: i32,
}

impl DirectionInfo {
    pub fn line(&self) -> Option<LineId> {
        LineId::try_from(self.line_id).ok()
    }
}
