//! Domain types for the Metro Istanbul API.
//!
//! These are the normalized, immutable values handed to callers. Raw wire
//! spellings (PascalCase, the API's own typos) never appear here; see
//! `crate::api` for the raw shapes and their conversion.

mod direction;
mod error;
mod faq;
mod line;
mod map;
mod station;
mod text;
mod time;
mod timetable;

pub use direction::{DirectionId, DirectionInfo};
pub use error::DomainError;
pub use faq::Faq;
pub use line::{Color, Line, LineId};
pub use map::MetroMap;
pub use station::{Station, StationDetail, StationId};
pub use text::LocalizedText;
pub use time::{format_extended_iso, now_extended_iso, parse_time_of_day};
pub use timetable::{TimeInfos, Timetable};
