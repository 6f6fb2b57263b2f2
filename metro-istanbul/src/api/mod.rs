//! Metro Istanbul MetroMobile V2 API client.
//!
//! This module provides the wire types, envelope decoding, conversion to
//! domain types and one fetch function per endpoint.
//!
//! Key characteristics of the API:
//! - Every response is wrapped in a `{Success, Error, Data}` envelope, and
//!   a failed request is usually still HTTP 200
//! - All payloads are complete lists; there is no paging or filtering
//! - `GetTimeTable` is the only POST, and its `DateTime` field must be in the
//!   fixed seven-digit-fraction form from `domain::format_extended_iso`

mod client;
mod convert;
mod endpoint;
mod envelope;
mod error;
mod fetch;
mod mock;
mod transport;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, MetroClient, MetroConfig};
pub use convert::{
    ConversionError, convert_all, convert_color, convert_direction_info, convert_faq,
    convert_line, convert_map, convert_station, convert_station_detail, convert_timetable,
};
pub use endpoint::Endpoint;
pub use envelope::{ApiError, Envelope, convert_error, decode_envelope};
pub use error::MetroError;
pub use fetch::{
    TimetableQuery, decode_response, fetch_faqs, fetch_line_directions, fetch_line_stations,
    fetch_lines, fetch_maps, fetch_stations, fetch_timetable,
};
pub use mock::MockTransport;
pub use transport::{RawResponse, Transport};
pub use types::{
    RawApiError, RawColor, RawDirectionInfo, RawEnvelope, RawFaq, RawLanguageText, RawLine,
    RawMap, RawStation, RawStationDetail, RawTimeInfos, RawTimetable, RawTimetableRequest,
};
