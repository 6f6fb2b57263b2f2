//! One fetch function per entity.
//!
//! Each function issues a single request, checks the envelope, decodes the
//! payload into its raw element type, and converts every element. Either the
//! whole list converts or the call fails; there are no partial results.

use chrono::{DateTime, FixedOffset, Local};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::domain::{
    DirectionId, DirectionInfo, Faq, Line, LineId, MetroMap, Station, StationId, Timetable,
    format_extended_iso,
};

use super::convert::{
    convert_all, convert_direction_info, convert_faq, convert_line, convert_map, convert_station,
    convert_timetable,
};
use super::endpoint::Endpoint;
use super::envelope::decode_envelope;
use super::error::MetroError;
use super::transport::{RawResponse, Transport};
use super::types::{
    RawDirectionInfo, RawEnvelope, RawFaq, RawLine, RawMap, RawStation, RawTimetable,
    RawTimetableRequest,
};

/// Parameters for a timetable lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableQuery {
    pub station_id: StationId,
    pub direction_id: DirectionId,
    /// Departures after this instant are returned.
    pub at: DateTime<FixedOffset>,
}

impl TimetableQuery {
    /// Query departures from now, in the local time zone.
    pub fn new(station_id: StationId, direction_id: DirectionId) -> Self {
        Self {
            station_id,
            direction_id,
            at: Local::now().fixed_offset(),
        }
    }

    /// Query departures after a specific instant.
    pub fn at(mut self, at: DateTime<FixedOffset>) -> Self {
        self.at = at;
        self
    }

    /// The POST body `GetTimeTable` expects.
    pub fn to_request(&self) -> RawTimetableRequest {
        RawTimetableRequest {
            boarding_station_id: self.station_id.0,
            direction_id: self.direction_id.0,
            date_time: format_extended_iso(&self.at),
        }
    }
}

/// Decode a response body into the payload of a successful envelope.
///
/// The envelope is checked before `Data` is looked at, so an API failure is
/// reported as such even when `Data` has an unexpected shape.
pub fn decode_response<T: DeserializeOwned>(response: &RawResponse) -> Result<T, MetroError> {
    let raw: RawEnvelope<serde_json::Value> = match serde_json::from_str(&response.body) {
        Ok(raw) => raw,
        Err(_) if !response.is_success() => {
            return Err(MetroError::Status {
                status: response.status,
                body: response.body.chars().take(500).collect(),
            });
        }
        Err(e) => return Err(MetroError::malformed(e.to_string(), &response.body)),
    };

    let envelope = decode_envelope(raw);

    if let Some(error) = &envelope.error
        && !envelope.success
    {
        warn!(
            id = error.id,
            title = %error.title,
            source = %error.source,
            "API reported failure: {}",
            error.message
        );
    }

    if envelope.success && !response.is_success() {
        return Err(MetroError::Status {
            status: response.status,
            body: response.body.chars().take(500).collect(),
        });
    }

    let data = envelope.into_result()?;

    serde_json::from_value(data).map_err(|e| MetroError::malformed(e.to_string(), &response.body))
}

async fn request<T, R>(
    transport: &T,
    endpoint: Endpoint,
    body: Option<&serde_json::Value>,
) -> Result<Vec<R>, MetroError>
where
    T: Transport + ?Sized,
    R: DeserializeOwned,
{
    debug_assert_eq!(endpoint.is_post(), body.is_some());

    let path = endpoint.path();
    let response = match body {
        Some(body) => transport.post(&path, body).await?,
        None => transport.get(&path).await?,
    };

    let raw: Vec<R> = decode_response(&response)?;
    debug!(path = %path, count = raw.len(), "decoded payload");
    Ok(raw)
}

/// Fetch all lines (`GetLines`).
#[instrument(skip(transport))]
pub async fn fetch_lines<T: Transport + ?Sized>(transport: &T) -> Result<Vec<Line>, MetroError> {
    let raw: Vec<RawLine> = request(transport, Endpoint::Lines, None).await?;
    Ok(convert_all(raw, convert_line)?)
}

/// Fetch the stations of one line (`GetStationById/{lineId}`).
#[instrument(skip(transport))]
pub async fn fetch_line_stations<T: Transport + ?Sized>(
    transport: &T,
    line: LineId,
) -> Result<Vec<Station>, MetroError> {
    let raw: Vec<RawStation> = request(transport, Endpoint::LineStations(line), None).await?;
    Ok(convert_all(raw, convert_station)?)
}

/// Fetch the travel directions of one line (`GetDirectionById/{lineId}`).
#[instrument(skip(transport))]
pub async fn fetch_line_directions<T: Transport + ?Sized>(
    transport: &T,
    line: LineId,
) -> Result<Vec<DirectionInfo>, MetroError> {
    let raw: Vec<RawDirectionInfo> =
        request(transport, Endpoint::LineDirections(line), None).await?;
    Ok(convert_all(raw, convert_direction_info)?)
}

/// Fetch every station on every line (`GetStations`).
#[instrument(skip(transport))]
pub async fn fetch_stations<T: Transport + ?Sized>(
    transport: &T,
) -> Result<Vec<Station>, MetroError> {
    let raw: Vec<RawStation> = request(transport, Endpoint::Stations, None).await?;
    Ok(convert_all(raw, convert_station)?)
}

/// Fetch departures for a station and direction (`GetTimeTable`).
#[instrument(skip(transport), fields(station = %query.station_id, direction = %query.direction_id))]
pub async fn fetch_timetable<T: Transport + ?Sized>(
    transport: &T,
    query: &TimetableQuery,
) -> Result<Vec<Timetable>, MetroError> {
    let body = serde_json::to_value(query.to_request())
        .map_err(|e| MetroError::Malformed {
            message: format!("failed to encode timetable request: {e}"),
            body: None,
        })?;

    let raw: Vec<RawTimetable> = request(transport, Endpoint::Timetable, Some(&body)).await?;
    Ok(convert_all(raw, convert_timetable)?)
}

/// Fetch the published network maps (`GetMaps`).
#[instrument(skip(transport))]
pub async fn fetch_maps<T: Transport + ?Sized>(transport: &T) -> Result<Vec<MetroMap>, MetroError> {
    let raw: Vec<RawMap> = request(transport, Endpoint::Maps, None).await?;
    Ok(convert_all(raw, convert_map)?)
}

/// Fetch the FAQ (`FrequentlyAskedQuestions`).
#[instrument(skip(transport))]
pub async fn fetch_faqs<T: Transport + ?Sized>(transport: &T) -> Result<Vec<Faq>, MetroError> {
    let raw: Vec<RawFaq> = request(transport, Endpoint::Faqs, None).await?;
    Ok(convert_all(raw, convert_faq)?)
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod fetch_tests;
