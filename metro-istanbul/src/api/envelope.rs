//! Response envelope decoding.
//!
//! Every endpoint wraps its payload as `{Success, Error, Data}`. Decoding
//! normalizes the envelope and its error without looking inside `Data`; the
//! caller converts the payload with the entity-specific converter once the
//! envelope has been checked.

use serde::Serialize;

use super::error::MetroError;
use super::types::{RawApiError, RawEnvelope};

/// Normalized response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub error: Option<ApiError>,
    pub data: T,
}

/// Error reported by the API inside a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub trace: String,
    pub help_link: String,
    pub source: String,
}

/// Normalize a raw envelope. `Data` is passed through untouched.
pub fn decode_envelope<T>(raw: RawEnvelope<T>) -> Envelope<T> {
    Envelope {
        success: raw.success,
        error: raw.error.map(convert_error),
        data: raw.data,
    }
}

/// Field-for-field conversion of the API's error object.
pub fn convert_error(raw: RawApiError) -> ApiError {
    ApiError {
        id: raw.id,
        title: raw.title,
        message: raw.message,
        trace: raw.trace,
        help_link: raw.help_link,
        source: raw.source,
    }
}

impl<T> Envelope<T> {
    /// Take the payload of a successful envelope.
    ///
    /// A failed envelope becomes [`MetroError::Api`]. A failed envelope with
    /// no error details breaks the envelope contract and is reported as
    /// malformed.
    pub fn into_result(self) -> Result<T, MetroError> {
        if self.success {
            return Ok(self.data);
        }

        match self.error {
            Some(error) => Err(MetroError::Api(error)),
            None => Err(MetroError::Malformed {
                message: "envelope reported failure without error details".to_string(),
                body: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_error() -> RawApiError {
        RawApiError {
            id: 404,
            title: "Not Found".to_string(),
            message: "Line not found".to_string(),
            trace: "at GetStationById".to_string(),
            help_link: "https://example.test/help".to_string(),
            source: "MetroMobile.V2".to_string(),
        }
    }

    #[test]
    fn success_without_error() {
        let raw = RawEnvelope {
            success: true,
            error: None,
            data: vec![1, 2, 3],
        };

        let envelope = decode_envelope(raw);
        assert!(envelope.success);
        assert!(envelope.error.is_none());
        assert_eq!(envelope.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn failure_surfaces_api_error() {
        let raw = RawEnvelope {
            success: false,
            error: Some(raw_error()),
            data: (),
        };

        let err = decode_envelope(raw).into_result().unwrap_err();
        match err {
            MetroError::Api(api) => {
                assert_eq!(api.message, "Line not found");
                assert_eq!(api.source, "MetroMobile.V2");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_details_is_malformed() {
        let raw = RawEnvelope {
            success: false,
            error: None,
            data: (),
        };

        let err = decode_envelope(raw).into_result().unwrap_err();
        assert!(matches!(err, MetroError::Malformed { .. }));
    }

    #[test]
    fn error_converts_field_for_field() {
        let api = convert_error(raw_error());
        assert_eq!(api.id, 404);
        assert_eq!(api.title, "Not Found");
        assert_eq!(api.message, "Line not found");
        assert_eq!(api.trace, "at GetStationById");
        assert_eq!(api.help_link, "https://example.test/help");
        assert_eq!(api.source, "MetroMobile.V2");
    }
}
