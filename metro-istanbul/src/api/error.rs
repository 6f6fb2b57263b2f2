//! Metro API error types.

use super::convert::ConversionError;
use super::envelope::ApiError;

/// Errors from fetching and decoding Metro Istanbul API responses.
///
/// Envelope failures (the API answered and said no) are kept apart from
/// transport failures (no usable answer at all) so callers can branch on
/// them; see [`MetroError::is_transport`].
#[derive(Debug, thiserror::Error)]
pub enum MetroError {
    /// The API answered with `Success: false`
    #[error("API error: {}", .0.message)]
    Api(ApiError),

    /// HTTP request failed (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request did not complete within the configured timeout
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Non-2xx response whose body is not a failure envelope
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Body does not match the envelope or payload shape
    #[error("malformed payload: {message}")]
    Malformed {
        message: String,
        body: Option<String>,
    },

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Mock transport could not serve the request
    #[error("mock transport: {message}")]
    Mock { message: String },
}

impl MetroError {
    /// True for failures below the envelope protocol: the API never gave a
    /// decodable answer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            MetroError::Http(_) | MetroError::Timeout { .. } | MetroError::Status { .. }
        )
    }

    /// The API's own error details, for envelope failures.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            MetroError::Api(error) => Some(error),
            _ => None,
        }
    }

    /// Build a `Malformed` error keeping the start of the offending body.
    pub(crate) fn malformed(message: impl Into<String>, body: &str) -> Self {
        MetroError::Malformed {
            message: message.into(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}

impl From<ConversionError> for MetroError {
    fn from(err: ConversionError) -> Self {
        MetroError::Malformed {
            message: err.to_string(),
            body: None,
        }
    }
}
