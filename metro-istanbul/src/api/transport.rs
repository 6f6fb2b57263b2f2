//! Transport abstraction.
//!
//! The fetch functions only need "GET this path" and "POST this JSON to this
//! path". Keeping that behind a trait lets the same decoding run against the
//! live API, a canned mock, or anything else that can produce a body.

use async_trait::async_trait;

use super::error::MetroError;

/// A raw HTTP answer: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can issue requests against the API's base path.
///
/// Paths are relative to the base URL, without a leading slash
/// (e.g. `GetStationById/1`).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<RawResponse, MetroError>;

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<RawResponse, MetroError>;
}
