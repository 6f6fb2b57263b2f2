//! Mock transport for working without API access.
//!
//! Serves canned response bodies keyed by request path, either registered in
//! memory or loaded from a directory of JSON files.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::error::MetroError;
use super::transport::{RawResponse, Transport};

/// Mock transport that serves data from memory or JSON files.
///
/// Useful for development and tests without reaching the real API.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    /// Canned responses, keyed by request path (e.g. `GetStationById/1`).
    responses: HashMap<String, RawResponse>,

    /// Every POST seen so far, in order.
    posted: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
}

impl MockTransport {
    /// An empty mock; every request fails until responses are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for `path`.
    pub fn with_response(self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.with_status(path, 200, body)
    }

    /// Serve `body` with the given status for `path`.
    pub fn with_status(
        mut self,
        path: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        let path = path.into();
        self.responses
            .insert(normalize(&path), RawResponse::new(status, body));
        self
    }

    /// Load every `*.json` file in a directory.
    ///
    /// The file stem is the request path with `/` written as `_`, so
    /// `GetStationById_1.json` answers `GetStationById/1` and `GetLines.json`
    /// answers `GetLines`.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, MetroError> {
        let data_dir = data_dir.as_ref();
        let mut mock = Self::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| MetroError::Mock {
            message: format!("failed to read mock data directory {data_dir:?}: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| MetroError::Mock {
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| MetroError::Mock {
                    message: format!("invalid filename: {path:?}"),
                })?;

            let body = std::fs::read_to_string(&path).map_err(|e| MetroError::Mock {
                message: format!("failed to read {path:?}: {e}"),
            })?;

            mock = mock.with_response(stem.replace('_', "/"), body);
        }

        if mock.responses.is_empty() {
            return Err(MetroError::Mock {
                message: format!("no mock response files found in {data_dir:?}"),
            });
        }

        debug!(count = mock.responses.len(), dir = ?data_dir, "loaded mock responses");
        Ok(mock)
    }

    /// Paths this mock can answer, sorted.
    pub fn available_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.responses.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Bodies of every POST received so far, with their paths.
    pub async fn posted(&self) -> Vec<(String, serde_json::Value)> {
        self.posted.lock().await.clone()
    }

    fn respond(&self, path: &str) -> Result<RawResponse, MetroError> {
        self.responses
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| MetroError::Mock {
                message: format!(
                    "no mock response for {path}. Available: {:?}",
                    self.available_paths()
                ),
            })
    }
}

fn normalize(path: &str) -> String {
    path.trim_matches('/').to_string()
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, MetroError> {
        self.respond(path)
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<RawResponse, MetroError> {
        self.posted
            .lock()
            .await
            .push((normalize(path), body.clone()));
        self.respond(path)
    }
}
