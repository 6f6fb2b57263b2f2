//! Metro Istanbul HTTP client.
//!
//! Issues GET/POST requests against the MetroMobile V2 base path with a fixed
//! timeout. The client hands back status and body only; envelope decoding and
//! conversion happen in `fetch`.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::error::MetroError;
use super::transport::{RawResponse, Transport};

/// Default base URL for the MetroMobile V2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.ibb.gov.tr/MetroIstanbul/api/MetroMobile/V2/";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

const USER_AGENT: &str = concat!("metro-istanbul/", env!("CARGO_PKG_VERSION"));

/// Configuration for the Metro client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetroConfig {
    /// Base URL for the API (defaults to production MetroMobile V2)
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl MetroConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Read overrides from `METRO_BASE_URL` and `METRO_TIMEOUT_MS`.
    ///
    /// Only parsing errors are reported here. The result is validated by
    /// [`MetroClient::new`], after any further overrides have been applied.
    pub fn from_env() -> Result<Self, MetroError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MetroError> {
        let mut config = Self::new();

        if let Some(url) = lookup("METRO_BASE_URL") {
            config.base_url = url;
        }

        if let Some(timeout) = lookup("METRO_TIMEOUT_MS") {
            config.timeout_ms = timeout.trim().parse().map_err(|_| {
                MetroError::Config(format!("METRO_TIMEOUT_MS is not a number: {timeout:?}"))
            })?;
        }

        Ok(config)
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = ms;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> Result<(), MetroError> {
        if self.base_url.trim().is_empty() {
            return Err(MetroError::Config("base_url must not be empty".to_string()));
        }

        if self.timeout_ms == 0 {
            return Err(MetroError::Config(
                "timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for MetroConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP transport for the live Metro Istanbul API.
#[derive(Debug, Clone)]
pub struct MetroClient {
    http: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl MetroClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MetroConfig) -> Result<Self, MetroError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            timeout_ms: config.timeout_ms,
        })
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<RawResponse, MetroError> {
        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !(200..300).contains(&status) {
            warn!(path, status, "non-success HTTP status");
        } else {
            debug!(path, status, bytes = body.len(), "response received");
        }

        Ok(RawResponse { status, body })
    }

    fn transport_error(&self, err: reqwest::Error) -> MetroError {
        if err.is_timeout() {
            MetroError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            MetroError::Http(err)
        }
    }
}

#[async_trait]
impl Transport for MetroClient {
    async fn get(&self, path: &str) -> Result<RawResponse, MetroError> {
        let url = self.url(path);
        debug!(%url, "GET");
        self.send(self.http.get(&url), path).await
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<RawResponse, MetroError> {
        let url = self.url(path);
        debug!(%url, "POST");
        self.send(self.http.post(&url).json(body), path).await
    }
}
