//! Client-side transport to the relay endpoint.
//!
//! The form driver talks to the relay through the [`RelayTransport`]
//! trait; production uses the reqwest-backed [`HttpRelayTransport`],
//! tests use `fakes::MemoryTransport`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::submission::RelayRequest;

/// Environment variable overriding the relay endpoint URL.
pub const RELAY_URL_ENV: &str = "FOLIO_RELAY_URL";

/// Default relay endpoint when [`RELAY_URL_ENV`] is not set.
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:3001/api/contact";

/// Errors from one relay submission attempt.
///
/// Both variants surface to the user as the same failure notice; the
/// distinction only matters for logs.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The relay answered with a non-success status.
    #[error("relay returned status {status}")]
    Status { status: u16 },

    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
}

/// One-shot submission channel to the relay endpoint.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Submit a payload. `Ok` means the relay acknowledged delivery.
    async fn submit(&self, request: &RelayRequest) -> Result<(), TransportError>;
}

/// reqwest-backed transport POSTing the JSON payload to the relay.
pub struct HttpRelayTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRelayTransport {
    /// Create a transport for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        HttpRelayTransport {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// Create a transport from `FOLIO_RELAY_URL`, falling back to the
    /// local default.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var(RELAY_URL_ENV).unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
        Self::new(endpoint)
    }

    /// The endpoint this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayTransport for HttpRelayTransport {
    async fn submit(&self, request: &RelayRequest) -> Result<(), TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = TransportError::Status { status: 500 };
        assert!(err.to_string().contains("500"));

        let err = TransportError::Network("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
