//! HTTP transport seam
//!
//! The geocoder issues exactly one GET per call through [`HttpTransport`].
//! Failures travel back as a [`TransportResponse::Failure`] value so the
//! geocoder can report the provider's code and message verbatim.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::ArcgisConfig;
use crate::error::ArcgisError;

/// Code reported when no HTTP response was received at all
pub const NO_RESPONSE_CODE: i32 = 0;

/// Outcome of a single GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportResponse {
    /// The server answered with a success status
    Success {
        /// Response body
        body: String,
    },
    /// The request failed or the server answered with an error status
    Failure {
        /// HTTP status, or [`NO_RESPONSE_CODE`]
        code: i32,
        /// Human-readable error text
        error: String,
    },
}

impl TransportResponse {
    /// Create a success response
    #[must_use]
    pub fn success(body: impl Into<String>) -> Self {
        Self::Success { body: body.into() }
    }

    /// Create a failure response
    #[must_use]
    pub fn failure(code: i32, error: impl Into<String>) -> Self {
        Self::Failure {
            code,
            error: error.into(),
        }
    }
}

/// Performs GET requests for the geocoder
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch `url`
    async fn get(&self, url: &str) -> TransportResponse;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn get(&self, url: &str) -> TransportResponse {
        (**self).get(url).await
    }
}

/// [`HttpTransport`] over a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport honoring the configured timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &ArcgisConfig) -> Result<Self, ArcgisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("integration_arcgis/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ArcgisError::Configuration(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> TransportResponse {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "Request could not be completed");
                return TransportResponse::failure(NO_RESPONSE_CODE, e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            return TransportResponse::failure(
                i32::from(status.as_u16()),
                status.canonical_reason().unwrap_or("Unknown status"),
            );
        }

        match response.text().await {
            Ok(body) => {
                debug!(bytes = body.len(), "Received response body");
                TransportResponse::success(body)
            }
            Err(e) => TransportResponse::failure(i32::from(status.as_u16()), e.to_string()),
        }
    }
}
