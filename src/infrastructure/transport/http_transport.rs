//! HTTP transport posting click reports to the logging endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::service::{CSRF_HEADER, ClickTransport};
use crate::config::Config;
use crate::domain::ClickEventReport;
use crate::error::ClickLogError;

/// Posts click reports as JSON with the CSRF token in a header.
///
/// Holds one [`reqwest::Client`] whose connection pool is shared by every
/// detached delivery task. The client is cheap to clone and immutable, so
/// concurrent reports never share mutable state.
///
/// # Request
///
/// ```text
/// POST /log_magazine_click
/// Content-Type: application/json
/// X-CSRFToken: <token>
///
/// {"link":"<destination URL>"}
/// ```
#[derive(Debug, Clone)]
pub struct HttpClickTransport {
    client: Client,
    endpoint: Url,
}

impl HttpClickTransport {
    /// Creates a transport posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ClickLogError::Transport`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ClickLogError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Creates a transport around an existing client.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Creates a transport from service configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClickLogError::InvalidEndpoint`] if the base URL and path do
    /// not form a valid URL.
    pub fn from_config(config: &Config) -> Result<Self, ClickLogError> {
        Self::new(
            config.endpoint_url()?,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ClickTransport for HttpClickTransport {
    async fn send(&self, report: ClickEventReport) -> Result<Value, ClickLogError> {
        debug!(endpoint = %self.endpoint, link = %report.link, "Posting click report");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CSRF_HEADER, &report.security_token)
            .json(&report.payload())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClickLogError::Rejected(status));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ClickLogError::InvalidResponse(e.to_string()))
    }
}
