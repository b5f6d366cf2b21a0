//! Transport trait for delivering click reports.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ClickEventReport;
use crate::error::ClickLogError;

/// Header carrying the anti-forgery token on every report.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Fixed path of the logging endpoint.
pub const LOG_CLICK_PATH: &str = "/log_magazine_click";

/// Delivers a single click report to the logging endpoint.
///
/// One call is one request. Implementations never retry, batch or
/// deduplicate.
///
/// # Implementations
///
/// - [`crate::infrastructure::transport::HttpClickTransport`] - `POST` over HTTP(S)
/// - [`crate::infrastructure::transport::NullTransport`] - No-op when click logging is disabled
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickTransport: Send + Sync {
    /// Sends the report and returns the parsed JSON response body.
    ///
    /// # Errors
    ///
    /// - [`ClickLogError::Transport`] if the request could not be completed
    /// - [`ClickLogError::Rejected`] on a non-2xx status
    /// - [`ClickLogError::InvalidResponse`] if the body is not JSON
    async fn send(&self, report: ClickEventReport) -> Result<Value, ClickLogError>;
}
