//! Error types for click reporting.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while building or delivering a click report.
///
/// Only [`ClickLogError::MissingCsrfToken`] ever reaches the caller of
/// [`crate::application::services::ClickLogger::log_click`]. The remaining
/// variants are raised inside the detached delivery task, logged there and
/// dropped.
#[derive(Debug, Error)]
pub enum ClickLogError {
    /// The hosting page exposes no `csrf-token` meta element.
    #[error("CSRF token meta element `{0}` not found on page")]
    MissingCsrfToken(&'static str),

    /// The logging endpoint URL could not be built.
    #[error("Invalid logging endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The request never completed (connection refused, timeout, TLS, ...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Logging endpoint rejected click with status {0}")]
    Rejected(StatusCode),

    /// The endpoint answered 2xx but the body was not JSON.
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}
