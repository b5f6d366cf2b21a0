//! Fire-and-forget click logging.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::domain::{ClickEvent, ClickEventReport, PageMetadata};
use crate::error::ClickLogError;
use crate::infrastructure::transport::ClickTransport;

/// Captured outcome of one detached delivery task.
///
/// Failures are already logged when this value is produced; it exists so
/// hosts and tests can observe completion, never to re-raise the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed,
}

/// Reports link clicks to the logging endpoint without delaying navigation.
///
/// Every call to [`ClickLogger::log_click`] spawns exactly one independent
/// request. Nothing is shared between invocations apart from the transport
/// handle, and there is no ordering between requests from rapid clicks.
#[derive(Clone)]
pub struct ClickLogger {
    transport: Arc<dyn ClickTransport>,
}

impl ClickLogger {
    /// Creates a new click logger.
    pub fn new(transport: Arc<dyn ClickTransport>) -> Self {
        Self { transport }
    }

    /// Handles a click on an anchor.
    ///
    /// Reads the CSRF token from `page`, builds the report and spawns its
    /// delivery. Returns as soon as the task is spawned; awaiting the
    /// returned handle is optional.
    ///
    /// Transport failures, rejected statuses and malformed responses are
    /// logged inside the task and resolve to [`Delivery::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`ClickLogError::MissingCsrfToken`] if the page has no token.
    /// No request is sent in that case.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn log_click(
        &self,
        event: &ClickEvent,
        page: &PageMetadata,
    ) -> Result<JoinHandle<Delivery>, ClickLogError> {
        let token = page.csrf_token()?;
        let report = ClickEventReport::new(event, token);
        let transport = Arc::clone(&self.transport);

        Ok(tokio::spawn(async move {
            let link = report.link.clone();

            match transport.send(report).await {
                Ok(_) => {
                    debug!(link = %link, "Click logged");
                    metrics::counter!("click_reports_sent_total").increment(1);
                    Delivery::Sent
                }
                Err(e) => {
                    error!(link = %link, "Error logging click: {}", e);
                    metrics::counter!("click_reports_failed_total").increment(1);
                    Delivery::Failed
                }
            }
        }))
    }
}
