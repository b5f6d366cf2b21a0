//! No-op transport for disabled click logging.

use super::service::ClickTransport;
use crate::domain::ClickEventReport;
use crate::error::ClickLogError;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// A transport that drops every report.
///
/// Selected when `CLICK_LOG_ENABLED=false` so that hosts can keep the
/// handler wired without reaching the logging endpoint.
pub struct NullTransport;

impl NullTransport {
    /// Creates a new NullTransport instance.
    pub fn new() -> Self {
        debug!("Using NullTransport (click logging disabled)");
        Self
    }
}

impl Default for NullTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClickTransport for NullTransport {
    async fn send(&self, report: ClickEventReport) -> Result<Value, ClickLogError> {
        debug!(link = %report.link, "Dropping click report");
        Ok(Value::Null)
    }
}
