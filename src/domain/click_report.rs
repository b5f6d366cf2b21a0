//! The report sent to the logging endpoint for one click.

use serde::Serialize;

use crate::domain::ClickEvent;

/// A transient record of one link click, ready for transmission.
///
/// Built at click time from the event and the page token, sent once and
/// dropped afterwards whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEventReport {
    pub link: String,
    pub security_token: String,
}

/// JSON body of the logging request.
///
/// The token travels in the `X-CSRFToken` header, never in the body.
#[derive(Debug, Serialize)]
pub struct LogClickPayload<'a> {
    pub link: &'a str,
}

impl ClickEventReport {
    pub fn new(event: &ClickEvent, security_token: &str) -> Self {
        Self {
            link: event.target_href.clone(),
            security_token: security_token.to_string(),
        }
    }

    pub fn payload(&self) -> LogClickPayload<'_> {
        LogClickPayload { link: &self.link }
    }
}
