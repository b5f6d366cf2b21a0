//! Delivery of click reports to the logging endpoint.
//!
//! Provides a [`ClickTransport`] trait with two implementations:
//! - [`HttpClickTransport`] - Production `reqwest`-backed transport
//! - [`NullTransport`] - No-op implementation for disabled logging

mod http_transport;
mod null_transport;
mod service;

pub use http_transport::HttpClickTransport;
pub use null_transport::NullTransport;
pub use service::{CSRF_HEADER, ClickTransport, LOG_CLICK_PATH};

#[cfg(test)]
pub use service::MockClickTransport;
