//! # Click Logger
//!
//! Reports magazine link clicks to a CSRF-protected logging endpoint without
//! holding up navigation.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Click events, page metadata and the outgoing report
//! - **Application Layer** ([`application`]) - The fire-and-forget [`ClickLogger`]
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP and no-op transports
//!
//! ## Usage
//!
//! ```rust,ignore
//! let transport = Arc::new(HttpClickTransport::from_config(&config)?);
//! let logger = ClickLogger::new(transport);
//!
//! let page = PageMetadata::from_html(&html);
//! let event = ClickEvent::from_anchor(&page_url, "https://example.com");
//!
//! // Returns immediately; the request runs in a detached task.
//! logger.log_click(&event, &page)?;
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::services::{ClickLogger, Delivery};
pub use error::ClickLogError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{ClickLogger, Delivery};
    pub use crate::domain::{ClickEvent, ClickEventReport, PageMetadata};
    pub use crate::error::ClickLogError;
    pub use crate::infrastructure::transport::{ClickTransport, HttpClickTransport, NullTransport};
}
