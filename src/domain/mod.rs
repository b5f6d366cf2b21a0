//! Domain layer: click events, page metadata and the outgoing report.
//!
//! # Click Reporting Flow
//!
//! 1. The host builds a [`click_event::ClickEvent`] when an anchor is clicked
//! 2. The CSRF token is read from [`page::PageMetadata`]
//! 3. Both are combined into a [`click_report::ClickEventReport`]
//! 4. The report is handed to a transport in a detached task

pub mod click_event;
pub mod click_report;
pub mod page;

pub use click_event::ClickEvent;
pub use click_report::{ClickEventReport, LogClickPayload};
pub use page::{CSRF_META_NAME, PageMetadata};
