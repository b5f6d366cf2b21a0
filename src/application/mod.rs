//! Application layer services.
//!
//! Services combine domain values with an infrastructure transport and
//! expose the operations a host calls from its event handlers.
//!
//! # Available Services
//!
//! - [`services::click_logger::ClickLogger`] - Fire-and-forget click reporting

pub mod services;
