//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`transport`] - Click report delivery (HTTP and no-op implementations)

pub mod transport;
