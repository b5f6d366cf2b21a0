//! Business logic services for the application layer.

pub mod click_logger;

pub use click_logger::{ClickLogger, Delivery};
