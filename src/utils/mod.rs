//! # Utility Modules
//!
//! Supporting utilities that sit outside the wire format.
//!
//! ## Components
//! - **Logging**: `tracing-subscriber` setup driven by [`crate::config::LoggingConfig`]

pub mod logging;

pub use logging::init_logging;
