//! Logging setup for Signet.
//!
//! Signet reports signature registration through `tracing` events. This
//! crate installs the subscriber that formats them:
//!
//! - **JSON** output for production, one object per event
//! - **Pretty** output for development, with file and line info
//!
//! The filter accepts any `EnvFilter` directive, so resolution of individual
//! header fields can be enabled on its own with `signet_extract=debug`.
//!
//! # Example
//!
//! ```rust,ignore
//! use signet_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::production()).expect("Failed to init logging");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
