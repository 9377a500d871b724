//! Typed configuration for Signet.
//!
//! This crate provides the configuration read at startup, before resource
//! methods are registered:
//! - TOML and JSON configuration files
//! - Environment variable overrides
//! - Strict parsing (fails on unknown fields)
//! - Layered configuration (defaults → file → env)
//!
//! # Example
//!
//! ```no_run
//! use signet_config::ConfigLoader;
//! use signet_extract::SignatureRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_optional_file("signet.toml")?
//!     .with_env_prefix("SIGNET")
//!     .load()?;
//!
//! signet_telemetry::init_logging(&config.logging.to_log_config())?;
//! let registry = SignatureRegistry::new(config.field_resolver());
//! # let _ = registry;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [resolver]
//! validation = "strict"   # or "permissive" (default)
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"         # or "pretty"
//! ansi_enabled = false
//! include_location = false
//! ```
//!
//! # Environment Variable Overrides
//!
//! Values can be overridden with `PREFIX__SECTION__KEY` variables:
//!
//! - `SIGNET__RESOLVER__VALIDATION=strict`
//! - `SIGNET__LOGGING__LEVEL=signet_extract=debug`
//! - `SIGNET__LOGGING__FORMAT=pretty`

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::SignetConfig;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{LogFormat, LoggingConfig, ResolverConfig};
