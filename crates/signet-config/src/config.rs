//! Main configuration types.
//!
//! This module provides the top-level [`SignetConfig`] struct.

use serde::{Deserialize, Serialize};
use signet_extract::FieldResolver;

use crate::{LogFormat, LoggingConfig, ResolverConfig};

/// Complete Signet configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load configuration from files
/// and environment variables.
///
/// # Example
///
/// ```
/// use signet_config::SignetConfig;
/// use signet_core::ValidationMode;
///
/// let config = SignetConfig::default();
/// assert_eq!(config.resolver.validation, ValidationMode::Permissive);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct SignetConfig {
    /// Header resolver configuration.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SignetConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if logging is enabled with an
    /// empty or invalid filter directive.
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        self.logging
            .to_log_config()
            .validate()
            .map_err(|e| crate::ConfigError::invalid_value("logging.level", e.to_string()))?;

        if self.logging.enabled {
            signet_telemetry::create_env_filter(&self.logging.level).map_err(|e| {
                crate::ConfigError::invalid_value("logging.level", e.to_string())
            })?;
        }

        Ok(())
    }

    /// Creates the header field resolver described by this configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use signet_config::{ResolverConfig, SignetConfig};
    /// use signet_core::ValidationMode;
    ///
    /// let config = SignetConfig {
    ///     resolver: ResolverConfig { validation: ValidationMode::Strict },
    ///     ..Default::default()
    /// };
    ///
    /// assert!(config.field_resolver().mode().is_strict());
    /// ```
    #[must_use]
    pub fn field_resolver(&self) -> FieldResolver {
        FieldResolver::new(self.resolver.validation_mode())
    }

    /// Create a development configuration preset.
    ///
    /// Pretty, colored debug logs with source locations, so every resolved
    /// header field is visible. Validation stays permissive.
    ///
    /// # Example
    ///
    /// ```
    /// use signet_config::SignetConfig;
    ///
    /// let config = SignetConfig::development();
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();

        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.ansi_enabled = true;
        config.logging.include_location = true;

        config
    }

    /// Create a production configuration preset.
    ///
    /// JSON logs at info level.
    ///
    /// # Example
    ///
    /// ```
    /// use signet_config::{LogFormat, SignetConfig};
    ///
    /// let config = SignetConfig::production();
    /// assert_eq!(config.logging.format, LogFormat::Json);
    /// ```
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();

        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;
        config.logging.ansi_enabled = false;

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signet_core::ValidationMode;

    #[test]
    fn test_default_is_valid() {
        assert!(SignetConfig::default().validate().is_ok());
        assert!(SignetConfig::development().validate().is_ok());
        assert!(SignetConfig::production().validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = SignetConfig::default();
        config.logging.level = "signet=verbose".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_blank_log_level() {
        let mut config = SignetConfig::default();
        config.logging.level = "   ".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_disabled_logging_skips_level_check() {
        let mut config = SignetConfig::default();
        config.logging.enabled = false;
        config.logging.level = "signet=verbose".to_string();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_field_resolver_follows_mode() {
        let mut config = SignetConfig::default();
        assert_eq!(config.field_resolver().mode(), ValidationMode::Permissive);

        config.resolver.validation = ValidationMode::Strict;
        assert_eq!(config.field_resolver(), FieldResolver::strict());
    }

    #[test]
    fn test_deserialize_rejects_unknown_sections() {
        let result: Result<SignetConfig, _> = toml::from_str("[server]\nport = 80\n");
        assert!(result.is_err());
    }
}
