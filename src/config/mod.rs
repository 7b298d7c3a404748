//! Application configuration module.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `TOPSIS` prefix
//! and `__` (double underscore) as the nesting separator:
//!
//! - `TOPSIS__EMAIL__RESEND_API_KEY=re_...` -> `email.resend_api_key`
//! - `TOPSIS__EMAIL__FROM_EMAIL=...` -> `email.from_email`
//!
//! Configuration is only loaded when a delivery channel needs it; plain
//! file-output runs never touch the environment.

mod email;
mod error;

pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Email delivery configuration (Resend).
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file first if one is present (development), then reads
    /// `TOPSIS__`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot be
    /// parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOPSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.email.validate()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::Secret;

    use super::*;

    #[test]
    fn validate_delegates_to_email_config() {
        let config = AppConfig {
            email: EmailConfig {
                resend_api_key: Secret::new("re_valid".to_string()),
                ..Default::default()
            },
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_surfaces_email_errors() {
        let config = AppConfig {
            email: EmailConfig::default(),
        };
        assert!(config.validate().is_err());
    }
}
