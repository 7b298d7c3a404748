//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid Resend API key format")]
    InvalidResendKey,

    #[error("Invalid from email address")]
    InvalidFromEmail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_names_the_variable() {
        let err = ValidationError::MissingRequired("TOPSIS__EMAIL__RESEND_API_KEY");
        assert!(err.to_string().contains("TOPSIS__EMAIL__RESEND_API_KEY"));
    }

    #[test]
    fn validation_failure_wraps_into_config_error() {
        let err: ConfigError = ValidationError::InvalidResendKey.into();
        assert!(err.to_string().contains("Invalid Resend API key"));
    }
}
