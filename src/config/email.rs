//! Email configuration (Resend).

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for the email delivery channel.
///
/// The API key is held in a [`Secret`] so it never appears in debug output
/// or logs. Credentials are always supplied by the environment, never
/// committed as literals.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key.
    pub resend_api_key: Secret<String>,

    /// From email address.
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl EmailConfig {
    /// Get formatted "From" header value.
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Exposes the API key (for making requests).
    pub fn api_key(&self) -> &str {
        self.resend_api_key.expose_secret()
    }

    /// Validate email configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key().is_empty() {
            return Err(ValidationError::MissingRequired(
                "TOPSIS__EMAIL__RESEND_API_KEY",
            ));
        }
        if !self.api_key().starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: Secret::new(String::new()),
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@topsis.local".to_string()
}

fn default_from_name() -> String {
    "Topsis Analysis".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.from_email, "noreply@topsis.local");
        assert_eq!(config.from_name, "Topsis Analysis");
    }

    #[test]
    fn from_header_formats_name_and_address() {
        let config = EmailConfig {
            from_email: "reports@example.com".to_string(),
            from_name: "Report Bot".to_string(),
            ..Default::default()
        };
        assert_eq!(config.from_header(), "Report Bot <reports@example.com>");
    }

    #[test]
    fn validation_rejects_missing_api_key() {
        let config = EmailConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn validation_rejects_wrong_key_prefix() {
        let config = EmailConfig {
            resend_api_key: Secret::new("sk_xxx".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidResendKey)
        ));
    }

    #[test]
    fn validation_rejects_invalid_from_email() {
        let config = EmailConfig {
            resend_api_key: Secret::new("re_xxx".to_string()),
            from_email: "invalid-email".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFromEmail)
        ));
    }

    #[test]
    fn validation_accepts_complete_config() {
        let config = EmailConfig {
            resend_api_key: Secret::new("re_abcd1234".to_string()),
            from_email: "noreply@topsis.local".to_string(),
            from_name: "Topsis Analysis".to_string(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn debug_output_hides_the_api_key() {
        let config = EmailConfig {
            resend_api_key: Secret::new("re_very_secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("re_very_secret"));
    }
}
