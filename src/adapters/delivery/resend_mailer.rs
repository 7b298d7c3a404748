//! Resend Mailer - Emails the result table through the Resend HTTP API.
//!
//! The result CSV travels as a base64 attachment. Credentials come from
//! [`EmailConfig`] only; nothing is embedded here.

use std::path::Path;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::blocking::Client;
use serde_json::{json, Value};
use tracing::info;

use crate::config::EmailConfig;
use crate::ports::{DeliveryError, ResultDelivery};

const DEFAULT_BASE_URL: &str = "https://api.resend.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SUBJECT: &str = "TOPSIS Analysis Results";

/// Delivery channel that mails the result file to a recipient.
pub struct ResendMailer {
    config: EmailConfig,
    recipient: String,
    base_url: String,
    client: Client,
}

impl ResendMailer {
    /// Creates a mailer for the given recipient.
    pub fn new(config: EmailConfig, recipient: impl Into<String>) -> Self {
        Self {
            config,
            recipient: recipient.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Overrides the API base URL (used by tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builds the Resend request payload with the attachment encoded.
    fn build_payload(&self, filename: &str, content: &[u8]) -> Value {
        json!({
            "from": self.config.from_header(),
            "to": [self.recipient],
            "subject": SUBJECT,
            "text": "Your TOPSIS analysis has completed. The ranked result table is attached.",
            "attachments": [{
                "filename": filename,
                "content": STANDARD.encode(content),
            }],
        })
    }
}

impl ResultDelivery for ResendMailer {
    fn deliver(&self, path: &Path) -> Result<(), DeliveryError> {
        let content = std::fs::read(path).map_err(|err| {
            DeliveryError::result_unavailable(path.to_string_lossy(), err.to_string())
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "result.csv".to_string());

        let payload = self.build_payload(&filename, &content);
        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(self.config.api_key())
            .json(&payload)
            .send()
            .map_err(|err| DeliveryError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(DeliveryError::rejected(status.as_u16(), message));
        }

        info!(recipient = %self.recipient, %filename, "result emailed");
        Ok(())
    }
}
