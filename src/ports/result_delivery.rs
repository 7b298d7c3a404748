//! Result Delivery Port - Channels that hand the written result to the user.
//!
//! Delivery happens after the result table has been written; the channel
//! receives the finished file and makes it available (reports its location,
//! mails it, and so on). The computational core never touches this boundary.

use std::path::Path;

use thiserror::Error;

/// Port for delivering a finished result file.
pub trait ResultDelivery: Send + Sync {
    /// Delivers the result file at `path` to the end user.
    fn deliver(&self, path: &Path) -> Result<(), DeliveryError>;
}

/// Errors from delivering a result file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The result file could not be read back for delivery.
    #[error("Result file '{path}' unavailable for delivery: {message}")]
    ResultUnavailable { path: String, message: String },

    /// The transport (e.g. the email API) could not be reached.
    #[error("Delivery transport failed: {message}")]
    Transport { message: String },

    /// The transport rejected the delivery request.
    #[error("Delivery rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl DeliveryError {
    /// Creates a result-unavailable error.
    pub fn result_unavailable(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ResultUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a rejection error.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_status_and_message() {
        let err = DeliveryError::rejected(422, "invalid recipient");
        assert_eq!(err.to_string(), "Delivery rejected (422): invalid recipient");
    }

    #[test]
    fn result_delivery_is_object_safe() {
        fn check<T: ResultDelivery + ?Sized>() {}
        check::<dyn ResultDelivery>();
    }
}
