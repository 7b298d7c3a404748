//! Delivery Adapters - Channels implementing ResultDelivery.

mod file_delivery;
mod resend_mailer;

pub use file_delivery::FileDelivery;
pub use resend_mailer::ResendMailer;
