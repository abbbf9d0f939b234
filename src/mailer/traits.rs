//! Trait abstraction for the enquiry mailer to enable mocking in tests

use async_trait::async_trait;

use super::client::{EnquiryPayload, MailerError};

/// Boundary component that delivers an enquiry to the notification channel.
///
/// The controller treats any failure as a single opaque outcome; there is no
/// retry policy at this seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnquiryMailer: Send + Sync {
    /// Deliver one enquiry
    async fn send(&self, payload: &EnquiryPayload) -> Result<(), MailerError>;
}
