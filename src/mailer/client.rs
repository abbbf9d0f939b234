//! EmailJS client for delivering enquiries
//!
//! Thin adapter over the EmailJS REST send endpoint. Service identity comes
//! from [`MailerConfig`]; the endpoint can be redirected with the
//! `EMAILJS_BASE_URL` environment variable.

use crate::config::MailerConfig;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use super::traits::EnquiryMailer;

/// Default EmailJS API host
const DEFAULT_BASE_URL: &str = "https://api.emailjs.com";

/// Failure delivering an enquiry. Opaque to the dialog controller; the
/// variants exist for diagnostics only.
#[derive(Debug, Error)]
pub enum MailerError {
    /// The request never completed (connect, DNS, timeout)
    #[error("email request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The delivery service answered with a non-success status
    #[error("email service returned {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Template parameters interpolated into the enquiry email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnquiryPayload {
    pub to_email: String,
    pub student_name: String,
    pub class: String,
    pub branch: String,
    pub phone: String,
    pub email: String,
}

/// Request body for the EmailJS send endpoint
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EnquiryPayload,
}

/// Client for the EmailJS transactional-email API
pub struct EmailJsMailer {
    client: reqwest::Client,
    base_url: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsMailer {
    /// Create a new mailer bound to the given service identity
    pub fn new(config: &MailerConfig) -> Self {
        let base_url =
            std::env::var("EMAILJS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            client: reqwest::Client::new(),
            base_url,
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
        }
    }
}

#[async_trait]
impl EnquiryMailer for EmailJsMailer {
    async fn send(&self, payload: &EnquiryPayload) -> Result<(), MailerError> {
        let url = format!("{}/api/v1.0/email/send", self.base_url);
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload,
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected { status, body });
        }

        tracing::info!(to = payload.to_email.as_str(), "Enquiry email sent");
        Ok(())
    }
}
