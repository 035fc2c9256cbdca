//! Resend-backed mailer.
//!
//! Speaks the Resend transactional API: `POST /emails` with bearer
//! auth. The API key is injected by the caller; there is no fallback
//! literal anywhere in this crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DispatchReceipt, Mailer, MailerError, OutboundEmail};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Mailer backed by the Resend HTTP API.
pub struct ResendMailer {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    id: String,
}

impl ResendMailer {
    /// Create a mailer with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("foliod/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        ResendMailer {
            api_key: api_key.into(),
            api_url: RESEND_API_URL.to_string(),
            client,
        }
    }

    /// Point at a non-default API endpoint (local stub in tests).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<DispatchReceipt, MailerError> {
        let payload = SendRequest {
            from: &email.from,
            to: [email.to.as_str()],
            subject: &email.subject,
            text: &email.text,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MailerError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let body: SendResponse = response
            .json()
            .await
            .map_err(|e| MailerError::Network(e.to_string()))?;

        debug!(provider_id = %body.id, "resend accepted message");
        Ok(DispatchReceipt {
            provider_id: body.id,
        })
    }
}
