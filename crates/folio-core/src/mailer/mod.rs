//! Outbound email delivery.
//!
//! [`Mailer`] is the seam between the relay endpoint and whichever
//! transactional-email provider backs it. Production uses
//! [`resend::ResendMailer`]; tests use `fakes::MemoryMailer`.

pub mod resend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::submission::RelayRequest;

/// A fully templated email ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl OutboundEmail {
    /// Template a contact submission into the email delivered to the
    /// site owner: subject derived from the sender's name, body carrying
    /// name, email, and message text.
    pub fn contact_message(from: &str, to: &str, request: &RelayRequest) -> Self {
        OutboundEmail {
            from: from.to_string(),
            to: to.to_string(),
            subject: format!("New Message from {}", request.name),
            text: format!(
                "Name: {}\nEmail: {}\n\nMessage: {}",
                request.name, request.email, request.message
            ),
        }
    }
}

/// Provider acknowledgement for a dispatched email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
    /// Provider-assigned message id.
    pub provider_id: String,
}

/// Errors from a dispatch attempt.
///
/// Detail stays server-side in logs; HTTP clients only ever see a
/// generic failure body.
#[derive(Debug, Error)]
pub enum MailerError {
    /// The provider rejected the message.
    #[error("provider rejected the message: status {status}")]
    Provider { status: u16, body: String },

    /// The provider call never completed.
    #[error("network error: {0}")]
    Network(String),
}

/// Transactional-email backend.
///
/// At most one provider call per `send` invocation; no retries, no
/// deduplication. A failed dispatch is lost.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Dispatch one email.
    ///
    /// # Errors
    ///
    /// Returns `MailerError` when the provider rejects the message or
    /// the call cannot complete.
    async fn send(&self, email: &OutboundEmail) -> Result<DispatchReceipt, MailerError>;
}
