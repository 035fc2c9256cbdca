//! In-memory fakes for the transport and mailer seams (testing only)
//!
//! Provides `MemoryTransport` and `MemoryMailer` that satisfy the trait
//! contracts without touching the network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::submission::RelayRequest;
use crate::mailer::{DispatchReceipt, Mailer, MailerError, OutboundEmail};
use crate::transport::{RelayTransport, TransportError};

// ---------------------------------------------------------------------------
// MemoryTransport
// ---------------------------------------------------------------------------

/// Recording transport with scripted outcomes.
///
/// Each `submit` call records the request, then pops the next queued
/// outcome; when the queue is empty the call succeeds.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    requests: Mutex<Vec<RelayRequest>>,
    outcomes: Mutex<VecDeque<Result<(), TransportError>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome for a future `submit` call.
    pub fn push_outcome(&self, outcome: Result<(), TransportError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Every request submitted so far.
    pub fn requests(&self) -> Vec<RelayRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl RelayTransport for MemoryTransport {
    async fn submit(&self, request: &RelayRequest) -> Result<(), TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

// ---------------------------------------------------------------------------
// MemoryMailer
// ---------------------------------------------------------------------------

/// A dispatched email captured by [`MemoryMailer`].
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub email: OutboundEmail,
    pub sent_at: DateTime<Utc>,
}

/// Recording mailer.
///
/// `MemoryMailer::new()` accepts every email; `MemoryMailer::failing()`
/// rejects every email with a synthetic provider error.
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<SentEmail>>,
    fail_all: bool,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every dispatch fails.
    pub fn failing() -> Self {
        MemoryMailer {
            sent: Mutex::new(Vec::new()),
            fail_all: true,
        }
    }

    /// Every email dispatched so far.
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<DispatchReceipt, MailerError> {
        if self.fail_all {
            return Err(MailerError::Provider {
                status: 500,
                body: "synthetic provider failure".to_string(),
            });
        }

        let mut sent = self.sent.lock().unwrap();
        let receipt = DispatchReceipt {
            provider_id: format!("fake-{}", sent.len()),
        };
        sent.push(SentEmail {
            email: email.clone(),
            sent_at: Utc::now(),
        });
        Ok(receipt)
    }
}
