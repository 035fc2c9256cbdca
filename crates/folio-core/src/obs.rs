//! Structured observability hooks for the contact pipeline.
//!
//! This module provides:
//! - Attempt-scoped tracing spans via the `AttemptSpan` RAII guard
//! - Emission functions for the relay lifecycle: received, rejected,
//!   dispatched, failed
//!
//! Field contents are never logged; only lengths and outcomes. Events
//! are emitted at `info!` level except dispatch failures, which warn.

use tracing::info;

/// RAII guard that enters an attempt-scoped tracing span for the
/// duration of one relay attempt.
pub struct AttemptSpan {
    _span: tracing::span::EnteredSpan,
}

impl AttemptSpan {
    /// Create and enter a span tagged with the attempt id.
    pub fn enter(attempt_id: &str) -> Self {
        let span = tracing::info_span!("contact.attempt", attempt_id = %attempt_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a contact submission arrived at the relay.
pub fn emit_submission_received(attempt_id: &str, name_len: usize, message_len: usize) {
    info!(
        event = "contact.received",
        attempt_id = %attempt_id,
        name_len = name_len,
        message_len = message_len,
    );
}

/// Emit event: a submission was rejected before dispatch.
pub fn emit_submission_rejected(attempt_id: &str, reason: &str) {
    info!(event = "contact.rejected", attempt_id = %attempt_id, reason = %reason);
}

/// Emit event: the provider accepted the outbound email.
pub fn emit_relay_dispatched(attempt_id: &str, provider_id: &str) {
    info!(event = "contact.dispatched", attempt_id = %attempt_id, provider_id = %provider_id);
}

/// Emit event: the provider call failed (warning level, with detail).
pub fn emit_relay_failed(attempt_id: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(event = "contact.relay_failed", attempt_id = %attempt_id, error = %error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_functions_do_not_panic_without_a_subscriber() {
        let _span = AttemptSpan::enter("attempt-1");
        emit_submission_received("attempt-1", 8, 120);
        emit_submission_rejected("attempt-1", "missing fields");
        emit_relay_dispatched("attempt-1", "re_abc123");
        emit_relay_failed("attempt-1", &"provider unreachable");
    }
}
