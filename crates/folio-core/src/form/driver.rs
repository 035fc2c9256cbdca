//! Async driver for one submission attempt.
//!
//! Glue between the pure reducer and a [`RelayTransport`]: apply the
//! submit event, perform the send effect if one was produced, and feed
//! the settle event back in. The settle event is delivered on every
//! transport outcome, so the form can never be left stuck in
//! `Submitting`.

use tracing::warn;

use crate::transport::RelayTransport;

use super::controller::{reduce, Effect, FormEvent, FormState, RelayOutcome};

/// Run one submit attempt against `transport`.
///
/// Returns the renderable effects (notices and focus moves) produced
/// along the way. The `SendSubmission` effect is consumed here and not
/// returned; a submission blocked locally (validation failure, spam
/// guard, or a request already in flight) makes no transport call.
pub async fn submit(state: &mut FormState, transport: &dyn RelayTransport) -> Vec<Effect> {
    let mut effects = reduce(state, FormEvent::SubmitRequested);

    let request = effects.iter().find_map(|e| match e {
        Effect::SendSubmission(req) => Some(req.clone()),
        _ => None,
    });
    effects.retain(|e| !matches!(e, Effect::SendSubmission(_)));

    let request = match request {
        Some(req) => req,
        None => return effects,
    };

    let outcome = match transport.submit(&request).await {
        Ok(()) => RelayOutcome::Delivered,
        Err(err) => {
            warn!(error = %err, "relay submission failed");
            RelayOutcome::Failed(err.to_string())
        }
    };

    effects.extend(reduce(state, FormEvent::RelaySettled(outcome)));
    effects
}
