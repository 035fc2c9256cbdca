//! Contact-form state machine.
//!
//! Every user interaction and relay outcome is a [`FormEvent`]; every
//! side effect the surrounding shell must perform comes back as an
//! [`Effect`]. [`reduce`] does no I/O, so every transition is directly
//! testable.
//!
//! Two invariants hold across all transitions:
//! - a populated honeypot drops the submission with no state change and
//!   no effects; automated clients get no signal;
//! - `SubmitRequested` while a request is in flight is a no-op; at most
//!   one relay call can be outstanding per form.

use serde::Serialize;

use crate::domain::submission::{RelayRequest, Submission};
use crate::domain::validation::{validate, Field, FieldError};

/// Notice shown after a successful relay.
pub const SUCCESS_NOTICE: &str = "Message sent — I'll get back to you soon.";

/// Notice shown when the relay call fails; fields are kept for retry.
pub const FAILURE_NOTICE: &str = "Failed to send message. Please try again.";

/// Submission lifecycle phase.
///
/// "Idle with errors" is `Idle` with a non-empty error list; validation
/// itself is synchronous and never observable as a phase of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Where the shell should move input focus after a reduction.
///
/// The success region must receive focus so the outcome is perceivable
/// to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    FirstField,
    SuccessRegion,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Notice {
    Success(String),
    Failure(String),
}

/// Side effects the shell performs after a reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the payload to the relay endpoint.
    SendSubmission(RelayRequest),
    /// Show a transient notification.
    Notify(Notice),
    /// Move input focus.
    Focus(FocusTarget),
}

/// Outcome of the in-flight relay call, as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Delivered,
    /// Transport failure or non-success status; the reason is for logs,
    /// not for display.
    Failed(String),
}

/// Events fed to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// User edited a visible field.
    FieldEdited(Field, String),
    /// The hidden spam-trap field changed. Only bots do this.
    HoneypotEdited(String),
    /// User pressed send.
    SubmitRequested,
    /// The relay call settled.
    RelaySettled(RelayOutcome),
    /// User asked to send another message.
    ResetRequested,
}

/// Field contents, per-field errors, and lifecycle phase of one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: Submission,
    pub errors: Vec<FieldError>,
    pub phase: Phase,
}

impl FormState {
    /// The error attached to `field`, if any.
    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// The submit control is disabled while a request is in flight.
    pub fn is_submit_disabled(&self) -> bool {
        self.phase == Phase::Submitting
    }
}

/// Apply one event to the form, returning the effects to perform.
pub fn reduce(state: &mut FormState, event: FormEvent) -> Vec<Effect> {
    match event {
        FormEvent::FieldEdited(field, value) => edit_field(state, field, value),
        FormEvent::HoneypotEdited(value) => {
            state.fields.honeypot = value;
            Vec::new()
        }
        FormEvent::SubmitRequested => submit_requested(state),
        FormEvent::RelaySettled(outcome) => relay_settled(state, outcome),
        FormEvent::ResetRequested => reset(state),
    }
}

fn edit_field(state: &mut FormState, field: Field, value: String) -> Vec<Effect> {
    match field {
        Field::Name => state.fields.name = value,
        Field::Email => state.fields.email = value,
        Field::Message => state.fields.message = value,
    }

    // Typing clears that field's error and any lingering success banner.
    state.errors.retain(|e| e.field != field);
    if state.phase == Phase::Success {
        state.phase = Phase::Idle;
    }

    Vec::new()
}

fn submit_requested(state: &mut FormState) -> Vec<Effect> {
    // One request in flight at a time; further submits are no-ops.
    if state.phase == Phase::Submitting {
        return Vec::new();
    }

    // Spam trap: drop silently, no error, no network call.
    if state.fields.is_spam() {
        return Vec::new();
    }

    match validate(&state.fields) {
        Err(errors) => {
            let first = errors[0].message.clone();
            state.errors = errors;
            state.phase = Phase::Idle;
            vec![Effect::Notify(Notice::Failure(format!(
                "Validation Error: {first}"
            )))]
        }
        Ok(()) => {
            state.errors.clear();
            state.phase = Phase::Submitting;
            vec![Effect::SendSubmission(state.fields.to_relay_request())]
        }
    }
}

fn relay_settled(state: &mut FormState, outcome: RelayOutcome) -> Vec<Effect> {
    // A settle event without a request in flight is stale; drop it.
    if state.phase != Phase::Submitting {
        return Vec::new();
    }

    match outcome {
        RelayOutcome::Delivered => {
            state.fields.clear();
            state.errors.clear();
            state.phase = Phase::Success;
            vec![
                Effect::Notify(Notice::Success(SUCCESS_NOTICE.to_string())),
                Effect::Focus(FocusTarget::SuccessRegion),
            ]
        }
        RelayOutcome::Failed(_) => {
            // Keep what the user typed so they can retry.
            state.phase = Phase::Idle;
            vec![Effect::Notify(Notice::Failure(FAILURE_NOTICE.to_string()))]
        }
    }
}

fn reset(state: &mut FormState) -> Vec<Effect> {
    // Cannot reset out from under an in-flight request.
    if state.phase == Phase::Submitting {
        return Vec::new();
    }

    *state = FormState::default();
    vec![Effect::Focus(FocusTarget::FirstField)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> FormState {
        FormState {
            fields: Submission::new("Jane Doe", "jane@example.com", "Hello"),
            ..FormState::default()
        }
    }

    fn send_effects(effects: &[Effect]) -> Vec<&RelayRequest> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::SendSubmission(req) => Some(req),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn valid_submit_produces_exactly_one_send() {
        let mut state = filled_state();
        let effects = reduce(&mut state, FormEvent::SubmitRequested);

        let sends = send_effects(&effects);
        assert_eq!(sends.len(), 1);
        assert_eq!(sends[0].name, "Jane Doe");
        assert_eq!(state.phase, Phase::Submitting);
        assert!(state.is_submit_disabled());
    }

    #[test]
    fn honeypot_blocks_silently_even_when_fields_are_valid() {
        let mut state = filled_state();
        state.fields.honeypot = "gotcha".to_string();

        let effects = reduce(&mut state, FormEvent::SubmitRequested);

        assert!(effects.is_empty());
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn invalid_submit_blocks_with_field_error_and_notice() {
        let mut state = filled_state();
        state.fields.message = String::new();

        let effects = reduce(&mut state, FormEvent::SubmitRequested);

        assert!(send_effects(&effects).is_empty());
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.error_for(Field::Message).is_some());
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::Failure(
                "Validation Error: Message is required".to_string()
            ))]
        );
    }

    #[test]
    fn double_submit_sends_once() {
        let mut state = filled_state();
        let first = reduce(&mut state, FormEvent::SubmitRequested);
        let second = reduce(&mut state, FormEvent::SubmitRequested);

        assert_eq!(send_effects(&first).len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn delivery_clears_fields_and_focuses_success_region() {
        let mut state = filled_state();
        reduce(&mut state, FormEvent::SubmitRequested);
        let effects = reduce(&mut state, FormEvent::RelaySettled(RelayOutcome::Delivered));

        assert_eq!(state.phase, Phase::Success);
        assert_eq!(state.fields, Submission::default());
        assert!(effects.contains(&Effect::Focus(FocusTarget::SuccessRegion)));
    }

    #[test]
    fn failure_keeps_fields_for_retry() {
        let mut state = filled_state();
        reduce(&mut state, FormEvent::SubmitRequested);
        let effects = reduce(
            &mut state,
            FormEvent::RelaySettled(RelayOutcome::Failed("status 500".to_string())),
        );

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.fields.name, "Jane Doe");
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::Failure(FAILURE_NOTICE.to_string()))]
        );
    }

    #[test]
    fn editing_clears_field_error_and_success_banner() {
        let mut state = filled_state();
        state.fields.email = "not-an-address".to_string();
        reduce(&mut state, FormEvent::SubmitRequested);
        assert!(state.error_for(Field::Email).is_some());

        reduce(
            &mut state,
            FormEvent::FieldEdited(Field::Email, "jane@example.com".to_string()),
        );
        assert!(state.error_for(Field::Email).is_none());
    }

    #[test]
    fn reset_returns_to_pristine_state_with_first_field_focus() {
        let mut state = filled_state();
        reduce(&mut state, FormEvent::SubmitRequested);
        reduce(&mut state, FormEvent::RelaySettled(RelayOutcome::Delivered));

        let effects = reduce(&mut state, FormEvent::ResetRequested);

        assert_eq!(state, FormState::default());
        assert_eq!(effects, vec![Effect::Focus(FocusTarget::FirstField)]);
    }

    #[test]
    fn stale_settle_is_ignored() {
        let mut state = filled_state();
        let effects = reduce(&mut state, FormEvent::RelaySettled(RelayOutcome::Delivered));
        assert!(effects.is_empty());
        assert_eq!(state.phase, Phase::Idle);
    }
}
