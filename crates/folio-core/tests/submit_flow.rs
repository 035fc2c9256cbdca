//! End-to-end tests for the submit flow: reducer, driver, and transport
//! working together over the in-memory fake.

use folio_core::fakes::MemoryTransport;
use folio_core::form::controller::{FAILURE_NOTICE, SUCCESS_NOTICE};
use folio_core::{
    reduce, submit, Effect, Field, FocusTarget, FormEvent, FormState, Notice, Phase, Submission,
    TransportError,
};

fn jane() -> FormState {
    FormState {
        fields: Submission::new("Jane Doe", "jane@example.com", "Hello"),
        ..FormState::default()
    }
}

#[tokio::test]
async fn valid_submission_reaches_the_transport_exactly_once() {
    let transport = MemoryTransport::new();
    let mut state = jane();

    let effects = submit(&mut state, &transport).await;

    assert_eq!(transport.request_count(), 1);
    let request = &transport.requests()[0];
    assert_eq!(request.name, "Jane Doe");
    assert_eq!(request.email, "jane@example.com");
    assert_eq!(request.message, "Hello");

    assert_eq!(state.phase, Phase::Success);
    assert_eq!(state.fields, Submission::default());
    assert!(effects.contains(&Effect::Notify(Notice::Success(SUCCESS_NOTICE.to_string()))));
    assert!(effects.contains(&Effect::Focus(FocusTarget::SuccessRegion)));
}

#[tokio::test]
async fn honeypot_makes_no_network_call_and_shows_nothing() {
    let transport = MemoryTransport::new();
    let mut state = jane();
    state.fields.honeypot = "filled by a bot".to_string();

    let effects = submit(&mut state, &transport).await;

    assert_eq!(transport.request_count(), 0);
    assert!(effects.is_empty());
    assert!(state.errors.is_empty());
    assert_eq!(state.phase, Phase::Idle);
}

#[tokio::test]
async fn each_missing_field_blocks_locally_with_its_own_error() {
    for field in [Field::Name, Field::Email, Field::Message] {
        let transport = MemoryTransport::new();
        let mut state = jane();
        match field {
            Field::Name => state.fields.name = String::new(),
            Field::Email => state.fields.email = String::new(),
            Field::Message => state.fields.message = String::new(),
        }

        submit(&mut state, &transport).await;

        assert_eq!(transport.request_count(), 0, "{field:?}");
        assert!(state.error_for(field).is_some(), "{field:?}");
        assert_eq!(state.phase, Phase::Idle);
    }
}

#[tokio::test]
async fn relay_failure_keeps_fields_and_surfaces_a_notice() {
    let transport = MemoryTransport::new();
    transport.push_outcome(Err(TransportError::Status { status: 500 }));
    let mut state = jane();

    let effects = submit(&mut state, &transport).await;

    assert_eq!(transport.request_count(), 1);
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.fields.name, "Jane Doe");
    assert_eq!(state.fields.message, "Hello");
    assert!(effects.contains(&Effect::Notify(Notice::Failure(FAILURE_NOTICE.to_string()))));
}

#[tokio::test]
async fn network_failure_is_indistinguishable_from_status_failure_for_the_user() {
    let transport = MemoryTransport::new();
    transport.push_outcome(Err(TransportError::Network("connection refused".to_string())));
    let mut state = jane();

    let effects = submit(&mut state, &transport).await;

    assert_eq!(state.phase, Phase::Idle);
    assert!(effects.contains(&Effect::Notify(Notice::Failure(FAILURE_NOTICE.to_string()))));
}

#[tokio::test]
async fn retry_after_failure_succeeds_without_retyping() {
    let transport = MemoryTransport::new();
    transport.push_outcome(Err(TransportError::Status { status: 502 }));
    let mut state = jane();

    submit(&mut state, &transport).await;
    assert_eq!(state.phase, Phase::Idle);

    // Fields were retained; a second attempt goes straight through.
    submit(&mut state, &transport).await;
    assert_eq!(state.phase, Phase::Success);
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn send_another_message_resets_to_pristine_and_focuses_first_field() {
    let transport = MemoryTransport::new();
    let mut state = jane();
    submit(&mut state, &transport).await;
    assert_eq!(state.phase, Phase::Success);

    let effects = reduce(&mut state, FormEvent::ResetRequested);

    assert_eq!(state, FormState::default());
    assert_eq!(effects, vec![Effect::Focus(FocusTarget::FirstField)]);

    // Reset is idempotent.
    let effects = reduce(&mut state, FormEvent::ResetRequested);
    assert_eq!(state, FormState::default());
    assert_eq!(effects, vec![Effect::Focus(FocusTarget::FirstField)]);
}

#[tokio::test]
async fn submit_while_in_flight_is_a_no_op() {
    let transport = MemoryTransport::new();
    let mut state = jane();

    // Freeze the form mid-flight by reducing the submit event without
    // settling it.
    let effects = reduce(&mut state, FormEvent::SubmitRequested);
    assert!(matches!(effects[0], Effect::SendSubmission(_)));
    assert!(state.is_submit_disabled());

    // A second trigger while disabled reaches neither reducer effects
    // nor the transport.
    let effects = submit(&mut state, &transport).await;
    assert!(effects.is_empty());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn payload_is_trimmed_before_it_reaches_the_wire() {
    let transport = MemoryTransport::new();
    let mut state = FormState {
        fields: Submission::new("  Jane Doe  ", " jane@example.com ", "  Hello  "),
        ..FormState::default()
    };

    submit(&mut state, &transport).await;

    let request = &transport.requests()[0];
    assert_eq!(request.name, "Jane Doe");
    assert_eq!(request.email, "jane@example.com");
    assert_eq!(request.message, "Hello");
}
