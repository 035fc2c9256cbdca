//! HTTP surface of the relay daemon.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::Instrument;
use uuid::Uuid;

use folio_core::{
    catalog, emit_relay_dispatched, emit_relay_failed, emit_submission_received,
    emit_submission_rejected, OutboundEmail, RelayRequest,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(contact))
        .route("/api/projects", get(projects))
        .route("/api/profile", get(profile))
        .with_state(state)
}

/// Incoming contact body.
///
/// Fields default to empty at the parse layer so an absent field maps
/// to the 400 response, not a deserialization rejection. Unknown fields
/// (a leaked honeypot, say) are ignored.
#[derive(Debug, Deserialize)]
pub struct ContactBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

async fn contact(
    State(state): State<AppState>,
    Json(body): Json<ContactBody>,
) -> Result<Json<Value>, ApiError> {
    let attempt_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!("contact.attempt", attempt_id = %attempt_id);

    async move {
        emit_submission_received(&attempt_id, body.name.len(), body.message.len());

        // Second validation pass; the relay never trusts client checks.
        if body.name.trim().is_empty()
            || body.email.trim().is_empty()
            || body.message.trim().is_empty()
        {
            emit_submission_rejected(&attempt_id, "missing required fields");
            return Err(ApiError::MissingFields);
        }

        let request = RelayRequest {
            name: body.name,
            email: body.email,
            message: body.message,
        };
        let email =
            OutboundEmail::contact_message(&state.contact_from, &state.contact_to, &request);

        // One dispatch attempt per request: no retry, no deduplication.
        match state.mailer.send(&email).await {
            Ok(receipt) => {
                emit_relay_dispatched(&attempt_id, &receipt.provider_id);
                Ok(Json(json!({ "success": true })))
            }
            Err(err) => {
                emit_relay_failed(&attempt_id, &err);
                Err(ApiError::Relay(err))
            }
        }
    }
    .instrument(span)
    .await
}

async fn projects() -> Json<&'static [catalog::Project]> {
    Json(catalog::projects())
}

async fn profile() -> Json<&'static catalog::Profile> {
    Json(catalog::profile())
}
