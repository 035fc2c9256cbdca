//! HTTP error surface for the relay endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use folio_core::MailerError;

/// Ways a contact request can fail.
///
/// Provider detail never reaches the client; the 500 body is generic
/// and the diagnostics go to the server log.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was absent or empty. This is the server-side
    /// check, independent of anything the client validated.
    #[error("missing required fields")]
    MissingFields,

    /// The outbound provider call failed.
    #[error("relay failed: {0}")]
    Relay(#[from] MailerError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            ApiError::Relay(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send message"),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
