//! Shared application state.

use std::sync::Arc;

use folio_core::Mailer;

/// Wiring shared by every request handler.
///
/// Nothing in here mutates between requests; concurrent requests need
/// no coordination.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
    pub contact_from: Arc<str>,
    pub contact_to: Arc<str>,
}

impl AppState {
    pub fn new(mailer: Arc<dyn Mailer>, contact_from: &str, contact_to: &str) -> Self {
        AppState {
            mailer,
            contact_from: Arc::from(contact_from),
            contact_to: Arc::from(contact_to),
        }
    }
}
