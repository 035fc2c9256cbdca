//! Folio relay daemon library.
//!
//! A stateless HTTP surface in front of the mailer: one POST endpoint
//! that forwards validated contact submissions to the email provider,
//! plus read-only catalog endpoints. Each request is handled
//! independently; there is no shared mutable state between requests.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
