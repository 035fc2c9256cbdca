//! Folio Core Library
//!
//! Everything behind the portfolio contact pipeline: the submission
//! domain model and its validation rules, the form-controller state
//! machine, the client-side relay transport, and the mailer seam used
//! by the relay daemon, plus the static portfolio catalog and the
//! persisted theme preference.

pub mod catalog;
pub mod domain;
pub mod fakes;
pub mod form;
pub mod mailer;
pub mod obs;
pub mod telemetry;
pub mod theme;
pub mod transport;

pub use domain::submission::{RelayRequest, Submission};
pub use domain::validation::{email_shape_ok, validate, Field, FieldError};

pub use form::controller::{
    reduce, Effect, FocusTarget, FormEvent, FormState, Notice, Phase, RelayOutcome,
};
pub use form::driver::submit;

pub use mailer::resend::ResendMailer;
pub use mailer::{DispatchReceipt, Mailer, MailerError, OutboundEmail};

pub use transport::{HttpRelayTransport, RelayTransport, TransportError};

pub use catalog::{profile, projects, Platform, Profile, Project};
pub use theme::{Theme, ThemeStore, ThemeStoreError};

pub use obs::{
    emit_relay_dispatched, emit_relay_failed, emit_submission_received, emit_submission_rejected,
    AttemptSpan,
};
pub use telemetry::init_tracing;

/// Folio version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
