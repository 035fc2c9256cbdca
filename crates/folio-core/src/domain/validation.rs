//! Field-level validation for contact submissions.
//!
//! A submission is valid when `name`, `email`, and `message` are all
//! non-empty after trimming and `email` passes the minimal address
//! shape check. The honeypot field is never validated for shape; the
//! spam guard lives in the form controller.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::submission::Submission;

/// Minimal `local@domain.tld` shape: no whitespace, no second `@`, at
/// least one dot in the domain part. Deliberately permissive, not RFC
/// 5322.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A required form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Display label used in prompts and error listings.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// A validation failure on a single field, carrying its user-facing
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        FieldError {
            field,
            message: message.to_string(),
        }
    }
}

/// True when `email` matches the minimal address shape.
pub fn email_shape_ok(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Check every required field, reporting all failures in field order.
///
/// # Errors
///
/// Returns the full list of [`FieldError`]s when any check fails. The
/// first entry is the one surfaced as a transient notification.
pub fn validate(submission: &Submission) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if submission.name.trim().is_empty() {
        errors.push(FieldError::new(Field::Name, "Name is required"));
    }

    let email = submission.email.trim();
    if email.is_empty() {
        errors.push(FieldError::new(Field::Email, "Email is required"));
    } else if !email_shape_ok(email) {
        errors.push(FieldError::new(
            Field::Email,
            "Please enter a valid email address",
        ));
    }

    if submission.message.trim().is_empty() {
        errors.push(FieldError::new(Field::Message, "Message is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
