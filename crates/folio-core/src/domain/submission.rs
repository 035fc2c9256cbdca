//! The contact submission entity and its wire payload.

use serde::{Deserialize, Serialize};

/// A contact-form submission as held by the form controller.
///
/// Lives in memory for the duration of one submission attempt and is
/// cleared on successful relay; never persisted anywhere.
///
/// `honeypot` is the hidden spam-trap field. Legitimate users never
/// populate it, and it is deliberately absent from [`RelayRequest`] so
/// it can never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub honeypot: String,
}

impl Submission {
    /// Build a submission with an empty honeypot.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Submission {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            honeypot: String::new(),
        }
    }

    /// True when the hidden spam-trap field has been filled in.
    pub fn is_spam(&self) -> bool {
        !self.honeypot.is_empty()
    }

    /// The wire payload, with surrounding whitespace stripped from every
    /// field. Honeypot and any other transient state are excluded.
    pub fn to_relay_request(&self) -> RelayRequest {
        RelayRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Submission::default();
    }
}

/// The `{name, email, message}` body POSTed to the relay endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_request_trims_whitespace() {
        let submission = Submission::new("  Jane Doe ", " jane@example.com", "Hello \n");
        let request = submission.to_relay_request();
        assert_eq!(request.name, "Jane Doe");
        assert_eq!(request.email, "jane@example.com");
        assert_eq!(request.message, "Hello");
    }

    #[test]
    fn honeypot_never_serializes() {
        let mut submission = Submission::new("Bot", "bot@spam.example", "buy things");
        submission.honeypot = "http://spam.example".to_string();

        let json = serde_json::to_value(submission.to_relay_request()).unwrap();
        assert!(json.get("honeypot").is_none());
        assert_eq!(json.get("name").unwrap(), "Bot");
    }

    #[test]
    fn clear_resets_every_field() {
        let mut submission = Submission::new("Jane", "jane@example.com", "Hi");
        submission.honeypot = "x".to_string();
        submission.clear();
        assert_eq!(submission, Submission::default());
    }
}
