//! Environment configuration for the relay daemon.
//!
//! Provider credentials come exclusively from the environment; there is
//! no fallback literal anywhere. Startup fails when required values are
//! absent so a misconfigured deployment cannot limp along failing every
//! relay attempt at runtime.

use anyhow::{Context, Result};

/// Listen port. Optional; defaults to 3001.
pub const PORT_ENV: &str = "FOLIO_PORT";

/// Resend API key. Required.
pub const API_KEY_ENV: &str = "RESEND_API_KEY";

/// Sender identity for outbound email. Optional.
pub const FROM_ENV: &str = "CONTACT_FROM";

/// Destination address for contact messages. Required.
pub const TO_ENV: &str = "CONTACT_TO";

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_FROM: &str = "Folio <onboarding@resend.dev>";

/// Runtime configuration, loaded once at startup.
pub struct Config {
    pub port: u16,
    pub resend_api_key: String,
    pub contact_from: String,
    pub contact_to: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Fails when `RESEND_API_KEY` or `CONTACT_TO` is missing or empty,
    /// or when `FOLIO_PORT` is set to something that is not a port
    /// number.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var(PORT_ENV) {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid {PORT_ENV} value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let resend_api_key = require(API_KEY_ENV)?;
        let contact_to = require(TO_ENV)?;
        let contact_from = std::env::var(FROM_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FROM.to_string());

        Ok(Config {
            port,
            resend_api_key,
            contact_from,
            contact_to,
        })
    }
}

fn require(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{key} must be set"))
}
