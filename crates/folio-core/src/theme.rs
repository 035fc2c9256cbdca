//! Persisted theme preference.
//!
//! The one piece of durable client-side state: a light/dark flag read
//! at startup and written on toggle. Stored as a single word in a plain
//! file so any shell can inspect or edit it. Not part of the contact
//! pipeline.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Environment variable overriding the preference directory.
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

const THEME_FILE: &str = "theme";

/// Theme choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeStoreError::UnknownTheme(other.to_string())),
        }
    }
}

/// Errors from reading or writing the preference file.
#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// File-backed store for the theme preference.
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store the preference at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ThemeStore { path: path.into() }
    }

    /// Default location: `$FOLIO_CONFIG_DIR/theme`, falling back to
    /// `.folio/theme` under the home directory, or the current
    /// directory when neither is available.
    pub fn from_env() -> Self {
        let dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".folio")))
            .unwrap_or_else(|_| PathBuf::from(".folio"));
        ThemeStore::new(dir.join(THEME_FILE))
    }

    /// Where the preference lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored preference, or `Theme::Light` when nothing has been
    /// saved yet.
    ///
    /// # Errors
    ///
    /// Returns `ThemeStoreError` when the file exists but is unreadable
    /// or holds an unknown value.
    pub fn load(&self) -> Result<Theme, ThemeStoreError> {
        if !self.path.exists() {
            return Ok(Theme::default());
        }
        fs::read_to_string(&self.path)?.parse()
    }

    /// Persist `theme`, creating the parent directory if needed.
    pub fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{theme}\n"))?;
        Ok(())
    }

    /// Flip the stored preference and return the new value.
    pub fn toggle(&self) -> Result<Theme, ThemeStoreError> {
        let next = self.load()?.toggled();
        self.save(next)?;
        Ok(next)
    }
}
