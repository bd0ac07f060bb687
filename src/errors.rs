//! Unified application error type.
//! All modules (store, core, auth, cli, export) return AppError so that
//! every failure ends up on the same user-visible message channel.

use crate::store::StoreError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database / remote store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    /// A store call failed; `action` is the user-facing prefix.
    #[error("{action}: {source}")]
    Remote {
        action: String,
        #[source]
        source: StoreError,
    },

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Please enter both a start and an end time")]
    MissingManualTimes,

    #[error("End time must be after start time ({start} → {end})")]
    EndBeforeStart { start: String, end: String },

    #[error("No valid start time found. Start the timer first.")]
    NoActiveSession,

    #[error("Timer already running since {0}")]
    SessionAlreadyRunning(String),

    #[error("No data to export")]
    NoData,

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    // ---------------------------
    // Auth
    // ---------------------------
    #[error("Not signed in. Run `workhours login` first.")]
    NotSignedIn,

    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("A user with email {0} already exists")]
    UserExists(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / share
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Share error: {0}")]
    Share(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Wrap a store failure with the message prefix shown to the user.
    pub fn remote(action: impl Into<String>, source: StoreError) -> Self {
        AppError::Remote {
            action: action.into(),
            source,
        }
    }

    /// True for errors caused by user input rather than a failing collaborator.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::MissingManualTimes
                | AppError::EndBeforeStart { .. }
                | AppError::NoActiveSession
                | AppError::SessionAlreadyRunning(_)
                | AppError::NoData
                | AppError::InvalidSetting(_)
                | AppError::PasswordMismatch
                | AppError::InvalidEmail(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
