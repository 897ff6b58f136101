//! Unified application error type.
//! Every module (api, core, export, cli) returns AppError so that the CLI
//! can report failures in one place.

use std::collections::BTreeMap;
use std::io;
use thiserror::Error;

/// Message used whenever the backend gives us nothing better.
pub const NETWORK_ERROR: &str = "Network error";

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Backend / transport
    // ---------------------------
    #[error("Network error ({0})")]
    Network(String),

    #[error("Session expired, please log in again")]
    SessionExpired,

    #[error("Not logged in: run `siteops login` first")]
    LoginRequired,

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response from {0}")]
    Decode(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("No rows to export for '{0}'")]
    EmptyDataset(String),

    #[error("No column layout registered for report '{0}'")]
    MissingColumnSpec(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // UI state
    // ---------------------------
    #[error("A status change for '{0}' is still in flight")]
    ToggleInFlight(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for the errors that invalidate the stored session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AppError::SessionExpired | AppError::LoginRequired)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Other(format!("JSON error: {e}"))
    }
}

pub type AppResult<T> = Result<T, AppError>;
