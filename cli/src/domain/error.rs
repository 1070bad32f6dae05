//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `crate::output`, `tokio`, `std::fs`, or `std::process`. All error types
//! implement `thiserror::Error` and convert to `anyhow::Error` via `?`.

use thiserror::Error;

// ── Selection errors ──────────────────────────────────────────────────────────

/// Errors raised while mapping operator input back to a table row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid VM number '{row}'. Enter a number between 1 and {max}.")]
    InvalidSelection { row: String, max: usize },
}

// ── Menu errors ───────────────────────────────────────────────────────────────

/// Errors raised while parsing a numbered menu choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Invalid option. Please choose a number between 1 and {max}.")]
    OutOfRange { max: usize },
}

// ── Gateway errors ────────────────────────────────────────────────────────────

/// Errors raised by a remote state change request.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("command exited with status {code}: {stderr}")]
    CommandFailed { code: String, stderr: String },

    #[error("command could not be executed: {0}")]
    Execution(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for command_timeout_secs: {0}. It must be greater than zero.")]
    InvalidTimeout(u64),

    #[error("Invalid value for az_path: it must not be empty.")]
    EmptyAzPath,
}
