//! Error types for shopcheck operations.
//!
//! This module defines [`ShopcheckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ShopcheckError` for errors that abort a command (bad settings, a
//!   report that cannot be written)
//! - Failures *inside* a check never surface here: they become FAIL results
//!   (see [`crate::http::CallError`])
//! - Use `anyhow::Error` (via `ShopcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for shopcheck operations.
#[derive(Debug, Error)]
pub enum ShopcheckError {
    /// Settings file not found at the given location.
    #[error("Settings file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A setting has an unusable value.
    #[error("Invalid setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },

    /// Two checks with the same name were registered in one run.
    #[error("Check '{name}' is already registered")]
    DuplicateCheck { name: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    /// Writing the JSON report failed.
    #[error("Failed to write report to {path}: {message}")]
    ReportWrite { path: PathBuf, message: String },

    /// Shell command could not be started.
    #[error("Command failed to start: {command}")]
    CommandFailed { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for shopcheck operations.
pub type Result<T> = std::result::Result<T, ShopcheckError>;
