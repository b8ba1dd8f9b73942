//! Error handling module for the cscan CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use cscan_lex::LexError;
use thiserror::Error;

/// Main error type for the cscan CLI application.
#[derive(Error, Debug)]
pub enum CscanError {
    /// Configuration could not be found, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The file that failed
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Strict mode found diagnostics.
    #[error("Lexing failed: {0}")]
    Lex(#[from] LexError),

    /// The logging subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias using CscanError.
pub type Result<T> = std::result::Result<T, CscanError>;
