//! Core error types for cscan-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source file lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Invalid line number
    #[error("Invalid line number: {line} (file has {line_count} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the file
        line_count: usize,
    },

    /// Span does not carry a usable location
    #[error("Span has no source location")]
    MissingLocation,
}

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// Invalid diagnostic code
    #[error("Invalid diagnostic code: {0}")]
    InvalidCode(String),
}

/// Result type alias for source file operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_line_display() {
        let err = SourceError::InvalidLineNumber {
            line: 7,
            line_count: 3,
        };
        assert_eq!(err.to_string(), "Invalid line number: 7 (file has 3 lines)");
    }

    #[test]
    fn test_invalid_code_display() {
        let err = DiagnosticError::InvalidCode("X12".to_string());
        assert_eq!(err.to_string(), "Invalid diagnostic code: X12");
    }
}
