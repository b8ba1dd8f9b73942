//! Diagnostic codes for categorizing scanner warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, enabling users to look up documentation and suppress
//! specific warnings.
//!
//! # Examples
//!
//! ```
//! use cscan_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::W_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "W");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "W1001");
//! ```

use crate::error::{DiagnosticError, DiagnosticResult};

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use cscan_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 1001);
    /// assert_eq!(code, DiagnosticCode::W_UNTERMINATED_STRING);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "W1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// Parse a code written as `E1234` or `W1234` (case-insensitive prefix).
    ///
    /// # Examples
    ///
    /// ```
    /// use cscan_util::diagnostic::DiagnosticCode;
    ///
    /// assert_eq!(
    ///     DiagnosticCode::parse("w1003").unwrap(),
    ///     DiagnosticCode::W_SPLIT_NUMBER
    /// );
    /// assert!(DiagnosticCode::parse("X1").is_err());
    /// ```
    pub fn parse(text: &str) -> DiagnosticResult<Self> {
        let invalid = || DiagnosticError::InvalidCode(text.to_string());
        let mut chars = text.chars();
        let prefix = match chars.next() {
            Some('E' | 'e') => "E",
            Some('W' | 'w') => "W",
            _ => return Err(invalid()),
        };
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = digits.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self::new(prefix, number))
    }

    // =========================================================================
    // SCANNER WARNING CODES (W1001-W1999)
    // =========================================================================

    /// W1001: String literal reaches end of input without a closing quote
    pub const W_UNTERMINATED_STRING: Self = Self::new("W", 1001);
    /// W1002: Block comment reaches end of input without `*/`
    pub const W_UNTERMINATED_COMMENT: Self = Self::new("W", 1002);
    /// W1003: Numeric literal run stopped at a second decimal point
    pub const W_SPLIT_NUMBER: Self = Self::new("W", 1003);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 1002).as_str(), "W1002");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::W_SPLIT_NUMBER;
        assert_eq!(format!("{}", code), "W1003");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(W1003)");
    }

    #[test]
    fn test_scanner_codes_are_distinct() {
        let codes = [
            DiagnosticCode::W_UNTERMINATED_STRING,
            DiagnosticCode::W_UNTERMINATED_COMMENT,
            DiagnosticCode::W_SPLIT_NUMBER,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_parse_round_trips_display() {
        let code = DiagnosticCode::W_UNTERMINATED_COMMENT;
        assert_eq!(DiagnosticCode::parse(&code.to_string()).unwrap(), code);
        assert_eq!(DiagnosticCode::parse("E0001").unwrap(), DiagnosticCode::new("E", 1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "W", "W12345", "Wabc", "1001", "W-1"] {
            assert_eq!(
                DiagnosticCode::parse(text),
                Err(DiagnosticError::InvalidCode(text.to_string())),
                "{text:?} should be rejected"
            );
        }
    }
}
