//! Whole-input entry points.
//!
//! [`tokenize`] is the plain interface: source in, tokens out. The other
//! functions keep the warnings the lexer reports along the way.

use cscan_util::{Diagnostic, DiagnosticCode, Handler};
use thiserror::Error;

use crate::token::Token;
use crate::Lexer;

/// Error returned when a scan is required to be clean.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The scan reported at least one diagnostic.
    #[error("{count} diagnostic(s) reported, first: {first}")]
    Diagnostics {
        /// Number of diagnostics reported
        count: usize,
        /// The earliest one in source order
        first: Box<Diagnostic>,
    },
}

/// Tokens together with the diagnostics reported while producing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Tokens in source order
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were reported
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput {
    /// Returns true if any diagnostic was reported.
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Drops diagnostics carrying any of the given codes.
    pub fn allow(&mut self, codes: &[DiagnosticCode]) {
        self.diagnostics
            .retain(|diag| diag.code.map_or(true, |code| !codes.contains(&code)));
    }

    /// Returns the tokens, or an error if anything was reported.
    pub fn into_strict(self) -> Result<Vec<Token>, LexError> {
        let count = self.diagnostics.len();
        match self.diagnostics.into_iter().next() {
            Some(first) => Err(LexError::Diagnostics {
                count,
                first: Box::new(first),
            }),
            None => Ok(self.tokens),
        }
    }
}

/// Scans `source` into tokens.
///
/// This never fails. Malformed input still yields tokens, see
/// [`tokenize_with_diagnostics`] to find out what was wrong with it.
///
/// # Example
///
/// ```
/// use cscan_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("// hi\nint");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Comment);
/// assert_eq!(tokens[0].lexeme, " hi");
/// assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_diagnostics(source).tokens
}

/// Scans `source` and keeps the warnings.
pub fn tokenize_with_diagnostics(source: &str) -> LexOutput {
    let mut handler = Handler::new();
    let tokens = Lexer::new(source, &mut handler).tokenize();
    LexOutput {
        tokens,
        diagnostics: handler.take_diagnostics(),
    }
}

/// Scans `source` and fails on the first sign of malformed input.
pub fn tokenize_strict(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with_diagnostics(source).into_strict()
}

static_assertions::assert_impl_all!(LexOutput: Send, Sync);
static_assertions::assert_impl_all!(LexError: Send, Sync, std::error::Error);
