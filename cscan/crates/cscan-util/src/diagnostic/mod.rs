//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! diagnostics. The scanner never fails on malformed input; instead it
//! reports what it noticed here and keeps going.
//!
//! # Examples
//!
//! ```
//! use cscan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use cscan_util::Span;
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::warning("unterminated string literal")
//!     .code(DiagnosticCode::W_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{SourceFile, Span};
use std::fmt;

/// Diagnostic severity level
///
/// The scanner never rejects input, so everything it reports is a warning.
///
/// # Examples
///
/// ```
/// use cscan_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// A warning that doesn't prevent further processing
    Warning,
}

impl Level {
    /// Lower-case name used in rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Warning => "warning",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic message with severity and location
///
/// Built with [`DiagnosticBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Render the diagnostic for a terminal.
    ///
    /// The header carries level and code, followed by the location and the
    /// offending source line when the span can be resolved in `file`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cscan_util::{DiagnosticBuilder, DiagnosticCode, SourceFile, Span};
    ///
    /// let file = SourceFile::new("main.c", "s = \"abc");
    /// let diag = DiagnosticBuilder::warning("unterminated string literal")
    ///     .code(DiagnosticCode::W_UNTERMINATED_STRING)
    ///     .span(Span::new(4, 8, 1, 5))
    ///     .build();
    ///
    /// let text = diag.render(&file);
    /// assert!(text.starts_with("warning[W1001]: unterminated string literal\n"));
    /// assert!(text.contains("--> main.c:1:5"));
    /// assert!(text.contains("^^^^"));
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };

        if self.span.has_location() {
            out.push_str(&format!(
                "  --> {}:{}:{}\n",
                file.name(),
                self.span.line,
                self.span.column
            ));
            if let Ok(snippet) = SourceSnippet::from_span(file, self.span) {
                out.push_str(&snippet.format());
                out.push('\n');
            }
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if self.span.has_location() {
            write!(f, " at {}:{}", self.span.line, self.span.column)?;
        }
        Ok(())
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` collects diagnostics in emission order and hands them back
/// once scanning is done.
///
/// # Examples
///
/// ```
/// use cscan_util::diagnostic::{DiagnosticBuilder, Handler};
///
/// let mut handler = Handler::new();
/// DiagnosticBuilder::warning("odd").emit(&mut handler);
/// assert_eq!(handler.warning_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Returns true if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Borrow all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take all diagnostics, leaving the handler empty
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
