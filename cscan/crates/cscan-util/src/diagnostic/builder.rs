//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending source line underneath a message.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::{SourceFile, Span};
use crate::error::SourceResult;

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the range to
/// underline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Build a snippet for `span` from the file it points into.
    ///
    /// The underline covers the span's characters on its first line only;
    /// a span that runs onto later lines is underlined to the end of the
    /// first one.
    ///
    /// # Examples
    ///
    /// ```
    /// use cscan_util::{SourceFile, SourceSnippet, Span};
    ///
    /// let file = SourceFile::new("a.c", "x = \"abc\ny");
    /// let snippet = SourceSnippet::from_span(&file, Span::new(4, 10, 1, 5)).unwrap();
    /// assert_eq!(snippet.line, "x = \"abc");
    /// assert_eq!((snippet.start_column, snippet.end_column), (5, 9));
    /// ```
    pub fn from_span(file: &SourceFile, span: Span) -> SourceResult<Self> {
        let line = file.span_line(span)?;
        let start_column = span.column as usize;
        let content = file.content();
        let start = span.start.min(content.len());
        let end = span.end.clamp(start, content.len());
        let width = content
            .get(start..end)
            .unwrap_or("")
            .chars()
            .take_while(|&c| c != '\n' && c != '\r')
            .count();
        Ok(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column: start_column + width,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns a formatted string showing the source line with carets (^)
    /// under the relevant range.
    ///
    /// # Examples
    ///
    /// ```
    /// use cscan_util::{SourceFile, SourceSnippet, Span};
    ///
    /// let file = SourceFile::new("a.c", "int x;");
    /// let snippet = SourceSnippet::from_span(&file, Span::new(4, 5, 1, 5)).unwrap();
    /// assert_eq!(snippet.format(), "  1 | int x;\n    |     ^");
    /// ```
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        );
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use cscan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use cscan_util::Span;
///
/// let diag = DiagnosticBuilder::warning("unterminated block comment")
///     .code(DiagnosticCode::W_UNTERMINATED_COMMENT)
///     .span(Span::new(0, 6, 1, 1))
///     .build();
/// assert_eq!(diag.level, Level::Warning);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the primary span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// # Examples
    ///
    /// ```
    /// use cscan_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let mut handler = Handler::new();
    /// DiagnosticBuilder::warning("number split").emit(&mut handler);
    /// assert_eq!(handler.diagnostics()[0].message, "number split");
    /// ```
    pub fn emit(self, handler: &mut Handler) {
        handler.emit_diagnostic(self.build());
    }
}
