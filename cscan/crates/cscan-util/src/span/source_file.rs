//! Source file with precomputed line starts.
//!
//! Used to turn a [`Span`]'s line number back into the text of that line when
//! rendering diagnostics.

use std::sync::Arc;

use super::Span;
use crate::error::{SourceError, SourceResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use cscan_util::span::SourceFile;
///
/// let file = SourceFile::new("main.c", "int main() {}");
/// assert_eq!(file.name(), "main.c");
/// assert_eq!(file.content(), "int main() {}");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .char_indices()
                    .filter(|&(_, ch)| ch == '\n')
                    .map(|(i, _)| i + 1),
            )
            .collect()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use cscan_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.c", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text of a line (1-based), without its line terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cscan_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.c", "int x;\r\nreturn 0;\n");
    /// assert_eq!(file.line_text(1).unwrap(), "int x;");
    /// assert_eq!(file.line_text(2).unwrap(), "return 0;");
    /// assert!(file.line_text(9).is_err());
    /// ```
    pub fn line_text(&self, line: usize) -> SourceResult<&str> {
        let invalid = || SourceError::InvalidLineNumber {
            line,
            line_count: self.line_count(),
        };
        let index = line.checked_sub(1).ok_or_else(invalid)?;
        let start = *self.line_starts.get(index).ok_or_else(invalid)?;
        let end = self
            .line_starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        Ok(text.trim_end_matches(['\n', '\r']))
    }

    /// Get the line a span starts on.
    pub fn span_line(&self, span: Span) -> SourceResult<&str> {
        if !span.has_location() {
            return Err(SourceError::MissingLocation);
        }
        self.line_text(span.line as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_line_count_trailing_newline() {
        let file = SourceFile::new("a.c", "a\nb\n");
        assert_eq!(file.line_count(), 3);
        assert_eq!(file.line_text(3).unwrap(), "");
    }

    #[test]
    fn test_line_text_zero_is_invalid() {
        let file = SourceFile::new("a.c", "a");
        assert_eq!(
            file.line_text(0),
            Err(SourceError::InvalidLineNumber {
                line: 0,
                line_count: 1
            })
        );
    }

    #[test]
    fn test_span_line_requires_location() {
        let file = SourceFile::new("a.c", "int x;");
        assert_eq!(file.span_line(Span::DUMMY), Err(SourceError::MissingLocation));
        assert_eq!(file.span_line(Span::new(4, 5, 1, 5)).unwrap(), "int x;");
    }

    #[test]
    fn test_line_text_multibyte() {
        let file = SourceFile::new("a.c", "é x\nyz");
        assert_eq!(file.line_text(1).unwrap(), "é x");
        assert_eq!(file.span_line(Span::new(5, 6, 2, 1)).unwrap(), "yz");
    }

    #[quickcheck]
    fn prop_every_line_is_readable(content: String) -> bool {
        let file = SourceFile::new("q.c", content.as_str());
        (1..=file.line_count()).all(|line| {
            file.line_text(line)
                .map(|text| !text.contains('\n') && content.contains(text))
                .unwrap_or(false)
        }) && file.line_text(file.line_count() + 1).is_err()
    }
}
