//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for diagnostics.

/// A cursor for traversing source code character by character.
///
/// The cursor owns the scan position over a borrowed, immutable source. Line
/// and column always describe the next unconsumed character; the column is
/// counted in characters, not bytes.
///
/// # Example
///
/// ```
/// use cscan_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
/// assert_eq!(cursor.current_char(), 'i');
/// assert_eq!(cursor.advance(), Some('i'));
/// assert_eq!(cursor.current_char(), 'n');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source; callers
    /// that need to tell a real NUL apart check [`Cursor::is_at_end`] first.
    ///
    /// # Example
    ///
    /// ```
    /// use cscan_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(self.position)
    }

    /// Returns the character `offset` characters past the current one.
    ///
    /// `peek_char(0)` is the current character and `peek_char(1)` the one
    /// after it. Never advances.
    ///
    /// # Example
    ///
    /// ```
    /// use cscan_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("/*");
    /// assert_eq!(cursor.peek_char(0), '/');
    /// assert_eq!(cursor.peek_char(1), '*');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        if offset == 0 {
            return self.current_char();
        }
        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Decodes the character starting at byte `pos`.
    #[inline]
    fn char_at(&self, pos: usize) -> char {
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Consumes one character and returns it.
    ///
    /// Updates line and column tracking: a newline moves to the start of the
    /// next line, anything else moves one column right. Returns `None` and
    /// changes nothing if already at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use cscan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// assert_eq!(cursor.advance(), Some('a'));
    /// assert_eq!(cursor.advance(), Some('\n'));
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// ```
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        if self.position >= self.source.len() {
            return None;
        }

        let c = self.char_at(self.position);
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Advances the cursor by up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use cscan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("   x");
    /// cursor.advance_while(char::is_whitespace);
    /// assert_eq!(cursor.current_char(), 'x');
    /// ```
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use cscan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between byte `start` and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use cscan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("int x");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "int");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    ///
    /// The lexer takes one at the start of every token to remember where the
    /// token began.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }
}

/// Cursor state captured at one point of the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
