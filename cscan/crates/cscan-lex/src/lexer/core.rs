//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the leading-character
//! classification and the dispatch loop.

use cscan_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::cursor::{Cursor, CursorSnapshot};
use crate::token::{Token, TokenKind};
use crate::unicode;

/// Category of the character a token starts with.
///
/// The lexer dispatches on this, so the arm order of [`classify`] is the
/// priority order of the sub-scanners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Skipped without producing a token
    Whitespace,
    /// Letter or underscore
    IdentStart,
    /// Decimal digit
    Digit,
    /// Double quote
    Quote,
    /// `/`, which may open a comment
    Slash,
    /// Anything else
    Other,
}

/// Classifies the first character of a token.
///
/// # Example
///
/// ```
/// use cscan_lex::lexer::{classify, CharClass};
///
/// assert_eq!(classify('_'), CharClass::IdentStart);
/// assert_eq!(classify('7'), CharClass::Digit);
/// assert_eq!(classify('#'), CharClass::Other);
/// ```
pub fn classify(c: char) -> CharClass {
    match c {
        c if unicode::is_whitespace(c) => CharClass::Whitespace,
        c if unicode::is_ident_start(c) => CharClass::IdentStart,
        c if unicode::is_digit(c) => CharClass::Digit,
        '"' => CharClass::Quote,
        '/' => CharClass::Slash,
        _ => CharClass::Other,
    }
}

/// Lexer for C-like source text.
///
/// The lexer transforms source code text into a sequence of tokens. It never
/// fails: malformed constructs (an unterminated string or block comment, a
/// number with two decimal points) still produce tokens, and a warning is
/// reported to the handler.
///
/// # Example
///
/// ```
/// use cscan_util::Handler;
/// use cscan_lex::{Lexer, TokenKind};
///
/// let mut handler = Handler::new();
/// let tokens = Lexer::new("int x=10;", &mut handler).tokenize();
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [
///     TokenKind::Keyword,
///     TokenKind::Identifier,
///     TokenKind::Operator,
///     TokenKind::Number,
///     TokenKind::Operator,
/// ]);
/// assert!(handler.is_empty());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Collects warnings about malformed input.
    handler: &'a mut Handler,

    /// Cursor state at the first character of the current token.
    token_start: CursorSnapshot,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        let cursor = Cursor::new(source);
        let token_start = cursor.snapshot();
        Self {
            cursor,
            handler,
            token_start,
        }
    }

    /// Scans the whole input and returns the tokens in source order.
    pub fn tokenize(mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        tracing::debug!(
            tokens = tokens.len(),
            diagnostics = self.handler.diagnostics().len(),
            bytes = self.cursor.source().len(),
            "scan finished"
        );
        tokens
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Whitespace is skipped here and never becomes a token.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.cursor.is_at_end() {
                return None;
            }

            self.token_start = self.cursor.snapshot();

            let token = match classify(self.cursor.current_char()) {
                CharClass::Whitespace => {
                    self.skip_whitespace();
                    continue;
                },
                CharClass::IdentStart => self.lex_identifier(),
                CharClass::Digit => self.lex_number(),
                CharClass::Quote => self.lex_string(),
                CharClass::Slash => match self.cursor.peek_char(1) {
                    '/' => self.lex_line_comment(),
                    '*' => self.lex_block_comment(),
                    _ => self.lex_operator(),
                },
                CharClass::Other => self.lex_operator(),
            };
            return Some(token);
        }
    }

    /// Skips a run of whitespace.
    fn skip_whitespace(&mut self) {
        self.cursor.advance_while(unicode::is_whitespace);
    }

    /// Builds a token that starts where the current token started.
    pub(crate) fn make_token(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(
            kind,
            lexeme,
            self.token_start.line,
            self.token_start.column,
        )
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start.position,
            self.cursor.position(),
            self.token_start.line,
            self.token_start.column,
        )
    }

    /// Reports a warning covering the current token.
    pub(crate) fn report_warning(&mut self, code: DiagnosticCode, message: &str) {
        let span = self.token_span();
        tracing::trace!(%code, line = span.line, column = span.column, "{}", message);
        DiagnosticBuilder::warning(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
