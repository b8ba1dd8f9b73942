//! Operator and punctuation lexing.
//!
//! Any character that starts no other token lands here, so this scanner also
//! covers separators such as `;` and `(` and characters the language has no
//! use for, like `#` or `@`.

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Returns true if `c` followed by `=` forms a two-character operator.
fn is_compound_operator_head(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>')
}

impl<'a> Lexer<'a> {
    /// Lexes a single character, or a two-character comparison operator.
    ///
    /// Only `==`, `!=`, `<=` and `>=` are combined. Everything else, `++`,
    /// `&&` and `->` included, comes out one character at a time.
    pub fn lex_operator(&mut self) -> Token {
        let start = self.cursor.position();
        if let Some(c) = self.cursor.advance() {
            if is_compound_operator_head(c) {
                self.cursor.match_char('=');
            }
        }
        self.make_token(TokenKind::Operator, self.cursor.slice_from(start))
    }
}
