//! Comment lexing.
//!
//! Comments are kept as tokens. The lexeme is the body with the `//`, `/*`
//! and `*/` markers removed.

use cscan_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `//` comment up to, but not including, the next newline.
    pub fn lex_line_comment(&mut self) -> Token {
        self.cursor.advance_n(2);
        let start = self.cursor.position();
        self.cursor.advance_while(|c| c != '\n');
        self.make_token(TokenKind::Comment, self.cursor.slice_from(start))
    }

    /// Lexes a `/* ... */` comment.
    ///
    /// Block comments do not nest: the first `*/` closes the comment. If none
    /// is found the rest of the input becomes the body and a warning is
    /// reported.
    pub fn lex_block_comment(&mut self) -> Token {
        self.cursor.advance_n(2);
        let start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                let body = self.cursor.slice_from(start);
                self.report_warning(
                    DiagnosticCode::W_UNTERMINATED_COMMENT,
                    "unterminated block comment",
                );
                return self.make_token(TokenKind::Comment, body);
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                let body = self.cursor.slice_from(start);
                self.cursor.advance_n(2);
                return self.make_token(TokenKind::Comment, body);
            }
            self.cursor.advance();
        }
    }
}
