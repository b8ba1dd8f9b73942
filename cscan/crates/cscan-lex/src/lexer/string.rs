//! String literal lexing.

use cscan_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string literal.
    ///
    /// The lexeme is the text between the quotes. Escape sequences are not
    /// interpreted, so a backslash is kept as-is and `\"` still closes the
    /// string. Newlines may appear inside the literal.
    ///
    /// A string that runs to end of input yields everything after the opening
    /// quote and reports a warning.
    pub fn lex_string(&mut self) -> Token {
        self.cursor.advance();
        let start = self.cursor.position();
        self.cursor.advance_while(|c| c != '"');

        let body = self.cursor.slice_from(start);
        if !self.cursor.match_char('"') {
            self.report_warning(DiagnosticCode::W_UNTERMINATED_STRING, "unterminated string literal");
        }

        self.make_token(TokenKind::StringLiteral, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cscan_util::Handler;

    fn lex_str(source: &str) -> (Token, usize, usize) {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        let token = lexer.lex_string();
        let position = lexer.position();
        drop(lexer);
        (token, position, handler.warning_count())
    }

    #[test]
    fn test_simple_string() {
        let (token, position, warnings) = lex_str("\"Hello, World!\"");
        assert_eq!(token, Token::new(TokenKind::StringLiteral, "Hello, World!", 1, 1));
        assert_eq!(position, 15);
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_empty_string() {
        let (token, position, _) = lex_str("\"\"");
        assert_eq!(token.lexeme, "");
        assert_eq!(position, 2);
    }

    #[test]
    fn test_escapes_are_not_processed() {
        let (token, _, _) = lex_str(r#""a\nb""#);
        assert_eq!(token.lexeme, r"a\nb");
    }

    #[test]
    fn test_escaped_quote_closes_string() {
        let (token, position, _) = lex_str(r#""a\"b""#);
        assert_eq!(token.lexeme, r"a\");
        assert_eq!(position, 4);
    }

    #[test]
    fn test_multiline_string() {
        let (token, _, warnings) = lex_str("\"one\ntwo\"");
        assert_eq!(token.lexeme, "one\ntwo");
        assert_eq!((token.line, token.column), (1, 1));
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_unterminated_string() {
        let (token, position, warnings) = lex_str("\"abc");
        assert_eq!(token.lexeme, "abc");
        assert_eq!(position, 4);
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_lone_quote() {
        let (token, _, warnings) = lex_str("\"");
        assert_eq!(token.lexeme, "");
        assert_eq!(warnings, 1);
    }
}
