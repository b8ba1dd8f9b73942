//! Identifier and keyword lexing.

use crate::token::{Keyword, Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of letters, digits and underscores. The run
    /// is a keyword only if it spells one exactly.
    pub fn lex_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance_while(is_ident_continue);

        let text = self.cursor.slice_from(start);
        let kind = match Keyword::from_ident(text) {
            Some(_) => TokenKind::Keyword,
            None => TokenKind::Identifier,
        };
        self.make_token(kind, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cscan_util::Handler;

    fn lex_ident(source: &str) -> Token {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        lexer.lex_identifier()
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("foo"), Token::new(TokenKind::Identifier, "foo", 1, 1));
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(lex_ident("_foo_bar_123").lexeme, "_foo_bar_123");
    }

    #[test]
    fn test_identifier_stops_at_punctuation() {
        assert_eq!(lex_ident("main()").lexeme, "main");
    }

    #[test]
    fn test_all_keywords() {
        for keyword in Keyword::ALL {
            let token = lex_ident(keyword.as_str());
            assert_eq!(token.kind, TokenKind::Keyword, "{keyword}");
            assert_eq!(token.lexeme, keyword.as_str());
        }
    }

    #[test]
    fn test_keyword_case_sensitive() {
        assert_eq!(lex_ident("Int").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("RETURN").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("integer").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("if_").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("for2").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_unicode_letters() {
        let token = lex_ident("größe = 1");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, "größe");
    }

    #[test]
    fn test_unicode_digits_continue_identifier() {
        assert_eq!(lex_ident("x٣y").lexeme, "x٣y");
        assert_eq!(lex_ident("xⅧ").lexeme, "x");
        assert_eq!(lex_ident("a\u{a0}b").lexeme, "a");
    }

    #[test]
    fn test_long_identifier() {
        let name = "a".repeat(10_000);
        assert_eq!(lex_ident(&name).lexeme.len(), 10_000);
    }
}
