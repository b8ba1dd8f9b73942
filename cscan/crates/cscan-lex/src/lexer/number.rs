//! Number literal lexing.
//!
//! Numbers are runs of decimal digits with at most one decimal point. There are
//! no exponents, signs, radix prefixes or digit separators, and the text is
//! not converted to a value.

use cscan_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::unicode::is_digit;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// A second `.` ends the run without being consumed, so `1.2.3` becomes
    /// `1.2`, `.` and `3`. That case is reported as a warning.
    pub fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        let mut seen_dot = false;

        loop {
            match self.cursor.current_char() {
                c if is_digit(c) => {},
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        let token = self.make_token(TokenKind::Number, text);

        if seen_dot && self.cursor.current_char() == '.' {
            self.report_warning(
                DiagnosticCode::W_SPLIT_NUMBER,
                "numeric literal contains more than one decimal point",
            );
        }

        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cscan_util::Handler;

    fn lex_num(source: &str) -> (Token, usize) {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        let token = lexer.lex_number();
        drop(lexer);
        (token, handler.warning_count())
    }

    #[test]
    fn test_integer() {
        assert_eq!(lex_num("10"), (Token::new(TokenKind::Number, "10", 1, 1), 0));
        assert_eq!(lex_num("0").0.lexeme, "0");
        assert_eq!(lex_num("007").0.lexeme, "007");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(lex_num("20.5").0.lexeme, "20.5");
    }

    #[test]
    fn test_trailing_dot_is_part_of_number() {
        assert_eq!(lex_num("5.").0.lexeme, "5.");
        assert_eq!(lex_num("5.x").0.lexeme, "5.");
    }

    #[test]
    fn test_second_dot_stops_run() {
        let (token, warnings) = lex_num("1.2.3");
        assert_eq!(token.lexeme, "1.2");
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_no_exponent_or_radix() {
        assert_eq!(lex_num("1e10").0.lexeme, "1");
        assert_eq!(lex_num("0xFF").0.lexeme, "0");
        assert_eq!(lex_num("1_000").0.lexeme, "1");
    }

    #[test]
    fn test_unicode_digits() {
        assert_eq!(lex_num("1٣").0.lexeme, "1٣");
        assert_eq!(lex_num("٣.٥").0.lexeme, "٣.٥");
        assert_eq!(lex_num("1²").0.lexeme, "1");
    }

    #[test]
    fn test_stops_at_terminator() {
        assert_eq!(lex_num("42;").0.lexeme, "42");
        assert_eq!(lex_num("42 ").0.lexeme, "42");
    }
}
