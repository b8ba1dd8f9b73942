//! Edge case tests for cscan-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_with_diagnostics, Token, TokenKind};
    use cscan_util::DiagnosticCode;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        tokenize(source).into_iter().map(|t| t.lexeme).collect()
    }

    // ==================== SAMPLE PROGRAM ====================

    const SAMPLE: &str = "int main() {\n    // Comment\n    int x = 10;\n    float y = 20.5;\n    printf(\"Hello, World!\");\n    return 0;\n}\n";

    #[test]
    fn test_sample_program() {
        use TokenKind::*;
        let expected = [
            (Keyword, "int", 1, 1),
            (Identifier, "main", 1, 5),
            (Operator, "(", 1, 9),
            (Operator, ")", 1, 10),
            (Operator, "{", 1, 12),
            (Comment, " Comment", 2, 5),
            (Keyword, "int", 3, 5),
            (Identifier, "x", 3, 9),
            (Operator, "=", 3, 11),
            (Number, "10", 3, 13),
            (Operator, ";", 3, 15),
            (Keyword, "float", 4, 5),
            (Identifier, "y", 4, 11),
            (Operator, "=", 4, 13),
            (Number, "20.5", 4, 15),
            (Operator, ";", 4, 19),
            (Identifier, "printf", 5, 5),
            (Operator, "(", 5, 11),
            (StringLiteral, "Hello, World!", 5, 12),
            (Operator, ")", 5, 27),
            (Operator, ";", 5, 28),
            (Keyword, "return", 6, 5),
            (Number, "0", 6, 12),
            (Operator, ";", 6, 13),
            (Operator, "}", 7, 1),
        ];
        let expected: Vec<Token> = expected
            .into_iter()
            .map(|(kind, lexeme, line, column)| Token::new(kind, lexeme, line, column))
            .collect();

        let output = tokenize_with_diagnostics(SAMPLE);
        assert_eq!(output.tokens, expected);
        assert!(!output.has_warnings());
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(tokenize("   \n\t \r\n  ").is_empty());
    }

    #[test]
    fn test_edge_comment_then_keyword() {
        let tokens = tokenize("// hi\nint");
        assert_eq!(tokens[0], Token::new(TokenKind::Comment, " hi", 1, 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Keyword, "int", 2, 1));
    }

    #[test]
    fn test_edge_block_comment_then_identifier() {
        let tokens = tokenize("/* a */x");
        assert_eq!(tokens[0], Token::new(TokenKind::Comment, " a ", 1, 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x", 1, 8));
    }

    #[test]
    fn test_edge_multiline_comment_reports_start_position() {
        let tokens = tokenize("x\n  /* one\ntwo */ y");
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
        assert_eq!(tokens[2], Token::new(TokenKind::Identifier, "y", 3, 8));
    }

    #[test]
    fn test_edge_unterminated_string() {
        let output = tokenize_with_diagnostics("\"abc");
        assert_eq!(output.tokens, [Token::new(TokenKind::StringLiteral, "abc", 1, 1)]);
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].code, Some(DiagnosticCode::W_UNTERMINATED_STRING));
    }

    #[test]
    fn test_edge_unterminated_block_comment() {
        let output = tokenize_with_diagnostics("x /* rest\nof file");
        assert_eq!(output.tokens.len(), 2);
        assert_eq!(output.tokens[1].lexeme, " rest\nof file");
        assert_eq!(output.diagnostics[0].code, Some(DiagnosticCode::W_UNTERMINATED_COMMENT));
    }

    #[test]
    fn test_edge_split_number() {
        assert_eq!(lexemes("1.2.3"), ["1.2", ".", "3"]);
        assert_eq!(kinds("1.2.3"), [TokenKind::Number, TokenKind::Operator, TokenKind::Number]);
    }

    #[test]
    fn test_edge_leading_dot() {
        assert_eq!(lexemes(".5"), [".", "5"]);
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(kinds("123abc"), [TokenKind::Number, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_keywords_not_prefixes() {
        assert_eq!(kinds("int integer Int"), [
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Identifier,
        ]);
    }

    #[test]
    fn test_edge_adjacent_compound_operators() {
        assert_eq!(lexemes("a<=b==c!=d>=e"), ["a", "<=", "b", "==", "c", "!=", "d", ">=", "e"]);
        assert_eq!(lexemes("a=>b"), ["a", "=", ">", "b"]);
    }

    #[test]
    fn test_edge_division_is_not_comment() {
        assert_eq!(kinds("a/b"), [TokenKind::Identifier, TokenKind::Operator, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_string_hides_comment_markers() {
        let tokens = tokenize("\"// not a comment\" x");
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, "// not a comment");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_edge_comment_hides_string_quote() {
        let output = tokenize_with_diagnostics("// \"x\ny");
        assert_eq!(output.tokens.len(), 2);
        assert!(!output.has_warnings());
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let tokens = tokenize("int a;\r\nint b;\r\n");
        assert_eq!((tokens[3].line, tokens[3].column), (2, 1));
    }

    #[test]
    fn test_edge_unicode_columns_count_characters() {
        let tokens = tokenize("\"é\" x");
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x", 1, 5));
    }

    #[test]
    fn test_edge_unexpected_characters() {
        assert_eq!(lexemes("#include @x"), ["#", "include", "@", "x"]);
    }

    #[test]
    fn test_edge_reserved_kinds_never_produced() {
        let tokens = tokenize("a ; , ( ) # @ ` \\ $ \u{0} ~");
        assert!(tokens.iter().all(|t| !matches!(
            t.kind,
            TokenKind::Separator | TokenKind::Whitespace | TokenKind::Unknown
        )));
    }
}
