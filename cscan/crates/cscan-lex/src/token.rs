//! Token definitions.
//!
//! A [`Token`] is a plain value: its category, the text it was built from,
//! and where it started. Tokens own their lexeme and never borrow the source.

use std::fmt;

/// The category of a token.
///
/// `Separator`, `Whitespace` and `Unknown` are part of the taxonomy but the
/// scanner never produces them: separators such as `;` and `(` come out as
/// [`TokenKind::Operator`], whitespace is skipped, and every leftover
/// character is absorbed by the operator scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TokenKind {
    /// Reserved word, see [`Keyword`]
    Keyword,
    /// Name that is not a keyword
    Identifier,
    /// Digits with at most one decimal point
    Number,
    /// Operator or punctuation character(s)
    Operator,
    /// Reserved
    Separator,
    /// Contents of a double-quoted string
    StringLiteral,
    /// Body of a `//` or `/* */` comment
    Comment,
    /// Reserved
    Whitespace,
    /// Reserved
    Unknown,
}

impl TokenKind {
    /// Upper-snake name of the kind, e.g. `STRING_LITERAL`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words of the language.
///
/// Matching is exact and case-sensitive: `int` is a keyword, `Int` is not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `char`
    Char,
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `for`
    For,
    /// `return`
    Return,
    /// `void`
    Void,
    /// `static`
    Static,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 11] = [
        Keyword::Int,
        Keyword::Float,
        Keyword::Double,
        Keyword::Char,
        Keyword::If,
        Keyword::Else,
        Keyword::While,
        Keyword::For,
        Keyword::Return,
        Keyword::Void,
        Keyword::Static,
    ];

    /// Looks up the keyword spelled `ident`.
    ///
    /// # Example
    ///
    /// ```
    /// use cscan_lex::Keyword;
    ///
    /// assert_eq!(Keyword::from_ident("while"), Some(Keyword::While));
    /// assert_eq!(Keyword::from_ident("While"), None);
    /// assert_eq!(Keyword::from_ident("main"), None);
    /// ```
    pub fn from_ident(ident: &str) -> Option<Keyword> {
        let keyword = match ident {
            "int" => Keyword::Int,
            "float" => Keyword::Float,
            "double" => Keyword::Double,
            "char" => Keyword::Char,
            "if" => Keyword::If,
            "else" => Keyword::Else,
            "while" => Keyword::While,
            "for" => Keyword::For,
            "return" => Keyword::Return,
            "void" => Keyword::Void,
            "static" => Keyword::Static,
            _ => return None,
        };
        Some(keyword)
    }

    /// The source spelling of the keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Int => "int",
            Keyword::Float => "float",
            Keyword::Double => "double",
            Keyword::Char => "char",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::For => "for",
            Keyword::Return => "return",
            Keyword::Void => "void",
            Keyword::Static => "static",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, positioned piece of source text.
///
/// For strings and comments the lexeme is the body only: quotes and comment
/// markers are stripped. For every other kind it is the exact source text.
///
/// # Example
///
/// ```
/// use cscan_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Keyword, "int", 1, 1);
/// assert_eq!(token.to_string(), "KEYWORD 'int' at 1:1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// Source text (delimiters stripped for strings and comments)
    pub lexeme: String,
    /// Line the token starts on (1-based)
    pub line: u32,
    /// Column of the token's first character (1-based)
    pub column: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Returns true if the token has the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The keyword this token spells, if it is a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::from_ident(&self.lexeme),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `escape_debug` keeps multi-line comments and strings on one line.
        write!(
            f,
            "{} '{}' at {}:{}",
            self.kind,
            self.lexeme.escape_debug(),
            self.line,
            self.column
        )
    }
}

static_assertions::assert_impl_all!(Token: Send, Sync, Clone);
