//! cscan-lex - Lexical scanner for a small C-like language
//!
//! This crate turns source text into a flat list of [`Token`]s. Each token
//! carries its category, the text it came from and the line and column where
//! it starts.
//!
//! # Example Usage
//!
//! ```
//! use cscan_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("int x=10;");
//! let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
//! assert_eq!(rendered, [
//!     "KEYWORD 'int' at 1:1",
//!     "IDENTIFIER 'x' at 1:5",
//!     "OPERATOR '=' at 1:6",
//!     "NUMBER '10' at 1:7",
//!     "OPERATOR ';' at 1:9",
//! ]);
//! assert!(tokens.iter().all(|t| t.kind != TokenKind::Separator));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and keyword definitions
//! - [`lexer`] - The lexer and its sub-scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`output`] - Whole-input entry points and strict mode
//! - [`unicode`] - Whitespace, letter and digit classes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `int`, `float`, `double`, `char`, `if`, `else`, `while`, `for`, `return`,
//! `void`, `static`. Matching is case-sensitive.
//!
//! ## Identifiers
//!
//! A letter or `_` followed by letters, digits and `_`. Letters are the
//! Unicode `L*` categories and digits are `Nd`, so `x٣` is one identifier
//! while `Ⅷ` is not a letter.
//!
//! ## Numbers
//!
//! Decimal digits with at most one `.`: `10`, `20.5`, `5.`, `١٢`. A leading
//! `.` is an operator, so `.5` is `.` then `5`.
//!
//! ## Whitespace
//!
//! Unicode spaces and the ASCII controls `\t`..`\r` and `\u{1c}`..`\u{1f}`
//! separate tokens. The non-breaking spaces are ordinary characters and come
//! out as operators.
//!
//! ## Strings and Comments
//!
//! `"..."`, `// ...` and `/* ... */`. The lexeme is the body without the
//! delimiters. Escapes are not interpreted and block comments do not nest.
//!
//! ## Operators
//!
//! `==`, `!=`, `<=` and `>=` are single tokens. Every other character that
//! starts no other token, punctuation included, is a one-character operator.
//!
//! # Diagnostics
//!
//! Scanning never fails. An unterminated string or block comment, and a
//! number with a second decimal point, produce tokens plus a warning, see
//! [`tokenize_with_diagnostics`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod output;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use output::{tokenize, tokenize_strict, tokenize_with_diagnostics, LexError, LexOutput};
pub use token::{Keyword, Token, TokenKind};
