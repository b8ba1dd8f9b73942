//! Character classes used by the scanner.
//!
//! The classes follow the Unicode general categories rather than Rust's
//! `char::is_alphabetic` and friends: letters are `L*` only (no letter
//! numbers such as `Ⅷ`), digits are `Nd`, and whitespace leaves out the
//! non-breaking spaces.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Checks if a character is skipped between tokens.
///
/// This is the Unicode space separators, line and paragraph separators and
/// the ASCII controls `\t`..`\r` and `\u{1c}`..`\u{1f}`. The non-breaking
/// spaces U+00A0, U+2007 and U+202F and NEL (U+0085) are not whitespace.
///
/// # Example
///
/// ```
/// use cscan_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{1f}'));
/// assert!(is_whitespace('\u{3000}'));
/// assert!(!is_whitespace('\u{a0}'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        _ => c.is_whitespace(),
    }
}

/// Checks if a character is a letter (general category `L*`).
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Checks if a character is a decimal digit (general category `Nd`).
///
/// # Example
///
/// ```
/// use cscan_lex::unicode::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(is_digit('٣'));  // Arabic-Indic three
/// assert!(!is_digit('Ⅷ'));
/// assert!(!is_digit('½'));
/// ```
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Checks if a character is valid as the start of an identifier.
///
/// # Arguments
///
/// * `c` - The character to check
///
/// # Example
///
/// ```
/// use cscan_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));  // Greek alpha
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('Ⅷ'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// # Arguments
///
/// * `c` - The character to check
///
/// # Example
///
/// ```
/// use cscan_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('٣'));
/// assert!(!is_ident_continue('+'));
/// assert!(!is_ident_continue(' '));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || is_letter(c) || is_digit(c)
}
