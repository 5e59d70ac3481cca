//! Character classification shared by the rewrite rules
//!
//! The rules only ever look at a handful of character classes around the
//! character being rewritten. Word characters follow the ASCII `[A-Za-z0-9_]`
//! convention so that curly quotes, dashes and the separator all count as
//! word boundaries.

/// Em-dash (U+2014)
pub const EM_DASH: char = '\u{2014}';
/// En-dash (U+2013)
pub const EN_DASH: char = '\u{2013}';
/// Minus sign (U+2212)
pub const MINUS: char = '\u{2212}';
/// Horizontal ellipsis (U+2026)
pub const ELLIPSIS: char = '\u{2026}';
/// Left single quotation mark (U+2018)
pub const LEFT_SINGLE: char = '\u{2018}';
/// Right single quotation mark / apostrophe (U+2019)
pub const RIGHT_SINGLE: char = '\u{2019}';
/// Left double quotation mark (U+201C)
pub const LEFT_DOUBLE: char = '\u{201C}';
/// Right double quotation mark (U+201D)
pub const RIGHT_DOUBLE: char = '\u{201D}';

/// Coarse classification of a character as seen by the rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterClass {
    /// Any whitespace, including line breaks
    Whitespace,
    /// ASCII letter
    Letter,
    /// ASCII digit
    Digit,
    /// Hyphen, en-dash, em-dash or tilde
    Dash,
    /// Straight or curly single/double quote
    Quote,
    /// Anything else
    Other,
}

/// Classify a character
pub fn classify(ch: char) -> CharacterClass {
    if is_whitespace(ch) {
        CharacterClass::Whitespace
    } else if ch.is_ascii_alphabetic() {
        CharacterClass::Letter
    } else if ch.is_ascii_digit() {
        CharacterClass::Digit
    } else if is_dash(ch) {
        CharacterClass::Dash
    } else if is_quote(ch) {
        CharacterClass::Quote
    } else {
        CharacterClass::Other
    }
}

/// Whitespace in the broad sense, including the byte-order mark
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

/// Characters that terminate a line
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// `[A-Za-z0-9_]`
pub fn is_word(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Characters that collapse into an em-dash
pub fn is_dash(ch: char) -> bool {
    matches!(ch, '-' | '~' | EN_DASH | EM_DASH)
}

/// Any straight or curly quotation mark
pub fn is_quote(ch: char) -> bool {
    matches!(
        ch,
        '\'' | '"' | LEFT_SINGLE | RIGHT_SINGLE | LEFT_DOUBLE | RIGHT_DOUBLE
    )
}

/// Straight or right quote that can close a quotation
pub fn is_closing_quote(ch: char) -> bool {
    matches!(ch, '\'' | '"' | RIGHT_SINGLE | RIGHT_DOUBLE)
}

/// Characters that the rules interpret and which therefore cannot double as
/// the separator
pub fn is_reserved(ch: char) -> bool {
    !matches!(classify(ch), CharacterClass::Other)
        || matches!(
            ch,
            '_' | '.'
                | ','
                | ';'
                | ':'
                | '!'
                | '?'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '/'
                | '>'
                | '$'
                | MINUS
                | ELLIPSIS
        )
}
