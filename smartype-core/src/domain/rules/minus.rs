//! Minus signs for negated numerals
//!
//! A hyphen becomes U+2212 when it opens a numeral: it follows the start of
//! a line, whitespace, `(`, an opening quote or the separator, and is followed
//! by an optional space and then a decimal number (`5`, `12`, `.5`, `1.5`).

use crate::domain::classifier::{is_whitespace, LEFT_DOUBLE, LEFT_SINGLE, MINUS};
use crate::domain::scanner::{rewrite, MarkedText, Splice};

/// Replace negation hyphens with minus signs
pub fn apply(text: &str, separator: char) -> String {
    if !text.contains('-') {
        return text.to_string();
    }
    rewrite(text, separator, match_minus)
}

fn match_minus(view: &MarkedText<'_>, pos: usize) -> Option<Splice> {
    if !view.is(pos, '-') || !opens_numeral(view, pos) {
        return None;
    }

    let mut at = view.skip_marker(pos + 1);
    if view.is_space(at) {
        at = view.skip_marker(at + 1);
    }
    starts_number(view, at).then(|| Splice::to(pos + 1).push(MINUS))
}

fn opens_numeral(view: &MarkedText<'_>, pos: usize) -> bool {
    if view.at_line_start(pos) {
        return true;
    }
    let separator = view.separator();
    view.before(pos).is_some_and(|ch| {
        is_whitespace(ch)
            || ch == separator
            || matches!(ch, '(' | '"' | '\'' | LEFT_DOUBLE | LEFT_SINGLE)
    })
}

/// `\d*\.?\d+` anchored at `pos`
fn starts_number(view: &MarkedText<'_>, pos: usize) -> bool {
    view.check(pos, |c| c.is_ascii_digit())
        || (view.is(pos, '.') && view.check(pos + 1, |c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: char = '\u{E000}';

    fn minus(text: &str) -> String {
        apply(text, SEP)
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(minus("-5"), "\u{2212}5");
        assert_eq!(minus("It was -3 degrees"), "It was \u{2212}3 degrees");
        assert_eq!(minus("(-1.5)"), "(\u{2212}1.5)");
        assert_eq!(minus("x = -.25"), "x = \u{2212}.25");
        assert_eq!(minus("\"-2\""), "\"\u{2212}2\"");
        assert_eq!(minus("first\n-7 on a new line"), "first\n\u{2212}7 on a new line");
    }

    #[test]
    fn test_optional_space_before_digits() {
        assert_eq!(minus("5 - 3"), "5 \u{2212} 3");
        assert_eq!(minus("- 4"), "\u{2212} 4");
    }

    #[test]
    fn test_hyphenated_words_untouched() {
        assert_eq!(minus("COVID-19"), "COVID-19");
        assert_eq!(minus("well-known"), "well-known");
        assert_eq!(minus("1-5"), "1-5");
        assert_eq!(minus("- First"), "- First");
        assert_eq!(minus("-."), "-.");
        assert_eq!(minus("--5"), "--5");
    }

    #[test]
    fn test_separator_counts_as_boundary() {
        assert_eq!(minus("a\u{E000}-5"), "a\u{E000}\u{2212}5");
        assert_eq!(minus("\u{E000}-5"), "\u{E000}\u{2212}5");
        assert_eq!(minus("5 - \u{E000}3"), "5 \u{2212} \u{E000}3");
        assert_eq!(minus("-\u{E000}5"), "\u{2212}\u{E000}5");
    }

    #[test]
    fn test_no_hyphen_fast_path() {
        assert_eq!(minus(""), "");
        assert_eq!(minus("nothing here"), "nothing here");
    }
}
