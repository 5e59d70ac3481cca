//! En-dashes for ranges
//!
//! Only hyphens written tight between two compatible tokens are touched:
//! two numbers (`1-5`, `p.10-12`, `$5-$10`) or two month names
//! (`Jan-Feb`, `March-April`). Anything spaced was already handled, or
//! deliberately skipped, by the em-dash and minus passes.

use crate::domain::classifier::{is_word, EN_DASH};
use crate::domain::scanner::{rewrite, MarkedText, Splice};

/// Full month names and their three-letter abbreviations
pub const MONTHS: [&str; 23] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep",
    "Oct", "Nov", "Dec",
];

/// Whether `word` is a recognized month token (case-sensitive)
pub fn is_month(word: &str) -> bool {
    MONTHS.contains(&word)
}

/// Rewrite `1-5` style numeric ranges
pub fn apply_numeric(text: &str, separator: char) -> String {
    if !text.contains('-') {
        return text.to_string();
    }
    rewrite(text, separator, match_numeric)
}

/// Rewrite `Jan-Feb` style month ranges
pub fn apply_dates(text: &str, separator: char) -> String {
    if !text.contains('-') {
        return text.to_string();
    }
    rewrite(text, separator, match_months)
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Where the digits of a left-hand range token begin, if a token starts at
/// `pos`
///
/// The token must start on a word boundary that does not follow a period, so
/// the fractional part of `1.5` or `Qwen1.5` never opens a range.
fn numeric_token_digits(view: &MarkedText<'_>, pos: usize) -> Option<usize> {
    if view
        .before(pos)
        .is_some_and(|prev| is_word(prev) || prev == '.')
    {
        return None;
    }

    match view.get(pos)? {
        'p' if view.is(pos + 1, '.') => Some(pos + 2),
        'p' => Some(pos + 1),
        ch if is_digit(ch) => Some(pos),
        _ => None,
    }
}

fn match_numeric(view: &MarkedText<'_>, pos: usize) -> Option<Splice> {
    let digits_start = numeric_token_digits(view, pos)?;
    let digits = view.run_len(digits_start, is_digit);
    if digits == 0 {
        return None;
    }

    let hyphen = view.skip_marker(digits_start + digits);
    if !view.is(hyphen, '-') {
        return None;
    }

    let mut at = view.skip_marker(hyphen + 1);
    if view.is(at, '$') {
        at += 1;
    }
    let right_digits = view.run_len(at, is_digit);
    if right_digits == 0 {
        return None;
    }
    let end = at + right_digits;

    // `1-1.5` is a version pair, `1-5th` is not a range
    if (view.is(end, '.') && view.check(end + 1, is_digit)) || view.check(end, is_word) {
        return None;
    }

    Some(en_dash_splice(view, pos, hyphen, end))
}

fn match_months(view: &MarkedText<'_>, pos: usize) -> Option<Splice> {
    if view.before(pos).is_some_and(is_word) {
        return None;
    }

    let left = view.run_len(pos, is_word);
    if left == 0 || !is_month(&view.slice(pos, pos + left)) {
        return None;
    }

    let hyphen = view.skip_marker(pos + left);
    if !view.is(hyphen, '-') {
        return None;
    }

    let right_start = view.skip_marker(hyphen + 1);
    let right = view.run_len(right_start, is_word);
    if right == 0 || !is_month(&view.slice(right_start, right_start + right)) {
        return None;
    }

    Some(en_dash_splice(view, pos, hyphen, right_start + right))
}

/// Copy `[start, end)` with the hyphen at `hyphen` replaced
fn en_dash_splice(view: &MarkedText<'_>, start: usize, hyphen: usize, end: usize) -> Splice {
    Splice::to(end)
        .push_str(&view.slice(start, hyphen))
        .push(EN_DASH)
        .push_str(&view.slice(hyphen + 1, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: char = '\u{E000}';

    #[test]
    fn test_numeric_ranges() {
        assert_eq!(apply_numeric("Pages 1-5", SEP), "Pages 1\u{2013}5");
        assert_eq!(apply_numeric("1990-2000", SEP), "1990\u{2013}2000");
        assert_eq!(apply_numeric("see p.10-12", SEP), "see p.10\u{2013}12");
        assert_eq!(apply_numeric("see p10-12", SEP), "see p10\u{2013}12");
        assert_eq!(apply_numeric("$5-$10", SEP), "$5\u{2013}$10");
        assert_eq!(apply_numeric("1,000-2,000", SEP), "1,000\u{2013}2,000");
        assert_eq!(apply_numeric("pages 1-5.", SEP), "pages 1\u{2013}5.");
    }

    #[test]
    fn test_versions_and_decimals_untouched() {
        assert_eq!(apply_numeric("Qwen1.5-1.8", SEP), "Qwen1.5-1.8");
        assert_eq!(apply_numeric("1.5-1.8", SEP), "1.5-1.8");
        assert_eq!(apply_numeric("1-1.8", SEP), "1-1.8");
        assert_eq!(apply_numeric("GPT-4", SEP), "GPT-4");
        assert_eq!(apply_numeric("A1-5", SEP), "A1-5");
        assert_eq!(apply_numeric("1-5th", SEP), "1-5th");
    }

    #[test]
    fn test_spaced_hyphen_not_a_range() {
        assert_eq!(apply_numeric("1 - 5", SEP), "1 - 5");
        assert_eq!(apply_numeric("1 -5", SEP), "1 -5");
        assert_eq!(apply_numeric("1- 5", SEP), "1- 5");
    }

    #[test]
    fn test_chained_hyphens_do_not_overlap() {
        assert_eq!(apply_numeric("1-2-3", SEP), "1\u{2013}2-3");
    }

    #[test]
    fn test_numeric_range_across_separator() {
        assert_eq!(
            apply_numeric("1\u{E000}-\u{E000}5", SEP),
            "1\u{E000}\u{2013}\u{E000}5"
        );
        assert_eq!(apply_numeric("10-\u{E000}20", SEP), "10\u{2013}\u{E000}20");
    }

    #[test]
    fn test_month_ranges() {
        assert_eq!(apply_dates("Jan-Feb", SEP), "Jan\u{2013}Feb");
        assert_eq!(apply_dates("March-April 2024", SEP), "March\u{2013}April 2024");
        assert_eq!(apply_dates("May-Jun", SEP), "May\u{2013}Jun");
        assert_eq!(
            apply_dates("Sep\u{E000}-Oct", SEP),
            "Sep\u{E000}\u{2013}Oct"
        );
    }

    #[test]
    fn test_non_month_pairs_untouched() {
        assert_eq!(apply_dates("Mon-Fri", SEP), "Mon-Fri");
        assert_eq!(apply_dates("Sept-Oct", SEP), "Sept-Oct");
        assert_eq!(apply_dates("jan-feb", SEP), "jan-feb");
        assert_eq!(apply_dates("Janus-Feb", SEP), "Janus-Feb");
        assert_eq!(apply_dates("Jan-Febs", SEP), "Jan-Febs");
        assert_eq!(apply_dates("x-Jan-Feb", SEP), "x-Jan\u{2013}Feb");
    }

    #[test]
    fn test_is_month() {
        assert!(is_month("December"));
        assert!(is_month("Dec"));
        assert!(!is_month("Tue"));
        assert!(!is_month("december"));
    }
}
