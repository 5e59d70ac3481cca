//! Em-dash normalization
//!
//! Runs five stages in order. The first three turn hyphen runs into
//! em-dashes, the fourth strips every space around an em-dash, and the fifth
//! puts a single space back where English typography wants one: after a
//! closing quote or an ellipsis, and after a dash that opens a line before a
//! capital or a digit.

use crate::domain::classifier::{is_closing_quote, is_dash, is_whitespace, ELLIPSIS, EM_DASH};
use crate::domain::scanner::{rewrite, MarkedText, Splice};

/// Apply all five em-dash stages
pub fn apply(text: &str, separator: char) -> String {
    if !text.contains(|c: char| is_dash(c)) {
        return text.to_string();
    }

    let text = collapse_surrounded(text, separator);
    let text = collapse_in_word(&text, separator);
    let text = dash_line_starts(&text, separator);
    let text = tighten(&text, separator);
    respace(&text, separator)
}

/// Stage 1: `word - word` and `word -- word` become `word—word`
pub fn collapse_surrounded(text: &str, separator: char) -> String {
    rewrite(text, separator, match_surrounded)
}

/// Stage 2: `word--word` becomes `word—word`
pub fn collapse_in_word(text: &str, separator: char) -> String {
    rewrite(text, separator, match_in_word)
}

/// Stage 3: `- text` at the start of a line becomes `— text`
pub fn dash_line_starts(text: &str, separator: char) -> String {
    rewrite(text, separator, match_line_start)
}

/// Stage 4: remove spaces on both sides of every em-dash
pub fn tighten(text: &str, separator: char) -> String {
    if !text.contains(EM_DASH) {
        return text.to_string();
    }
    rewrite(text, separator, |view, pos| {
        spaced_em_dash(view, pos).map(|dash| dash.emit(Splice::to(dash.end)))
    })
}

/// Stage 5: re-insert single spaces after closing quotes, ellipses and
/// line-initial dashes
pub fn respace(text: &str, separator: char) -> String {
    if !text.contains(EM_DASH) {
        return text.to_string();
    }
    let text = rewrite(text, separator, match_after_quotation);
    rewrite(&text, separator, match_line_initial_dash)
}

fn match_surrounded(view: &MarkedText<'_>, pos: usize) -> Option<Splice> {
    // Blockquote markers and indentation keep their dashes
    if view.before(pos).is_some_and(|ch| is_whitespace(ch) || ch == '>') {
        return None;
    }

    // `marker space*` or `space+ marker? space*`
    let (dash_start, marker_before) = if view.is_marker(pos) {
        (pos + 1 + view.run_len(pos + 1, |c| c == ' '), true)
    } else if view.is(pos, ' ') {
        let at = pos + view.run_len(pos, |c| c == ' ');
        if view.is_marker(at) {
            (at + 1 + view.run_len(at + 1, |c| c == ' '), true)
        } else {
            (at, false)
        }
    } else {
        return None;
    };

    let dashes = view.run_len(dash_start, is_dash);
    if dashes == 0 || is_horizontal_rule(view, pos, dash_start, dashes) {
        return None;
    }

    let after_dashes = dash_start + dashes;
    let spaces = view.run_len(after_dashes, |c| c == ' ');
    let at = after_dashes + spaces;

    let (end, marker_after) = if view.is_marker(at) {
        let trailing = view.run_len(at + 1, |c| c == ' ');
        if trailing > 0 {
            (at + 1 + trailing, true)
        } else if view.at_line_end(at + 1) {
            (at + 1, true)
        } else if spaces > 0 {
            (at, false)
        } else {
            return None;
        }
    } else if spaces > 0 || view.at_line_end(at) {
        (at, false)
    } else {
        return None;
    };

    let separator = view.separator();
    Some(
        Splice::to(end)
            .push_if(marker_before, separator)
            .push(EM_DASH)
            .push_if(marker_after, separator),
    )
}

/// `---` alone on the first line is a rule, not a dash
fn is_horizontal_rule(view: &MarkedText<'_>, pos: usize, dash_start: usize, dashes: usize) -> bool {
    let after = dash_start + dashes;
    pos == 0
        && dashes == 3
        && view.run_len(dash_start, |c| c == '-') == 3
        && view.at_line_end(after + view.run_len(after, |c| c == ' '))
}

fn match_in_word(view: &MarkedText<'_>, pos: usize) -> Option<Splice> {
    if !view.before(pos).is_some_and(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let separator = view.separator();
    let marker_before = view.is_marker(pos);
    let start = if marker_before { pos + 1 } else { pos };
    let run = view.run_len(start, is_dash);

    for count in (2..=run.min(3)).rev() {
        let after = start + count;
        let splice = Splice::to(after)
            .push_if(marker_before, separator)
            .push(EM_DASH);
        if view.is_marker(after) && view.check(after + 1, |c| c.is_ascii_alphanumeric()) {
            return Some(Splice { end: after + 1, ..splice.push(separator) });
        }
        if view.check(after, |c| c.is_ascii_alphanumeric()) {
            return Some(splice);
        }
    }
    None
}

fn match_line_start(view: &MarkedText<'_>, pos: usize) -> Option<Splice> {
    if !view.at_line_start(pos) {
        return None;
    }

    let marker = view.is_marker(pos);
    let start = if marker { pos + 1 } else { pos };
    let hyphens = view.run_len(start, |c| c == '-');
    if hyphens == 0 || !view.is(start + hyphens, ' ') {
        return None;
    }

    Some(
        Splice::to(start + hyphens + 1)
            .push_if(marker, view.separator())
            .push(EM_DASH)
            .push(' '),
    )
}

/// An em-dash with optional spaces and markers around it
#[derive(Debug, Clone, Copy)]
struct SpacedDash {
    end: usize,
    marker_before: bool,
    marker_after: bool,
    separator: char,
}

impl SpacedDash {
    /// Emit the dash with its markers and no spaces
    fn emit(self, splice: Splice) -> Splice {
        splice
            .push_if(self.marker_before, self.separator)
            .push(EM_DASH)
            .push_if(self.marker_after, self.separator)
    }
}

/// `space* marker? space* — space* marker? space*` anchored at `pos`
fn spaced_em_dash(view: &MarkedText<'_>, pos: usize) -> Option<SpacedDash> {
    let mut at = pos + view.run_len(pos, |c| c == ' ');
    let marker_before = view.is_marker(at);
    if marker_before {
        at += 1;
    }
    at += view.run_len(at, |c| c == ' ');
    if !view.is(at, EM_DASH) {
        return None;
    }
    at += 1;
    at += view.run_len(at, |c| c == ' ');
    let marker_after = view.is_marker(at);
    if marker_after {
        at += 1;
    }
    at += view.run_len(at, |c| c == ' ');

    Some(SpacedDash {
        end: at,
        marker_before,
        marker_after,
        separator: view.separator(),
    })
}

fn match_after_quotation(view: &MarkedText<'_>, pos: usize) -> Option<Splice> {
    closing_quote_end(view, pos)
        .and_then(|lead_end| spaced_after(view, pos, lead_end))
        .or_else(|| ellipsis_end(view, pos).and_then(|lead_end| spaced_after(view, pos, lead_end)))
}

/// `closing-quote marker?` where the quote follows a non-space
fn closing_quote_end(view: &MarkedText<'_>, pos: usize) -> Option<usize> {
    if !view.check(pos, is_closing_quote) {
        return None;
    }
    let closes = view
        .before_marker(pos)
        .and_then(|prev| view.get(prev))
        .is_some_and(|c| !is_whitespace(c));
    closes.then(|| view.skip_marker(pos + 1))
}

fn ellipsis_end(view: &MarkedText<'_>, pos: usize) -> Option<usize> {
    if view.is(pos, ELLIPSIS) {
        Some(pos + 1)
    } else if view.starts_with(pos, "...") {
        Some(pos + 3)
    } else {
        None
    }
}

fn spaced_after(view: &MarkedText<'_>, pos: usize, lead_end: usize) -> Option<Splice> {
    let dash = spaced_em_dash(view, lead_end)?;
    let splice = Splice::to(dash.end)
        .push_str(&view.slice(pos, lead_end))
        .push(' ');
    Some(dash.emit(splice).push(' '))
}

fn match_line_initial_dash(view: &MarkedText<'_>, pos: usize) -> Option<Splice> {
    if !view.at_line_start(pos) {
        return None;
    }
    let dash = spaced_em_dash(view, pos)?;
    view.check(dash.end, |c| c.is_uppercase() || c.is_ascii_digit())
        .then(|| dash.emit(Splice::to(dash.end)).push(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: char = '\u{E000}';

    fn dashes(text: &str) -> String {
        apply(text, SEP)
    }

    #[test]
    fn test_surrounded_dash_collapses() {
        assert_eq!(dashes("word - word"), "word\u{2014}word");
        assert_eq!(dashes("word -- word"), "word\u{2014}word");
        assert_eq!(dashes("word --- word"), "word\u{2014}word");
        assert_eq!(dashes("word \u{2013} word"), "word\u{2014}word");
        assert_eq!(dashes("word ~ word"), "word\u{2014}word");
        assert_eq!(dashes("trailing -"), "trailing\u{2014}");
    }

    #[test]
    fn test_dash_before_line_break_collapses() {
        assert_eq!(dashes("word -\nnext"), "word\u{2014}\nnext");
        assert_eq!(dashes("word --\r\nnext"), "word\u{2014}\r\nnext");
        assert_eq!(dashes("word -\u{E000}\nnext"), "word\u{2014}\u{E000}\nnext");
    }

    #[test]
    fn test_compound_modifiers_untouched() {
        assert_eq!(
            dashes("a browser- or OS-specific fashion"),
            "a browser- or OS-specific fashion"
        );
        assert_eq!(dashes("well-known"), "well-known");
        assert_eq!(dashes("word -word"), "word -word");
    }

    #[test]
    fn test_horizontal_rule_untouched() {
        assert_eq!(dashes("---"), "---");
        assert_eq!(dashes("Above\n\n---\n\nBelow"), "Above\n\n---\n\nBelow");
        assert_eq!(dashes(" ---"), " ---");
    }

    #[test]
    fn test_blockquote_and_indent_keep_dash() {
        assert_eq!(dashes("> - quoted"), "> - quoted");
        assert_eq!(dashes("line\n - item"), "line\n - item");
    }

    #[test]
    fn test_in_word_runs() {
        assert_eq!(dashes("Since--as you know"), "Since\u{2014}as you know");
        assert_eq!(dashes("wait---what"), "wait\u{2014}what");
        assert_eq!(dashes("a----b"), "a----b");
        assert_eq!(dashes("1--2"), "1\u{2014}2");
    }

    #[test]
    fn test_line_initial_dash() {
        assert_eq!(dashes("- First level"), "\u{2014} First level");
        assert_eq!(
            dashes("- First level\n - Second level"),
            "\u{2014} First level\n - Second level"
        );
        assert_eq!(dashes("-- lowercase"), "\u{2014}lowercase");
        assert_eq!(dashes("- 2024 was a year"), "\u{2014} 2024 was a year");
    }

    #[test]
    fn test_spacing_removed_around_existing_dash() {
        assert_eq!(tighten("a \u{2014} b", SEP), "a\u{2014}b");
        assert_eq!(tighten("a\u{2014}  b", SEP), "a\u{2014}b");
        assert_eq!(tighten("a  \u{2014}b", SEP), "a\u{2014}b");
    }

    #[test]
    fn test_tighten_consumes_spaces_before_marker() {
        assert_eq!(
            tighten("word \u{E000}\u{2014} next", SEP),
            "word\u{E000}\u{2014}next"
        );
        assert_eq!(
            tighten("word \u{E000} \u{2014} \u{E000} next", SEP),
            "word\u{E000}\u{2014}\u{E000}next"
        );
        assert_eq!(
            dashes("word \u{E000}\u{2014} next"),
            "word\u{E000}\u{2014}next"
        );
    }

    #[test]
    fn test_space_after_quoted_sentence() {
        assert_eq!(
            dashes("\"I love dogs.\" - Me"),
            "\"I love dogs.\" \u{2014} Me"
        );
        assert_eq!(
            dashes("\u{201C}Really?\u{201D}\u{2014}she asked"),
            "\u{201C}Really?\u{201D} \u{2014} she asked"
        );
        assert_eq!(dashes("Wait\u{2026} - no"), "Wait\u{2026} \u{2014} no");
        assert_eq!(dashes("Wait... - no"), "Wait... \u{2014} no");
    }

    #[test]
    fn test_space_after_bare_closing_quote() {
        assert_eq!(dashes("\"a\" - b"), "\"a\" \u{2014} b");
        assert_eq!(
            dashes("he said \u{201C}no\u{201D}\u{2014}then left"),
            "he said \u{201C}no\u{201D} \u{2014} then left"
        );
        assert_eq!(dashes("the dogs' - bark"), "the dogs' \u{2014} bark");
    }

    #[test]
    fn test_no_space_without_quotation() {
        assert_eq!(dashes("Stop! - he cried"), "Stop!\u{2014}he cried");
        assert_eq!(dashes("said - \"it\""), "said\u{2014}\"it\"");
    }

    #[test]
    fn test_separator_on_both_sides() {
        assert_eq!(
            dashes("word\u{E000} - \u{E000}another"),
            "word\u{E000}\u{2014}\u{E000}another"
        );
        assert_eq!(dashes("word\u{E000}- another"), "word\u{E000}\u{2014}another");
        assert_eq!(dashes("word - \u{E000}another"), "word\u{2014}\u{E000}another");
        assert_eq!(dashes("word\u{E000}--another"), "word\u{E000}\u{2014}another");
        assert_eq!(dashes("word--\u{E000}another"), "word\u{2014}\u{E000}another");
        assert_eq!(dashes("said \u{E000}- next"), "said\u{E000}\u{2014}next");
        assert_eq!(dashes("said  \u{E000} -- next"), "said\u{E000}\u{2014}next");
        assert_eq!(
            dashes("\u{E000}- First"),
            "\u{E000}\u{2014} First"
        );
    }

    #[test]
    fn test_idempotent_on_typographic_text() {
        for text in [
            "word\u{2014}word",
            "\u{2014} First level",
            "\u{201C}I love dogs.\u{201D} \u{2014} Me",
            "Wait\u{2026} \u{2014} no",
            "a browser- or OS-specific fashion",
        ] {
            assert_eq!(dashes(text), text, "changed: {text:?}");
        }
    }
}
