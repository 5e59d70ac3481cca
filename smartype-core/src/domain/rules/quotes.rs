//! Smart quotes
//!
//! Straight quotes are resolved in a fixed order of increasingly permissive
//! steps. Closing single quotes and contractions go first so that the later
//! "is this an apostrophe or an opening quote" question only has to consider
//! quotes that are still undecided. Double quotes come after single quotes,
//! and punctuation is moved around the resolved closing quotes last.
//!
//! Each step is a separate left-to-right scan over the output of the previous
//! step, and reads its context from that input only.

use crate::domain::classifier::{
    is_line_break, is_whitespace, is_word, ELLIPSIS, EM_DASH, LEFT_DOUBLE, LEFT_SINGLE, RIGHT_DOUBLE,
    RIGHT_SINGLE,
};
use crate::domain::scanner::{rewrite, MarkedText, Splice};

/// Resolve every straight quote and fix punctuation around closing quotes
pub fn apply(text: &str, separator: char) -> String {
    if !text.contains(['\'', '"', RIGHT_SINGLE, RIGHT_DOUBLE]) {
        return text.to_string();
    }

    let text = close_single_quotes(text, separator);
    let text = contractions(&text, separator);
    let text = apostrophes(&text, separator);
    let text = open_single_quotes(&text, separator);
    let text = open_double_quotes(&text, separator);
    let text = close_double_quotes(&text, separator);
    let text = single_before_double(&text, separator);
    let text = periods_inside(&text, separator);
    commas_inside(&text, separator)
}

/// Step 1: `'` after a word and before a boundary closes a quotation
pub fn close_single_quotes(text: &str, separator: char) -> String {
    rewrite(text, separator, |view, pos| {
        (view.is(pos, '\'') && is_closing_single(view, pos))
            .then(|| Splice::to(pos + 1).push(RIGHT_SINGLE))
    })
}

/// Step 2: a quote between two letters is an apostrophe
pub fn contractions(text: &str, separator: char) -> String {
    rewrite(text, separator, |view, pos| {
        (view.is(pos, '\'') && is_contraction(view, pos))
            .then(|| Splice::to(pos + 1).push(RIGHT_SINGLE))
    })
}

/// Step 3: a quote that opens a word but never closes on its line is an
/// apostrophe (`'90s`, `'em`, `rock 'n' roll`)
pub fn apostrophes(text: &str, separator: char) -> String {
    if !text.contains('\'') {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let closes_later = closers_ahead(&MarkedText::new(&chars, separator));

    rewrite(text, separator, |view, pos| {
        if !view.is(pos, '\'') {
            return None;
        }
        let after_boundary =
            view.at_line_start(pos) || view.before(pos).is_some_and(|c| !is_word(c));
        let is_apostrophe = is_elision(view, view.skip_marker(pos + 1)) || !closes_later[pos + 1];
        (after_boundary && is_apostrophe).then(|| Splice::to(pos + 1).push(RIGHT_SINGLE))
    })
}

/// Step 4: remaining `'` after a boundary and before a word opens a quotation
pub fn open_single_quotes(text: &str, separator: char) -> String {
    rewrite(text, separator, |view, pos| {
        let opens = view.is(pos, '\'')
            && opens_single_after(view, pos)
            && view.check(pos + 1, |c| !is_whitespace(c));
        opens.then(|| Splice::to(pos + 1).push(LEFT_SINGLE))
    })
}

/// Step 5: `"` after a boundary and before text opens a quotation
pub fn open_double_quotes(text: &str, separator: char) -> String {
    rewrite(text, separator, |view, pos| {
        if !view.is(pos, '"') {
            return None;
        }
        let opens = (opens_double_after(view, pos) && opens_double_before(view, pos + 1))
            || after_brace(view, pos);
        opens.then(|| Splice::to(pos + 1).push(LEFT_DOUBLE))
    })
}

/// Step 6: `"` after text and before a boundary, or at the end of a line,
/// closes a quotation
pub fn close_double_quotes(text: &str, separator: char) -> String {
    rewrite(text, separator, |view, pos| {
        if !view.is(pos, '"') {
            return None;
        }
        let after_text = view
            .before(pos)
            .is_some_and(|c| !is_whitespace(c) && c != '(');
        let closes = (after_text && closes_double_before(view, pos + 1))
            || view.at_line_end(view.skip_marker(pos + 1));
        closes.then(|| Splice::to(pos + 1).push(RIGHT_DOUBLE))
    })
}

/// Step 7: `'` directly before a closing double quote closes too
pub fn single_before_double(text: &str, separator: char) -> String {
    rewrite(text, separator, |view, pos| {
        (view.is(pos, '\'') && view.is(view.skip_marker(pos + 1), RIGHT_DOUBLE))
            .then(|| Splice::to(pos + 1).push(RIGHT_SINGLE))
    })
}

/// Step 8a: `”.` becomes `.”`
pub fn periods_inside(text: &str, separator: char) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    rewrite(text, separator, |view, pos| {
        move_inside(view, pos, '.', &[RIGHT_SINGLE, RIGHT_DOUBLE], |c| {
            matches!(c, '!' | '?' | ':' | '.' | ELLIPSIS)
        })
    })
}

/// Step 8b: `”,` becomes `,”`, and `’,` becomes `,’` when the `’` closes a
/// `‘` on its line
pub fn commas_inside(text: &str, separator: char) -> String {
    if !text.contains(',') {
        return text.to_string();
    }
    rewrite(text, separator, |view, pos| {
        let splice = move_inside(view, pos, ',', &[RIGHT_SINGLE, RIGHT_DOUBLE], |c| {
            matches!(c, '!' | '?')
        })?;
        let quote_at = view.skip_marker(pos);
        (view.is(quote_at, RIGHT_DOUBLE) || closes_opened_single(view, quote_at))
            .then_some(splice)
    })
}

/// Whether the `’` at `pos` closes a `‘` opened earlier on the same line.
/// Possessives (`dogs’,`) have no opener and keep their comma outside.
fn closes_opened_single(view: &MarkedText<'_>, pos: usize) -> bool {
    for at in (0..pos).rev() {
        match view.get(at) {
            Some(LEFT_SINGLE) => return true,
            Some(RIGHT_SINGLE) if !is_contraction(view, at) => return false,
            Some(ch) if is_line_break(ch) => return false,
            _ => {}
        }
    }
    false
}

/// Moves `mark` from just after a closing quote to just before it, keeping
/// any markers on their side of the quote
fn move_inside(
    view: &MarkedText<'_>,
    pos: usize,
    mark: char,
    quotes: &[char],
    blocked_by: impl Fn(char) -> bool,
) -> Option<Splice> {
    let marker_before = view.is_marker(pos);
    let quote_at = if marker_before { pos + 1 } else { pos };
    let quote = view.get(quote_at).filter(|c| quotes.contains(c))?;

    let preceded = view
        .before_marker(quote_at)
        .and_then(|prev| view.get(prev))
        .is_some_and(&blocked_by);
    if preceded {
        return None;
    }

    let marker_after = view.is_marker(quote_at + 1);
    let mark_at = if marker_after { quote_at + 2 } else { quote_at + 1 };
    if !view.is(mark_at, mark) || view.starts_with(mark_at, "...") {
        return None;
    }

    let separator = view.separator();
    Some(
        Splice::to(mark_at + 1)
            .push_if(marker_before, separator)
            .push(mark)
            .push(quote)
            .push_if(marker_after, separator),
    )
}

/// Characters a closing single quote may be followed by
fn ends_single(ch: char) -> bool {
    is_whitespace(ch)
        || matches!(
            ch,
            '.' | '!' | '?' | ';' | ':' | ',' | ')' | ']' | '-' | '"' | EM_DASH | RIGHT_DOUBLE
        )
}

/// Characters a closing double quote may be followed by
fn ends_double(ch: char) -> bool {
    is_whitespace(ch)
        || matches!(
            ch,
            '/' | '.' | '!' | '?' | ';' | ':' | ',' | ')' | ']' | '}' | '-' | EM_DASH | RIGHT_DOUBLE
        )
}

/// `marker? (s marker?)? (boundary | end)` anchored at `pos`
fn closes_before(view: &MarkedText<'_>, pos: usize, boundary: fn(char) -> bool) -> bool {
    let ends_at = |at: usize| view.at_end(at) || view.check(at, boundary);

    let at = view.skip_marker(pos);
    ends_at(at) || (view.is(at, 's') && ends_at(view.skip_marker(at + 1)))
}

fn closes_double_before(view: &MarkedText<'_>, pos: usize) -> bool {
    closes_before(view, pos, ends_double)
}

/// A single quote at `pos` (straight or already curled) that ends a quotation
fn is_closing_single(view: &MarkedText<'_>, pos: usize) -> bool {
    view.before(pos)
        .is_some_and(|c| !is_whitespace(c) && c != LEFT_DOUBLE && c != '\'')
        && closes_before(view, pos + 1, ends_single)
}

/// A single quote at `pos` sandwiched between two letters
fn is_contraction(view: &MarkedText<'_>, pos: usize) -> bool {
    let letter_before = view
        .before_marker(pos)
        .is_some_and(|prev| view.check(prev, |c| c.is_ascii_alphabetic()));
    letter_before && view.check(view.skip_marker(pos + 1), |c| c.is_ascii_alphabetic())
}

/// `n' ` as in "rock 'n' roll", through a marker on either side of the quote
fn is_elision(view: &MarkedText<'_>, pos: usize) -> bool {
    let quote = view.skip_marker(pos + 1);
    view.is(pos, 'n')
        && view.check(quote, |c| c == '\'' || c == RIGHT_SINGLE)
        && view.is_space(view.skip_marker(quote + 1))
}

/// `closes_later[k]`: a closing single quote (not a contraction) starts at or
/// after `k` on the same line
fn closers_ahead(view: &MarkedText<'_>) -> Vec<bool> {
    let mut closes_later = vec![false; view.len() + 1];
    for pos in (0..view.len()).rev() {
        closes_later[pos] = match view.get(pos) {
            Some('\n') => false,
            Some('\'' | RIGHT_SINGLE)
                if is_closing_single(view, pos) && !is_contraction(view, pos) =>
            {
                true
            }
            _ => closes_later[pos + 1],
        };
    }
    closes_later
}

/// Line start, whitespace, a double quote, a dash or an opening bracket
/// before `pos`, through one marker
fn opens_single_after(view: &MarkedText<'_>, pos: usize) -> bool {
    let at = if view.before(pos) == Some(view.separator()) {
        pos - 1
    } else {
        pos
    };
    view.at_line_start(at)
        || view.before(at).is_some_and(|c| {
            is_whitespace(c)
                || matches!(c, '"' | '-' | '(' | '[' | EM_DASH | LEFT_DOUBLE | RIGHT_DOUBLE)
        })
}

fn opens_double_after(view: &MarkedText<'_>, pos: usize) -> bool {
    let separator = view.separator();
    view.at_line_start(pos)
        || view.before(pos).is_some_and(|c| {
            is_whitespace(c) || c == separator || matches!(c, '(' | '/' | '[' | '{' | '-' | EM_DASH)
        })
}

/// What may follow an opening double quote
fn opens_double_before(view: &MarkedText<'_>, pos: usize) -> bool {
    if view.is_marker(pos) && view.check(pos + 1, |c| matches!(c, ' ' | '.' | ',')) {
        return true;
    }
    let at = view.skip_marker(pos);
    let separator = view.separator();
    view.starts_with(at, "...")
        || view.check(at, |c| {
            !is_whitespace(c)
                && c != separator
                && !matches!(c, ')' | ',' | '!' | '?' | ';' | ':' | '.' | '}' | EM_DASH)
        })
}

/// `{"` and `{ "` open a quotation (math-mode convention)
fn after_brace(view: &MarkedText<'_>, pos: usize) -> bool {
    match view.before(pos) {
        Some('{') => true,
        Some(' ') => pos >= 2 && view.is(pos - 2, '{'),
        _ => false,
    }
}
