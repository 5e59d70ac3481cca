//! Separator-aware scanning
//!
//! Every rule is a matcher that is tried at each character position of the
//! input, left to right. A successful match consumes `[position, end)` and
//! emits a replacement; scanning then resumes at `end`, so matches never
//! overlap. Context checks ("what precedes this hyphen") always read the
//! original input, never the partially rewritten output.
//!
//! The separator marks the point where two markup fragments were joined. It
//! is a zero-width token for matching purposes: matchers step over at most one
//! marker wherever they test a boundary, and copy it into their replacement
//! on the side it was found.

use super::classifier::{is_line_break, is_whitespace};

/// Read-only view over the input with O(1) context access
#[derive(Debug, Clone, Copy)]
pub struct MarkedText<'a> {
    chars: &'a [char],
    separator: char,
}

impl<'a> MarkedText<'a> {
    /// Create a view over decoded characters
    pub fn new(chars: &'a [char], separator: char) -> Self {
        Self { chars, separator }
    }

    /// The boundary marker for this call
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Number of characters in the view
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the view is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `pos`
    pub fn get(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    /// Character immediately before `pos`
    pub fn before(&self, pos: usize) -> Option<char> {
        pos.checked_sub(1).and_then(|prev| self.get(prev))
    }

    /// Whether the character at `pos` equals `target`
    pub fn is(&self, pos: usize, target: char) -> bool {
        self.get(pos) == Some(target)
    }

    /// Whether the character at `pos` satisfies `pred`
    pub fn check(&self, pos: usize, pred: impl Fn(char) -> bool) -> bool {
        self.get(pos).is_some_and(pred)
    }

    /// Whether the separator sits at `pos`
    pub fn is_marker(&self, pos: usize) -> bool {
        self.is(pos, self.separator)
    }

    /// Step over one marker at `pos`, if present
    pub fn skip_marker(&self, pos: usize) -> usize {
        if self.is_marker(pos) {
            pos + 1
        } else {
            pos
        }
    }

    /// Position of the character before `pos`, stepping back over one marker
    pub fn before_marker(&self, pos: usize) -> Option<usize> {
        let prev = pos.checked_sub(1)?;
        if self.is_marker(prev) {
            prev.checked_sub(1)
        } else {
            Some(prev)
        }
    }

    /// Start of text or the character before `pos` is a line break
    pub fn at_line_start(&self, pos: usize) -> bool {
        match self.before(pos) {
            None => true,
            Some(ch) => is_line_break(ch),
        }
    }

    /// End of text or a line break at `pos`
    pub fn at_line_end(&self, pos: usize) -> bool {
        match self.get(pos) {
            None => true,
            Some(ch) => is_line_break(ch),
        }
    }

    /// End of text
    pub fn at_end(&self, pos: usize) -> bool {
        pos >= self.chars.len()
    }

    /// Whitespace at `pos`
    pub fn is_space(&self, pos: usize) -> bool {
        self.check(pos, is_whitespace)
    }

    /// Length of the run starting at `pos` whose characters satisfy `pred`
    pub fn run_len(&self, pos: usize, pred: impl Fn(char) -> bool) -> usize {
        self.chars
            .get(pos..)
            .map_or(0, |rest| rest.iter().take_while(|&&ch| pred(ch)).count())
    }

    /// Whether the literal `needle` occurs at `pos`
    pub fn starts_with(&self, pos: usize, needle: &str) -> bool {
        let mut at = pos;
        for ch in needle.chars() {
            if !self.is(at, ch) {
                return false;
            }
            at += 1;
        }
        true
    }

    /// Characters in `[start, end)` as a string
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars
            .get(start..end.min(self.chars.len()))
            .map_or_else(String::new, |part| part.iter().collect())
    }
}

/// A successful match: consume up to `end`, emit `replacement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// First position after the consumed range
    pub end: usize,
    /// Text emitted in place of the consumed range
    pub replacement: String,
}

impl Splice {
    /// Start an empty replacement that consumes up to `end`
    pub fn to(end: usize) -> Self {
        Self {
            end,
            replacement: String::new(),
        }
    }

    /// Append a character
    pub fn push(mut self, ch: char) -> Self {
        self.replacement.push(ch);
        self
    }

    /// Append a character when `cond` holds (used to re-emit markers)
    pub fn push_if(mut self, cond: bool, ch: char) -> Self {
        if cond {
            self.replacement.push(ch);
        }
        self
    }

    /// Append a string
    pub fn push_str(mut self, s: &str) -> Self {
        self.replacement.push_str(s);
        self
    }
}

/// Run `rule` over `text`, splicing in every match
///
/// Positions where the rule does not match (or returns a splice that would
/// not advance) are copied through unchanged, so the driver always
/// terminates and never drops input it was not asked to rewrite.
pub fn rewrite<F>(text: &str, separator: char, mut rule: F) -> String
where
    F: FnMut(&MarkedText<'_>, usize) -> Option<Splice>,
{
    let chars: Vec<char> = text.chars().collect();
    let view = MarkedText::new(&chars, separator);
    let mut out = String::with_capacity(text.len() + text.len() / 4);

    let mut pos = 0;
    while pos < chars.len() {
        match rule(&view, pos) {
            Some(splice) if splice.end > pos => {
                out.push_str(&splice.replacement);
                pos = splice.end;
            }
            _ => {
                out.push(chars[pos]);
                pos += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: char = '\u{E000}';

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_context_access() {
        let text = chars("ab\ncd");
        let view = MarkedText::new(&text, SEP);

        assert_eq!(view.len(), 5);
        assert_eq!(view.get(0), Some('a'));
        assert_eq!(view.before(0), None);
        assert_eq!(view.before(1), Some('a'));
        assert!(view.at_line_start(0));
        assert!(!view.at_line_start(1));
        assert!(view.at_line_start(3));
        assert!(view.at_line_end(2));
        assert!(view.at_line_end(5));
        assert!(view.at_end(5));
    }

    #[test]
    fn test_marker_navigation() {
        let text = chars("a\u{E000}b");
        let view = MarkedText::new(&text, SEP);

        assert!(view.is_marker(1));
        assert_eq!(view.skip_marker(1), 2);
        assert_eq!(view.skip_marker(0), 0);
        assert_eq!(view.before_marker(2), Some(0));
        assert_eq!(view.before_marker(1), Some(0));
        assert_eq!(view.before_marker(0), None);
    }

    #[test]
    fn test_runs_and_literals() {
        let text = chars("12--ab...");
        let view = MarkedText::new(&text, SEP);

        assert_eq!(view.run_len(0, |c| c.is_ascii_digit()), 2);
        assert_eq!(view.run_len(2, |c| c == '-'), 2);
        assert_eq!(view.run_len(20, |c| c == '-'), 0);
        assert!(view.starts_with(6, "..."));
        assert!(!view.starts_with(7, "..."));
        assert_eq!(view.slice(4, 6), "ab");
        assert_eq!(view.slice(8, 99), ".");
    }

    #[test]
    fn test_rewrite_non_overlapping() {
        // "aa" -> "b", scanning left to right without overlap
        let out = rewrite("aaa", SEP, |view, pos| {
            (view.is(pos, 'a') && view.is(pos + 1, 'a')).then(|| Splice::to(pos + 2).push('b'))
        });
        assert_eq!(out, "ba");
    }

    #[test]
    fn test_rewrite_ignores_non_advancing_splice() {
        let out = rewrite("abc", SEP, |_, pos| Some(Splice::to(pos)));
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_rewrite_empty() {
        assert_eq!(rewrite("", SEP, |_, _| None), "");
    }
}
