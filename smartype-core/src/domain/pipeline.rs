//! Fixed-order composition of the rewrite passes
//!
//! Later passes assume earlier ones already ran: the range pass only sees
//! hyphens the em-dash pass left alone, and quote resolution relies on settled
//! em-dash spacing. The order below is therefore part of the behavior, and
//! [`run`] always applies passes in it no matter how the caller lists them.

use std::fmt;

use super::rules::{em_dash, minus, quotes, range};

/// One rewrite pass, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Pass {
    /// Hyphens negating a numeral become minus signs
    MinusSigns,
    /// Hyphen runs used as dashes become em-dashes, with spacing normalized
    EmDashes,
    /// Hyphens between two numbers become en-dashes
    NumericRanges,
    /// Hyphens between two month names become en-dashes
    DateRanges,
    /// Straight quotes become curly quotes and apostrophes
    SmartQuotes,
}

impl Pass {
    /// Every pass, in the order the pipeline applies them
    pub const ALL: [Pass; 5] = [
        Pass::MinusSigns,
        Pass::EmDashes,
        Pass::NumericRanges,
        Pass::DateRanges,
        Pass::SmartQuotes,
    ];

    /// The dash passes, in order
    pub const DASHES: [Pass; 4] = [
        Pass::MinusSigns,
        Pass::EmDashes,
        Pass::NumericRanges,
        Pass::DateRanges,
    ];

    /// Stable kebab-case name
    pub fn name(self) -> &'static str {
        match self {
            Pass::MinusSigns => "minus-signs",
            Pass::EmDashes => "em-dashes",
            Pass::NumericRanges => "numeric-ranges",
            Pass::DateRanges => "date-ranges",
            Pass::SmartQuotes => "smart-quotes",
        }
    }

    /// One-line human description
    pub fn description(self) -> &'static str {
        match self {
            Pass::MinusSigns => "-5 becomes \u{2212}5",
            Pass::EmDashes => "word - word and word--word become word\u{2014}word",
            Pass::NumericRanges => "1-5 becomes 1\u{2013}5",
            Pass::DateRanges => "Jan-Feb becomes Jan\u{2013}Feb",
            Pass::SmartQuotes => "\"it's\" becomes \u{201C}it\u{2019}s\u{201D}",
        }
    }

    /// Apply this pass alone
    pub fn apply(self, text: &str, separator: char) -> String {
        match self {
            Pass::MinusSigns => minus::apply(text, separator),
            Pass::EmDashes => em_dash::apply(text, separator),
            Pass::NumericRanges => range::apply_numeric(text, separator),
            Pass::DateRanges => range::apply_dates(text, separator),
            Pass::SmartQuotes => quotes::apply(text, separator),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply the selected passes in pipeline order
///
/// Duplicates in `passes` are ignored; an empty selection returns the text
/// unchanged.
pub fn run(text: &str, separator: char, passes: &[Pass]) -> String {
    let mut result = text.to_string();
    for pass in Pass::ALL.into_iter().filter(|pass| passes.contains(pass)) {
        tracing::trace!(pass = pass.name(), len = result.len(), "applying pass");
        result = pass.apply(&result, separator);
    }
    result
}
