//! Public rewrite functions
//!
//! Every function here is total and deterministic: any input, including the
//! empty string, produces output, and identical `(text, options)` pairs always
//! produce identical output.

use crate::api::Options;
use crate::domain::pipeline::{self, Pass};

/// Hyphens negating a numeral become minus signs (`-5` → `−5`)
pub fn apply_minus_signs(text: &str, options: &Options) -> String {
    Pass::MinusSigns.apply(text, options.separator)
}

/// Collapse dash runs into em-dashes and normalize the spacing around them
pub fn apply_em_dash_normalization(text: &str, options: &Options) -> String {
    Pass::EmDashes.apply(text, options.separator)
}

/// Hyphens between two numbers become en-dashes (`1-5` → `1–5`)
pub fn apply_numeric_range_dashes(text: &str, options: &Options) -> String {
    Pass::NumericRanges.apply(text, options.separator)
}

/// Hyphens between two month names become en-dashes (`Jan-Feb` → `Jan–Feb`)
pub fn apply_date_range_dashes(text: &str, options: &Options) -> String {
    Pass::DateRanges.apply(text, options.separator)
}

/// Minus signs, em-dashes, then both range rules
pub fn apply_all_dash_rules(text: &str, options: &Options) -> String {
    pipeline::run(text, options.separator, &Pass::DASHES)
}

/// Resolve straight quotes into curly quotes and apostrophes
pub fn apply_smart_quotes(text: &str, options: &Options) -> String {
    Pass::SmartQuotes.apply(text, options.separator)
}

/// The full pipeline: every dash rule, then smart quotes
pub fn transform(text: &str, options: &Options) -> String {
    pipeline::run(text, options.separator, &Pass::ALL)
}

/// Run a subset of passes, always in pipeline order
pub fn transform_with(text: &str, options: &Options, passes: &[Pass]) -> String {
    pipeline::run(text, options.separator, passes)
}
