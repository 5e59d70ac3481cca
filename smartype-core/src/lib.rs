//! Typographic rewriting for prose
//!
//! This crate turns typewriter punctuation into typographic punctuation:
//! straight quotes become curly quotes and apostrophes, hyphens used as dashes
//! become em-dashes, hyphens in ranges become en-dashes, and hyphens negating a
//! number become minus signs.
//!
//! Text assembled from several markup fragments can be rewritten in one go.
//! Join the fragments with the separator character (see [`Options`]); every
//! rule treats the separator as zero-width and leaves it on the side of the
//! punctuation it was found on, so splitting the output on the separator gives
//! back one rewritten piece per fragment.
//!
//! # Architecture
//!
//! - **Domain layer**: character classes, the marker-aware scanner, and the
//!   individual rewrite rules
//! - **API layer**: options, pass selection, and the fragment helper
//!
//! # Example
//!
//! ```rust
//! use smartype_core::{transform, Options};
//!
//! let text = "\"Hello,\" she said - \"it's pages 1-5.\"";
//! let result = transform(text, &Options::default());
//! assert_eq!(
//!     result,
//!     "\u{201C}Hello,\u{201D} she said\u{2014}\u{201C}it\u{2019}s pages 1\u{2013}5.\u{201D}"
//! );
//! ```

pub mod api;
pub mod domain;

pub use api::{
    apply_all_dash_rules, apply_date_range_dashes, apply_em_dash_normalization,
    apply_minus_signs, apply_numeric_range_dashes, apply_smart_quotes, describe,
    join_fragments, parse_passes, parse_separator, split_fragments, transform,
    transform_fragments, transform_with, Error, Options, OptionsBuilder, Pass, Result,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_exports() {
        let options = Options::default();
        assert_eq!(transform("", &options), "");
        assert_eq!(Pass::ALL.len(), 5);
        assert_eq!(parse_separator("U+E000").unwrap(), options.separator);
    }
}
