//! Public API for smartype-core
//!
//! Options-based entry points for the rewrite passes, pass selection by name,
//! and the fragment helper for callers working on markup text nodes.

mod config;
mod error;
mod fragments;
mod pass;
mod transform;


pub use config::{defaults, describe, parse_separator, Options, OptionsBuilder};
pub use error::{Error, Result};
pub use fragments::{join_fragments, split_fragments, transform_fragments};
pub use pass::parse_passes;
pub use transform::{
    apply_all_dash_rules, apply_date_range_dashes, apply_em_dash_normalization,
    apply_minus_signs, apply_numeric_range_dashes, apply_smart_quotes, transform,
    transform_with,
};

pub use crate::domain::pipeline::Pass;
