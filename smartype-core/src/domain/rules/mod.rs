//! The rewrite rules, one module per pass

pub mod em_dash;
pub mod minus;
pub mod quotes;
pub mod range;

pub use range::{is_month, MONTHS};
