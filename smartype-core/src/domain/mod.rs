//! Domain layer: the typographic rewrite engine
//!
//! Everything in here is a pure `&str -> String` function parameterized only
//! by the separator character. The public, options-based surface lives in
//! [`crate::api`].

pub mod classifier;
pub mod pipeline;
pub mod rules;
pub mod scanner;

pub use classifier::{
    CharacterClass, ELLIPSIS, EM_DASH, EN_DASH, LEFT_DOUBLE, LEFT_SINGLE, MINUS, RIGHT_DOUBLE,
    RIGHT_SINGLE,
};
pub use pipeline::Pass;
pub use scanner::{MarkedText, Splice};
