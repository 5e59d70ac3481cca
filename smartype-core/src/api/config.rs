//! Per-call options

use crate::api::{Error, Result};
use crate::domain::classifier::is_reserved;

/// Default configuration constants
pub mod defaults {
    /// Default separator: the first private-use code point
    pub const SEPARATOR: char = '\u{E000}';
}

/// Options recognized by every rewrite function
///
/// The separator marks where the caller joined two markup fragments into one
/// string. It must not occur in real content; the rules treat it as
/// zero-width and re-emit it on the side it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Options {
    /// Boundary marker character
    pub separator: char,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: defaults::SEPARATOR,
        }
    }
}

impl Options {
    /// Options with the default separator
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with a custom separator, without validation
    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }

    /// Create an options builder
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if is_reserved(self.separator) {
            return Err(Error::Configuration(format!(
                "separator {} is a character the rules interpret",
                describe(self.separator)
            )));
        }
        Ok(())
    }
}

/// Fluent builder for [`Options`]
#[derive(Debug, Default)]
pub struct OptionsBuilder {
    separator: Option<char>,
}

impl OptionsBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator character
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Set the separator from its textual form (see [`parse_separator`])
    pub fn separator_str(mut self, input: &str) -> Result<Self> {
        self.separator = Some(parse_separator(input)?);
        Ok(self)
    }

    /// Build and validate the options
    pub fn build(self) -> Result<Options> {
        let mut options = Options::default();

        if let Some(separator) = self.separator {
            options.separator = separator;
        }

        options.validate()?;
        Ok(options)
    }
}

/// Parse a separator given either as a single literal character or as a code
/// point in hex (`U+E000`, `u+e000`, `0xE000`)
pub fn parse_separator(input: &str) -> Result<char> {
    let mut chars = input.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(ch);
    }

    let trimmed = input.trim();
    let hex = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .ok_or_else(|| Error::InvalidSeparator(input.to_string()))?;

    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| Error::InvalidSeparator(input.to_string()))
}

/// `U+XXXX` rendering of a character
pub fn describe(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}
