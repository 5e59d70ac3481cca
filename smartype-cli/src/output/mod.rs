//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one rewritten file
    fn format_document(&mut self, document: &Document) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// One processed input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path the text was read from
    pub path: PathBuf,
    /// Rewritten text
    pub text: String,
    /// Whether rewriting changed anything
    pub changed: bool,
}

impl Document {
    /// Build a document from the original and rewritten text
    pub fn new(path: PathBuf, original: &str, text: String) -> Self {
        let changed = original != text;
        Self {
            path,
            text,
            changed,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rewritten text, files separated by a blank line
    Text,
    /// JSON array of `{ path, text, changed }` objects
    Json,
}

impl OutputFormat {
    /// Every format, for listing
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Json];

    /// Name accepted by `--format`
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// One-line human description
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "Rewritten text, files separated by a blank line",
            OutputFormat::Json => "JSON array of objects with path, text and changed fields",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
