//! Configuration module
//!
//! A TOML file with a `[typography]` and an `[output]` table. Every key is
//! optional; command-line flags win over values from the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smartype_core::{api::defaults, describe, parse_passes, Options, Pass};
use std::fs;
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Rewrite configuration
    #[serde(default)]
    pub typography: TypographyConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Rewrite-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypographyConfig {
    /// Separator, as a literal character or `U+XXXX`
    pub separator: String,

    /// Passes to run, by name
    pub passes: Vec<String>,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            separator: describe(defaults::SEPARATOR),
            passes: Pass::ALL.iter().map(|pass| pass.name().to_string()).collect(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value resolves
    pub fn validate(&self) -> Result<(), CliError> {
        self.options()?;
        self.passes()?;
        Ok(())
    }

    /// Rewrite options described by this configuration
    pub fn options(&self) -> Result<Options, CliError> {
        Ok(Options::builder()
            .separator_str(&self.typography.separator)?
            .build()?)
    }

    /// Passes described by this configuration
    pub fn passes(&self) -> Result<Vec<Pass>, CliError> {
        Ok(parse_passes(self.typography.passes.as_slice())?)
    }

    /// Commented TOML template with every default spelled out
    pub fn template() -> String {
        let passes = Pass::ALL
            .iter()
            .map(|pass| format!("    \"{}\",  # {}", pass.name(), pass.description()))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"# smartype configuration

[typography]
# Character marking joins between markup fragments. Either a literal
# character or a code point such as "U+E000". It must never occur in
# real content.
separator = "{separator}"

# Passes to run. They always run in this order, whatever order they
# are listed in.
passes = [
{passes}
]

[output]
# "text" or "json"
format = "text"

# Indent JSON output
pretty_json = true
"#,
            separator = describe(defaults::SEPARATOR),
        )
    }
}
