//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use smartype_core::Pass;

use crate::output::OutputFormat;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite text files with typographic punctuation
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available rewrite passes
    Passes,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Catalogue text for this listing
    pub fn render(self) -> String {
        let rows: Vec<(&str, &str)> = match self {
            ListCommands::Passes => Pass::ALL
                .iter()
                .map(|pass| (pass.name(), pass.description()))
                .collect(),
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|format| (format.name(), format.description()))
                .collect(),
        };

        let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let title = match self {
            ListCommands::Passes => "Available passes (applied in this order):",
            ListCommands::Formats => "Available output formats:",
        };

        let mut out = format!("{title}\n");
        for (name, description) in rows {
            out.push_str(&format!("  {name:<width$}  {description}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_passes_in_pipeline_order() {
        let listing = ListCommands::Passes.render();
        let positions: Vec<usize> = Pass::ALL
            .iter()
            .map(|pass| listing.find(pass.name()).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_list_formats() {
        let listing = ListCommands::Formats.render();
        assert!(listing.contains("text"));
        assert!(listing.contains("json"));
    }
}
