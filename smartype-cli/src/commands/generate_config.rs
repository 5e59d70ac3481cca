//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        fs::write(&self.output, CliConfig::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!(
            "✓ Configuration template written to {}",
            self.output.display()
        );
        println!();
        println!("Next steps:");
        println!("1. Edit the file to choose a separator and passes");
        println!("2. Validate it:");
        println!("   smartype validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   smartype process -i input.txt -c {}",
            self.output.display()
        );

        Ok(())
    }
}
