//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let loaded = CliConfig::from_file(&self.config)
            .and_then(|config| Ok((config.options()?, config.passes()?, config)));

        match loaded {
            Ok((options, passes, config)) => {
                println!("✓ Configuration is valid!");
                println!("  Separator: {}", smartype_core::describe(options.separator));
                let names: Vec<&str> = passes.iter().map(|pass| pass.name()).collect();
                println!("  Passes: {}", names.join(", "));
                println!("  Output format: {}", config.output.format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}
