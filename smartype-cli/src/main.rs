//! smartype command-line entry point

use clap::Parser;
use smartype_cli::commands::Commands;

/// Typographic punctuation for plain text files
#[derive(Debug, Parser)]
#[command(name = "smartype", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process() {
        let cli =
            Cli::try_parse_from(["smartype", "process", "-i", "a.txt", "-f", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Process(_)));
    }
}
