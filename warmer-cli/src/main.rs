//! Command-line entry point for warmer

use anyhow::Result;
use clap::Parser;
use warmer_cli::commands::Commands;

/// Next-warmer-day analysis: for each temperature reading, how many days
/// until a strictly warmer one
#[derive(Debug, Parser)]
#[command(name = "warmer", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::List { subcommand } => {
            subcommand.execute();
            Ok(())
        }
        Commands::GenerateConfig(args) => args.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_inline_text() {
        let cli = Cli::try_parse_from(["warmer", "process", "--text", "1 2 3", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.text.as_deref(), Some("1 2 3"));
                assert!(args.input.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_text_conflicts_with_input() {
        let result = Cli::try_parse_from(["warmer", "process", "-t", "1 2", "-i", "a.txt"]);
        assert!(result.is_err());
    }
}
