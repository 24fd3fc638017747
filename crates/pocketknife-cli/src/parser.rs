//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line percentage calculator and product storage.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "pocket-knife")]
#[command(about = "Calculate percentages and manage a local product catalog")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_verbose_after_subcommand() {
        let cli = Cli::parse_from(["pocket-knife", "list-products", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::ListProducts)));
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::parse_from(["pocket-knife"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }
}
