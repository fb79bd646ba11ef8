//! Command-line interface for strictly_guess.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Guess - bounded-attempts number guessing game
#[derive(Parser, Debug)]
#[command(name = "strictly_guess")]
#[command(about = "Guess the secret number before your attempts run out", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for secrets and colors, for reproducible sessions
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Tui,

    /// Play line by line on stdin/stdout
    Console {
        /// Emit every render instruction as a JSON line
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["strictly_guess"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "strictly_guess",
            "console",
            "--json",
            "--seed",
            "9",
            "--config",
            "game.toml",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::Console { json: true }));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["strictly_guess", "lobby"]).is_err());
    }
}
