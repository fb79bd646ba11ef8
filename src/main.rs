//! Strictly Guess - Unified CLI
//!
//! Number guessing game with a terminal UI and a line-oriented console mode.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_guess::{
    ConsoleDisplay, GameConfiguration, GuessGame, JsonDisplay, LineInput, run_session, tui,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Tui);

    match command {
        Command::Tui => {
            init_file_logging()?;
            let game = build_game(&cli)?;
            tui::run_tui(game).await
        }
        Command::Console { json } => {
            init_stderr_logging();
            let game = build_game(&cli)?;
            run_console(game, json).await
        }
        Command::Config => {
            init_stderr_logging();
            let config = load_config(&cli)?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Logs to a file so the terminal UI stays clean.
fn init_file_logging() -> Result<()> {
    let log_file = std::fs::File::create(tui::LOG_FILE)
        .with_context(|| format!("Failed to create {}", tui::LOG_FILE))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs warnings to stderr, leaving stdout to the game.
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
}

#[instrument(skip(cli), fields(config = ?cli.config))]
fn load_config(cli: &Cli) -> Result<GameConfiguration> {
    match &cli.config {
        Some(path) => Ok(GameConfiguration::from_file(path)?),
        None => {
            info!("No config file given, using defaults");
            Ok(GameConfiguration::default())
        }
    }
}

#[instrument(skip(cli), fields(seed = ?cli.seed))]
fn build_game(cli: &Cli) -> Result<GuessGame> {
    let config = load_config(cli)?;
    let game = match cli.seed {
        Some(seed) => GuessGame::seeded(config, seed)?,
        None => GuessGame::new(config)?,
    };
    Ok(game)
}

/// Plays on stdin/stdout until stdin closes.
#[instrument(skip(game))]
async fn run_console(mut game: GuessGame, json: bool) -> Result<()> {
    let mut input = LineInput::new(tokio::io::BufReader::new(tokio::io::stdin()));
    if json {
        let mut display = JsonDisplay::new(io::stdout());
        run_session(&mut game, &mut input, &mut display).await
    } else {
        let mut display = ConsoleDisplay::new(io::stdout(), game.config().clone());
        run_session(&mut game, &mut input, &mut display).await
    }
}

