//! tictactoe_history - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_history::{InvalidIntentPolicy, Settings, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;

    match cli.command {
        Command::Tui => run_tui(&settings),
        Command::Replay {
            cells,
            jump,
            json,
            strict,
        } => run_replay(settings, cells, jump, json, strict),
    }
}

/// Run a scripted game and print the result.
#[instrument(skip(settings))]
fn run_replay(
    settings: Settings,
    cells: Vec<usize>,
    jump: Option<usize>,
    json: bool,
    strict: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = if strict {
        settings.with_invalid_intents(InvalidIntentPolicy::Reject)
    } else {
        settings
    };

    info!(moves = cells.len(), "Replaying game");
    let view = replay(&cells, jump, &settings).context("Replay rejected a move")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view);
    }
    Ok(())
}
