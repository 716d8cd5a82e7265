//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with undo, redo and jump-to-move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui,

    /// Play a scripted game and print the final view
    Replay {
        /// Cell indices (0-8, row-major) to play in order
        cells: Vec<usize>,

        /// History index to jump to after playing
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Report invalid moves as errors instead of skipping them
        #[arg(long)]
        strict: bool,
    },
}
