//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_timetravel.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a sequence of moves and print the resulting view
    Replay {
        /// Cells to play, separated by commas or spaces (0-8 or labels like "center")
        moves: String,

        /// Step to display after replaying (defaults to the last move)
        #[arg(long)]
        jump: Option<usize>,

        /// List the most recent move first
        #[arg(long)]
        descending: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints the view.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    #[default]
    Text,
    /// The derived view as pretty-printed JSON
    Json,
}
