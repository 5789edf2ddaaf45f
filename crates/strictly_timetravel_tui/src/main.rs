//! Strictly Timetravel - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_timetravel::SortOrder;
use strictly_timetravel_tui::{
    Cli, Command, TuiConfig, init_file_logging, init_stderr_logging, parse_moves, run_replay,
    run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(&config)?;
            run_tui(config.sort_order())
        }
        Command::Replay {
            moves,
            jump,
            descending,
            format,
        } => {
            init_stderr_logging(&config);
            let sort_order = if descending {
                SortOrder::Descending
            } else {
                config.sort_order()
            };
            let moves = parse_moves(&moves)?;
            info!(moves = moves.len(), "Replaying moves");
            let output = run_replay(&moves, jump, sort_order, format)?;
            println!("{}", output);
            Ok(())
        }
    }
}
