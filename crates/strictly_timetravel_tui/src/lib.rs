//! Terminal front end for strictly_timetravel.
//!
//! Renders a [`strictly_timetravel::GameSession`] with ratatui and feeds
//! key presses back into it. Also provides a headless replay mode for
//! scripting.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod terminal;
mod ui;

// Crate-level exports - Application state
pub use app::{App, Focus};

// Crate-level exports - CLI and configuration
pub use cli::{Cli, Command, OutputFormat};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, TuiConfig};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Replay
pub use replay::{ReplayError, parse_moves, run_replay};

// Crate-level exports - Terminal UI
pub use terminal::run_tui;
pub use ui::draw;
