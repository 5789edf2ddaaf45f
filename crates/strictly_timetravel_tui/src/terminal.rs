//! Interactive terminal session.

use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use strictly_timetravel::SortOrder;
use tracing::{error, info, instrument};

/// Runs the interactive game until the player quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument]
pub fn run_tui(sort_order: SortOrder) -> Result<()> {
    info!("Starting Strictly Timetravel TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(sort_order);
    let result = event_loop(&mut terminal, &mut app);
    if let Err(e) = &result {
        error!(error = %e, "Event loop failed");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(moves = app.session().last_step(), "TUI exited");
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
