//! Stateless UI rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strictly_timetravel::{DerivedView, Player, Position, Square};

/// Draws the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Timetravel - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, rows[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    draw_board(frame, panels[0], app, &view);
    draw_history(frame, panels[1], app, &view);

    let status = match app.notice() {
        Some(notice) => format!("{}  ({})", view.status_text(), notice),
        None => view.status_text(),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, rows[2]);

    let help = Paragraph::new(
        "Arrows: move | Enter: play/jump | 1-9: play | Tab: switch panel | S: sort | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, rows[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &DerivedView) {
    let border = if app.focus() == Focus::Board {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for row in 0..3 {
        let cells: Vec<Span> = (0..3)
            .filter_map(|col| Position::from_index(row * 3 + col))
            .enumerate()
            .flat_map(|(col, pos)| {
                let sep = (col < 2).then(|| Span::styled("│", Style::default().fg(Color::DarkGray)));
                std::iter::once(cell_span(view, app, pos)).chain(sep)
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(cells)).alignment(Alignment::Center),
            rows[row * 2],
        );
        if row < 2 {
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn cell_span(view: &DerivedView, app: &App, pos: Position) -> Span<'static> {
    let (symbol, mut style) = match view.board().get(pos) {
        Square::Empty => (
            format!("   {}   ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            format!("   {}   ", player),
            Style::default()
                .fg(match player {
                    Player::X => Color::Blue,
                    Player::O => Color::Green,
                })
                .add_modifier(Modifier::BOLD),
        ),
    };

    if view.is_highlighted(pos) {
        style = style.fg(Color::Red);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, view: &DerivedView) {
    let focused = app.focus() == Focus::History;
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .enumerate()
        .map(|(row, item)| {
            let mut style = if *item.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if focused && row == app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(
                format!("{}. {}", item.step() + 1, item.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(view.sort_label()),
    );
    frame.render_widget(list, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_timetravel::SortOrder;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_history() {
        let mut app = App::new(SortOrder::Ascending);
        for key in ['1', '5'] {
            app.handle_key(KeyCode::Char(key));
        }

        let screen = render(&app);
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Sort history: Ascending"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Go to move #2 (1, 1)"));
    }

    #[test]
    fn test_winning_cells_are_red() {
        let mut app = App::new(SortOrder::Ascending);
        for key in ['1', '2', '4', '5', '7'] {
            app.handle_key(KeyCode::Char(key));
        }

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        let red_x = buffer
            .content
            .iter()
            .filter(|cell| cell.symbol() == "X" && cell.fg == Color::Red)
            .count();
        assert_eq!(red_x, 3);
        assert!(render(&app).contains("Winner: X"));
    }
}
