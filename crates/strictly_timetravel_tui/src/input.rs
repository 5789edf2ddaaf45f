//! Key handling helpers for board and history navigation.

use crossterm::event::KeyCode;
use strictly_timetravel::Position;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (col, row) = (cursor.column(), cursor.row());
    let (col, row) = match key {
        KeyCode::Left => (col.saturating_sub(1), row),
        KeyCode::Right => ((col + 1).min(2), row),
        KeyCode::Up => (col, row.saturating_sub(1)),
        KeyCode::Down => (col, (row + 1).min(2)),
        _ => (col, row),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps digit keys `1`-`9` to the cell they label on screen.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}

/// Moves a list selection up or down within `len` rows.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down => (selected + 1).min(len.saturating_sub(1)),
        KeyCode::Home => 0,
        KeyCode::End => len.saturating_sub(1),
        _ => selected,
    }
}
