//! End-to-end play through the front end's public surface.

use crossterm::event::KeyCode;
use strictly_timetravel::{Player, SortOrder, Status};
use strictly_timetravel_tui::{App, Focus, OutputFormat, parse_moves, run_replay};

#[test]
fn test_keyboard_game_with_time_travel() {
    let mut app = App::new(SortOrder::Ascending);

    // X: 1, O: 2, X: 4, O: 5
    for key in ['1', '2', '4', '5'] {
        app.handle_key(KeyCode::Char(key));
    }

    // Back to after X's second move, then X takes the bottom-left instead
    app.handle_key(KeyCode::Tab);
    assert_eq!(app.focus(), Focus::History);
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.session().current_step(), 2);
    assert_eq!(app.view().status(), &Status::NextPlayer(Player::X));

    app.handle_key(KeyCode::Char('7'));
    assert_eq!(app.session().history().len(), 4);
    assert_eq!(app.view().status(), &Status::NextPlayer(Player::O));

    // O takes the centre, X completes the left column
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('4'));
    assert_eq!(app.view().status(), &Status::Winner(Player::X));
    assert_eq!(app.view().highlighted().len(), 3);

    // Further moves are ignored
    app.handle_key(KeyCode::Char('3'));
    assert_eq!(app.session().history().len(), 6);
    assert_eq!(app.notice(), Some("Game is already over"));
}

#[test]
fn test_replay_matches_keyboard_play() {
    let moves = parse_moves("0,1,3,4,6").unwrap();
    let text = run_replay(&moves, Some(4), SortOrder::Ascending, OutputFormat::Text).unwrap();

    assert!(text.contains("Next player: X"));
    assert!(!text.contains("Winning line"));
    assert!(text.contains("> 4. Go to move #4 (1, 1)"));
}
