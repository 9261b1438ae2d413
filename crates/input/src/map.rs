//! Key mapping from terminal events to game and setup actions.

use crate::types::{GameAction, SetupAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a per-player game action.
///
/// Player 1 uses the arrow keys and Space; player 2 uses WASD and `e`
/// (terminals do not deliver a bare Shift press, so `e` stands in for the
/// second bomb key).
pub fn handle_key_event(key: KeyEvent) -> Option<(usize, GameAction)> {
    match key.code {
        // Player 1
        KeyCode::Left => Some((0, GameAction::MoveLeft)),
        KeyCode::Right => Some((0, GameAction::MoveRight)),
        KeyCode::Up => Some((0, GameAction::MoveUp)),
        KeyCode::Down => Some((0, GameAction::MoveDown)),
        KeyCode::Char(' ') => Some((0, GameAction::DropBomb)),

        // Player 2
        KeyCode::Char('a') | KeyCode::Char('A') => Some((1, GameAction::MoveLeft)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some((1, GameAction::MoveRight)),
        KeyCode::Char('w') | KeyCode::Char('W') => Some((1, GameAction::MoveUp)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some((1, GameAction::MoveDown)),
        KeyCode::Char('e') | KeyCode::Char('E') => Some((1, GameAction::DropBomb)),

        _ => None,
    }
}

/// Map keyboard input to a setup-screen action.
pub fn map_setup_key(key: KeyEvent) -> Option<SetupAction> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(SetupAction::Yes),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(SetupAction::No),
        KeyCode::Up => Some(SetupAction::MoveUp),
        KeyCode::Down => Some(SetupAction::MoveDown),
        KeyCode::Left => Some(SetupAction::MoveLeft),
        KeyCode::Right => Some(SetupAction::MoveRight),
        KeyCode::Char(' ') => Some(SetupAction::Toggle),
        KeyCode::Enter => Some(SetupAction::Confirm),
        KeyCode::Char(c @ '1'..='9') => Some(SetupAction::Assign(c as u8 - b'0')),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
