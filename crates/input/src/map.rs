//! Key mapping from terminal events to game input.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move the keyboard cursor.
    Cursor(Direction),
    /// Flip the tile under the cursor (or play again from the win summary).
    Flip,
    /// A control that maps straight onto the game.
    Game(GameAction),
}

/// Map keyboard input to input actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputAction::Cursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputAction::Cursor(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputAction::Cursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputAction::Cursor(Direction::Down))
        }

        // Flip
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputAction::Flip),

        // Board size
        KeyCode::Char('2') => Some(InputAction::Game(GameAction::SetSize(2))),
        KeyCode::Char('4') => Some(InputAction::Game(GameAction::SetSize(4))),
        KeyCode::Char('6') => Some(InputAction::Game(GameAction::SetSize(6))),
        KeyCode::Tab => Some(InputAction::Game(GameAction::CycleSize)),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Game(GameAction::Restart)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
