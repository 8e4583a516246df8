//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a game command.
///
/// Every key press maps to a command; keys without a binding become
/// [`Command::AnyKey`] (used to dismiss the help screen). Release events
/// return `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let command = match key.code {
        // Movement
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Down => Command::SoftDrop,

        // Rotation
        KeyCode::Up | KeyCode::Char('z') | KeyCode::Char('Z') => Command::RotateCw,
        KeyCode::Char('x') | KeyCode::Char('X') => Command::RotateCcw,

        // Actions
        KeyCode::Char(' ') | KeyCode::Char('c') | KeyCode::Char('C') => Command::HardDrop,
        KeyCode::Char('v') | KeyCode::Char('V') => Command::Hold,
        KeyCode::Esc => Command::Pause,

        _ => Command::AnyKey,
    };
    Some(command)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key asks to reset the stored high score (help screen only).
pub fn is_reset_high_score(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
