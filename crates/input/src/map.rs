//! Key mapping from terminal events to shelf actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the shelf to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfAction {
    /// Activate the tab at this zero-based index.
    Activate(usize),
    Next,
    Prev,
    /// Hide the active tab and reset its game.
    Deactivate,
    Quit,
}

/// Map keyboard input to shelf actions.
///
/// Digits `1`-`9` pick a tab by position; key releases are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<ShelfAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(ShelfAction::Quit);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => Some(ShelfAction::Activate(c as usize - '1' as usize)),

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(ShelfAction::Prev),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(ShelfAction::Next)
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(ShelfAction::Prev)
        }

        KeyCode::Esc => Some(ShelfAction::Deactivate),

        _ => None,
    }
}

/// Check if key should quit the shelf.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
