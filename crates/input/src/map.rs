//! Key mapping from terminal events to tray commands.

use crate::types::TrayAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to tray commands.
///
/// The digits follow the on-screen menu order; the letters are mnemonics
/// for the same commands (play, reserve, use, swap, triple swap).
pub fn handle_key_event(key: KeyEvent) -> Option<TrayAction> {
    match key.code {
        KeyCode::Char('1') | KeyCode::Char('p') | KeyCode::Char('P') => Some(TrayAction::Play),
        KeyCode::Char('2') | KeyCode::Char('r') | KeyCode::Char('R') => Some(TrayAction::Reserve),
        KeyCode::Char('3') | KeyCode::Char('u') | KeyCode::Char('U') => Some(TrayAction::Recall),
        KeyCode::Char('4') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(TrayAction::SwapFrontTop)
        }
        KeyCode::Char('5') | KeyCode::Char('t') | KeyCode::Char('T') => {
            Some(TrayAction::SwapThree)
        }
        _ => None,
    }
}

/// Check if key should end the session.
///
/// `0` mirrors the menu's exit entry; `q` and `Esc` are the usual terminal
/// exits, and Ctrl-C is honored even in raw mode.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
