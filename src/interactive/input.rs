//! Key decoding for the TUI
//!
//! Turns raw crossterm key events into the game's inbound actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Lowercase ASCII letter
    Letter(char),
    Backspace,
    Submit,
    Quit,
}

/// Decode a key event, or `None` if the key means nothing to the game
///
/// Letters typed with Alt, Ctrl or Super held are shortcuts, not input.
/// Once the game is over `q` quits as well as Esc.
#[must_use]
pub fn decode_key(key: KeyEvent, game_over: bool) -> Option<Action> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if key
        .modifiers
        .intersects(KeyModifiers::ALT | KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
    {
        return None;
    }

    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(Action::Backspace),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('q' | 'Q') if game_over => Some(Action::Quit),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::Letter(c.to_ascii_lowercase())),
        _ => None,
    }
}
