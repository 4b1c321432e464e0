//! Terminal key handling: every device-specific key collapses into one
//! [`AppAction`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic commands for the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Jump,         // Space or Up arrow
    TryAgain,     // Enter or T, only while the try-again control is shown
    StopSession,  // S
    ResetSession, // R
    Quit,         // Q, Esc, Ctrl+C
}

/// Map a key press to an action. Releases and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<AppAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppAction::Quit);
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(AppAction::Jump),
        KeyCode::Enter | KeyCode::Char('t') | KeyCode::Char('T') => Some(AppAction::TryAgain),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(AppAction::StopSession),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(AppAction::ResetSession),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(AppAction::Quit),
        _ => None,
    }
}
