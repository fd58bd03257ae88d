//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Re-run the fetch
    Refresh,

    // List navigation
    SelectPrev,
    SelectNext,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('r') => return Some(UiEvent::Refresh),
            _ => {}
        }
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') | KeyCode::F(5) => Some(UiEvent::Refresh),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_refresh_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('r')), false), Some(UiEvent::Refresh));
        assert_eq!(key_to_ui_event(press(KeyCode::F(5)), false), Some(UiEvent::Refresh));
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('r')), true), Some(UiEvent::CloseHelp));
        assert_eq!(
            key_to_ui_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), true),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn test_ignores_release_events() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, false), None);
    }
}
