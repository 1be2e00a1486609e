use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ReverseDirection,
    /// Shorter loop duration
    Faster,
    Slower,
    Wider,
    Narrower,
    TogglePauseOnHover,
    ToggleBlur,
    /// Manual pause/resume, independent of hover
    TogglePlayback,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::ReverseDirection,
        (KeyCode::Left, _) | (KeyCode::Right, _) => Action::ReverseDirection,

        // '+' arrives with SHIFT on most layouts
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => Action::Faster,
        (KeyCode::Char('-'), KeyModifiers::NONE) => Action::Slower,

        (KeyCode::Char(']'), KeyModifiers::NONE) => Action::Wider,
        (KeyCode::Char('['), KeyModifiers::NONE) => Action::Narrower,

        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::TogglePauseOnHover,
        (KeyCode::Char('b'), KeyModifiers::NONE) => Action::ToggleBlur,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::TogglePlayback,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_speed_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            Action::Faster
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('='))), Action::Faster);
        assert_eq!(handle_key_event(key(KeyCode::Char('-'))), Action::Slower);
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(handle_key_event(key(KeyCode::Char('z'))), Action::None);
    }
}
