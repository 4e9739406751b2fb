//! Platform-agnostic input event types.
//!
//! The backend maps its native input to these enums. The shell never sees
//! raw platform input.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute position.
    CursorMove { x: i32, y: i32 },
    /// Pointer pressed at absolute position (mouse button or touch down).
    PointerDown { x: i32, y: i32 },
    /// Pointer released at absolute position.
    PointerUp { x: i32, y: i32 },
    /// A navigation button pressed.
    ButtonPress(Button),
    /// A navigation button released.
    ButtonRelease(Button),
    /// Character typed (physical keyboard).
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// The window gained focus.
    FocusGained,
    /// The window lost focus.
    FocusLost,
    /// User requested quit (window close, etc.).
    Quit,
}

/// Buttons that map across keyboards and remotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    /// Hardware home button equivalent.
    Home,
    /// Hardware app-switcher button equivalent.
    Overview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_down_event() {
        let e = InputEvent::PointerDown { x: 240, y: 136 };
        if let InputEvent::PointerDown { x, y } = e {
            assert_eq!(x, 240);
            assert_eq!(y, 136);
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn pointer_up_differs_from_down() {
        let down = InputEvent::PointerDown { x: 0, y: 0 };
        let up = InputEvent::PointerUp { x: 0, y: 0 };
        assert_ne!(down, up);
    }

    #[test]
    fn button_press_all_variants() {
        let buttons = [
            Button::Up,
            Button::Down,
            Button::Left,
            Button::Right,
            Button::Confirm,
            Button::Cancel,
            Button::Home,
            Button::Overview,
        ];
        for btn in buttons {
            let e = InputEvent::ButtonPress(btn);
            assert_eq!(e, InputEvent::ButtonPress(btn));
        }
    }

    #[test]
    fn button_release_differs_from_press() {
        let press = InputEvent::ButtonPress(Button::Home);
        let release = InputEvent::ButtonRelease(Button::Home);
        assert_ne!(press, release);
    }

    #[test]
    fn text_input_unicode() {
        let e = InputEvent::TextInput('\u{e9}');
        if let InputEvent::TextInput(ch) = e {
            assert_eq!(ch, '\u{e9}');
        }
    }

    #[test]
    fn focus_and_quit_events() {
        assert_eq!(InputEvent::FocusGained, InputEvent::FocusGained);
        assert_ne!(InputEvent::FocusGained, InputEvent::FocusLost);
        assert_ne!(InputEvent::FocusLost, InputEvent::Quit);
    }

    #[test]
    fn button_hash_distinct() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Button::Home);
        set.insert(Button::Overview);
        set.insert(Button::Home);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn input_event_clone() {
        let e = InputEvent::CursorMove { x: 42, y: 99 };
        assert_eq!(e, e.clone());
    }
}
