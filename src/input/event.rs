//! Terminal event types.

use crate::input::mouse::MouseEvent;

/// A key press the frontend cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Enter / carriage return.
    Enter,
    /// Escape pressed on its own.
    Esc,
    /// Ctrl+<letter>, stored lower-case.
    Ctrl(char),
    /// Backspace.
    Backspace,
}

/// A terminal input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event.
    Key(Key),
    /// Mouse event.
    Mouse(MouseEvent),
}

impl Event {
    /// Get the mouse event if this is one.
    #[must_use]
    pub fn mouse(&self) -> Option<&MouseEvent> {
        match self {
            Self::Mouse(e) => Some(e),
            Self::Key(_) => None,
        }
    }

    /// Get the key if this is one.
    #[must_use]
    pub fn key(&self) -> Option<Key> {
        match self {
            Self::Key(k) => Some(*k),
            Self::Mouse(_) => None,
        }
    }

    /// Whether this is a request to quit (`q`, Ctrl+C or Esc).
    #[must_use]
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            Self::Key(Key::Char('q') | Key::Ctrl('c') | Key::Esc)
        )
    }
}

impl From<MouseEvent> for Event {
    fn from(e: MouseEvent) -> Self {
        Self::Mouse(e)
    }
}

impl From<Key> for Event {
    fn from(k: Key) -> Self {
        Self::Key(k)
    }
}
