//! Mouse event types.

/// Mouse button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Right,
    /// No button (for move events).
    None,
}

/// Kind of mouse event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Button pressed.
    Press,
    /// Button released.
    Release,
    /// Pointer moved (with or without a button held).
    Move,
    /// Scroll wheel up.
    ScrollUp,
    /// Scroll wheel down.
    ScrollDown,
}

/// A mouse event with 0-based cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    /// X position (column).
    pub x: u32,
    /// Y position (row).
    pub y: u32,
    /// Button involved.
    pub button: MouseButton,
    /// Kind of event.
    pub kind: MouseEventKind,
}

impl MouseEvent {
    /// Create a new mouse event.
    #[must_use]
    pub const fn new(x: u32, y: u32, button: MouseButton, kind: MouseEventKind) -> Self {
        Self { x, y, button, kind }
    }

    /// Create a press event.
    #[must_use]
    pub const fn press(x: u32, y: u32, button: MouseButton) -> Self {
        Self::new(x, y, button, MouseEventKind::Press)
    }

    /// Create a left-button click (press) event.
    #[must_use]
    pub const fn click(x: u32, y: u32) -> Self {
        Self::press(x, y, MouseButton::Left)
    }

    /// Create a release event.
    #[must_use]
    pub const fn release(x: u32, y: u32, button: MouseButton) -> Self {
        Self::new(x, y, button, MouseEventKind::Release)
    }

    /// Create a move event.
    #[must_use]
    pub const fn move_to(x: u32, y: u32) -> Self {
        Self::new(x, y, MouseButton::None, MouseEventKind::Move)
    }

    /// Check if this is a left-button press.
    #[must_use]
    pub fn is_left_press(&self) -> bool {
        self.kind == MouseEventKind::Press && self.button == MouseButton::Left
    }

    /// Check if this is a move event.
    #[must_use]
    pub fn is_move(&self) -> bool {
        self.kind == MouseEventKind::Move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_is_left_press() {
        let event = MouseEvent::click(10, 5);
        assert_eq!((event.x, event.y), (10, 5));
        assert!(event.is_left_press());
        assert!(!event.is_move());
    }

    #[test]
    fn test_right_press_is_not_left_press() {
        assert!(!MouseEvent::press(0, 0, MouseButton::Right).is_left_press());
        assert!(!MouseEvent::release(0, 0, MouseButton::Left).is_left_press());
    }

    #[test]
    fn test_move_to() {
        let event = MouseEvent::move_to(3, 4);
        assert!(event.is_move());
        assert_eq!(event.button, MouseButton::None);
    }
}
