//! Constant ANSI escape sequences.

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Clear entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Move cursor to home position (1,1).
pub const CURSOR_HOME: &str = "\x1b[H";

/// Enable alternative screen buffer.
pub const ALT_SCREEN_ON: &str = "\x1b[?1049h";

/// Disable alternative screen buffer.
pub const ALT_SCREEN_OFF: &str = "\x1b[?1049l";

/// Enable mouse tracking (all motion, SGR encoding).
pub const MOUSE_ON: &str = "\x1b[?1003h\x1b[?1006h";

/// Disable mouse tracking.
pub const MOUSE_OFF: &str = "\x1b[?1003l\x1b[?1006l";

/// Sequence entering the interactive screen: alt screen, hidden cursor, mouse.
#[must_use]
pub fn enter_screen() -> String {
    format!("{ALT_SCREEN_ON}{CURSOR_HIDE}{MOUSE_ON}{CLEAR_SCREEN}")
}

/// Sequence restoring the terminal after [`enter_screen`].
#[must_use]
pub fn leave_screen() -> String {
    format!("{MOUSE_OFF}{RESET}{CURSOR_SHOW}{ALT_SCREEN_OFF}")
}
