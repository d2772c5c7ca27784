//! Terminal abstraction layer.
//!
//! Raw mode, screen setup/teardown and frame presentation for the
//! interactive frontend, plus the color-scheme capability panels query.

mod raw;
mod scheme;

pub use raw::{RawModeGuard, enable_raw_mode, is_tty, terminal_size};
pub use scheme::{COLORFGBG_VAR, ColorScheme, EnvColorScheme, SCHEME_OVERRIDE_VAR};

use crate::ansi::{AnsiWriter, sequences};
use crate::buffer::Canvas;
use std::io::{self, Write};

/// Terminal state manager.
///
/// Owns the output writer; [`Terminal::enter`] switches to the alternate
/// screen with mouse tracking and [`Terminal::leave`] (or drop) undoes it.
pub struct Terminal<W: Write> {
    writer: AnsiWriter<W>,
    active: bool,
    raw_mode_guard: Option<RawModeGuard>,
}

impl<W: Write> Terminal<W> {
    /// Create a new terminal with the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: AnsiWriter::new(writer),
            active: false,
            raw_mode_guard: None,
        }
    }

    /// Check if terminal is in raw mode.
    #[must_use]
    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode_guard.is_some()
    }

    /// Whether the alternate screen is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enter raw mode on stdin.
    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        if self.raw_mode_guard.is_none() {
            self.raw_mode_guard = Some(enable_raw_mode()?);
        }
        Ok(())
    }

    /// Switch to the alternate screen, hide the cursor and enable mouse
    /// tracking.
    pub fn enter(&mut self) -> io::Result<()> {
        if !self.active {
            self.writer.write_str(&sequences::enter_screen());
            self.writer.flush()?;
            self.active = true;
        }
        Ok(())
    }

    /// Draw a full frame.
    pub fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        self.writer.render_canvas(canvas);
        self.writer.flush()
    }

    /// Restore the screen and leave raw mode.
    pub fn leave(&mut self) -> io::Result<()> {
        if self.active {
            self.writer.write_str(&sequences::leave_screen());
            self.writer.flush()?;
            self.active = false;
        }
        self.raw_mode_guard = None;
        Ok(())
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
