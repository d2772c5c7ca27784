//! Buffered ANSI output writer with state tracking.

use crate::ansi;
use crate::buffer::Canvas;
use crate::cell::{Cell, CellContent};
use crate::color::Rgba;
use crate::style::TextAttributes;
use std::io::{self, Write};

/// SGR codes that switch an attribute off. BOLD and DIM share code 22.
const ATTRIBUTE_OFF: [(TextAttributes, &str); 7] = [
    (TextAttributes::BOLD, "22"),
    (TextAttributes::DIM, "22"),
    (TextAttributes::ITALIC, "23"),
    (TextAttributes::UNDERLINE, "24"),
    (TextAttributes::INVERSE, "27"),
    (TextAttributes::HIDDEN, "28"),
    (TextAttributes::STRIKETHROUGH, "29"),
];

/// Buffered writer that tracks ANSI state to minimize escape sequences.
pub struct AnsiWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,

    // Current state for delta encoding
    current_fg: Option<Rgba>,
    current_bg: Option<Rgba>,
    current_attrs: TextAttributes,

    // Cursor position
    cursor_row: u32,
    cursor_col: u32,
}

impl<W: Write> AnsiWriter<W> {
    /// Create a new ANSI writer wrapping the given output.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(8192),
            current_fg: None,
            current_bg: None,
            current_attrs: TextAttributes::empty(),
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Move the cursor to a 0-based position.
    pub fn move_cursor(&mut self, row: u32, col: u32) {
        if row == self.cursor_row && col == self.cursor_col {
            return;
        }
        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
        self.cursor_row = row;
        self.cursor_col = col;
    }

    /// Set foreground color if different from current.
    pub fn set_fg(&mut self, color: Rgba) {
        if self.current_fg != Some(color) {
            let _ = ansi::write_fg_color(&mut self.buffer, color);
            self.current_fg = Some(color);
        }
    }

    /// Set background color if different from current.
    pub fn set_bg(&mut self, color: Rgba) {
        if self.current_bg != Some(color) {
            let _ = ansi::write_bg_color(&mut self.buffer, color);
            self.current_bg = Some(color);
        }
    }

    /// Set text attributes, only writing changes.
    pub fn set_attributes(&mut self, attrs: TextAttributes) {
        if self.current_attrs == attrs {
            return;
        }

        let removed = self.current_attrs - attrs;
        if !removed.is_empty() {
            let mut codes: Vec<&str> = ATTRIBUTE_OFF
                .iter()
                .filter(|(flag, _)| removed.contains(*flag))
                .map(|(_, code)| *code)
                .collect();
            codes.dedup();

            self.buffer.extend_from_slice(b"\x1b[");
            for (i, code) in codes.iter().enumerate() {
                if i > 0 {
                    self.buffer.push(b';');
                }
                self.buffer.extend_from_slice(code.as_bytes());
            }
            self.buffer.push(b'm');

            // Code 22 clears both BOLD and DIM
            self.current_attrs -= removed;
            if removed.intersects(TextAttributes::BOLD | TextAttributes::DIM) {
                self.current_attrs -= TextAttributes::BOLD | TextAttributes::DIM;
            }
        }

        let to_add = attrs - self.current_attrs;
        let _ = ansi::write_attributes(&mut self.buffer, to_add);
        self.current_attrs = attrs;
    }

    /// Write a cell at the current cursor position.
    pub fn write_cell(&mut self, cell: &Cell) {
        self.set_attributes(cell.attributes);
        self.set_fg(cell.fg);
        self.set_bg(cell.bg);

        match cell.content {
            CellContent::Char(c) => {
                let mut buf = [0u8; 4];
                self.buffer
                    .extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
            CellContent::Empty => self.buffer.push(b' '),
            CellContent::Continuation => {}
        }

        self.cursor_col += cell.display_width() as u32;
    }

    /// Queue a full repaint of `canvas`, row by row from the home position.
    ///
    /// Every row is addressed absolutely, so wide glyphs that a terminal
    /// measures differently cannot shift the following rows.
    pub fn render_canvas(&mut self, canvas: &Canvas) {
        // Force an explicit move to the first row
        self.cursor_row = u32::MAX;
        for y in 0..canvas.height() {
            self.move_cursor(y, 0);
            for x in 0..canvas.width() {
                if let Some(cell) = canvas.get(x, y) {
                    if !cell.is_continuation() {
                        self.write_cell(cell);
                    }
                }
            }
        }
        self.write_str(ansi::RESET);
        self.current_fg = None;
        self.current_bg = None;
        self.current_attrs = TextAttributes::empty();
    }

    /// Bytes queued but not yet flushed.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Flush the buffer to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            self.writer.write_all(&self.buffer)?;
            self.buffer.clear();
        }
        self.writer.flush()
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}
