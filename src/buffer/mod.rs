//! Cell-based frame canvas with alpha blending and scissoring.
//!
//! [`Canvas`] is the drawing surface every panel renders into. It supports:
//!
//! - **Basic drawing**: set cells, fill rectangles, draw text
//! - **Scissor clipping**: restrict drawing to rectangular regions
//! - **Alpha blending**: composite cells using Porter-Duff "over"
//! - **Images**: half-block rendering of [`PixelBuffer`]s
//! - **Filters**: the backdrop and text blurs of hover cards
//!
//! # Examples
//!
//! ```
//! use experience_panel::buffer::{Canvas, Rect};
//! use experience_panel::{Rgba, Style};
//!
//! let mut canvas = Canvas::new(40, 10);
//! canvas.clear(Rgba::BLACK);
//!
//! canvas.push_scissor(Rect::new(0, 0, 5, 10));
//! canvas.draw_text(0, 0, "clipped after five", Style::fg(Rgba::GREEN));
//! canvas.pop_scissor();
//!
//! assert_eq!(canvas.row_text(0).trim_end(), "clipp");
//! ```

mod blur;
mod drawing;
mod pixel;
mod scissor;

pub use blur::{BlurFilter, TEXT_BLUR_GLYPHS};
pub use drawing::text_width;
pub use pixel::PixelBuffer;
pub use scissor::{Rect, ScissorStack};

use crate::cell::{Cell, CellContent};
use crate::color::Rgba;
use crate::error::{Error, Result};

/// Cell grid for one frame.
///
/// Coordinates are (x, y) with (0, 0) at the top-left. Every drawing
/// operation respects the scissor stack.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    scissor_stack: ScissorStack,
}

impl Canvas {
    /// Create a new canvas. Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::clear(Rgba::TRANSPARENT); size],
            scissor_stack: ScissorStack::new(),
        }
    }

    /// Create a canvas, rejecting zero dimensions instead of clamping.
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self::new(width, height))
    }

    /// Canvas dimensions.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Canvas width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full canvas as a rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row_offset = (y as usize).checked_mul(self.width as usize)?;
        row_offset.checked_add(x as usize)
    }

    /// Get cell at position.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cell_index(x, y).map(|idx| &self.cells[idx])
    }

    /// Get mutable cell at position. Ignores the scissor stack.
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Cell> {
        self.cell_index(x, y).map(|idx| &mut self.cells[idx])
    }

    fn is_visible(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.scissor_stack.contains(x, y)
    }

    /// Replace the cell at a position.
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        if !self.is_visible(x, y) {
            return;
        }
        if let Some(idx) = self.cell_index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Composite a cell over whatever is already at the position.
    pub fn set_blended(&mut self, x: u32, y: u32, cell: Cell) {
        if !self.is_visible(x, y) {
            return;
        }
        if let Some(idx) = self.cell_index(x, y) {
            self.cells[idx] = cell.blend_over(self.cells[idx]);
        }
    }

    /// Reset every cell to a cleared cell with the given background.
    pub fn clear(&mut self, bg: Rgba) {
        self.cells.fill(Cell::clear(bg));
    }

    /// Fill a rectangle with a background color, blending when translucent.
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgba) {
        let Some(rect) = rect.intersect(&self.bounds()) else {
            return;
        };
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if bg.is_opaque() {
                    self.set(x, y, Cell::clear(bg));
                } else {
                    self.set_blended(x, y, Cell::clear(bg));
                }
            }
        }
    }

    /// Push a clipping rectangle.
    pub fn push_scissor(&mut self, rect: Rect) {
        self.scissor_stack.push(rect);
    }

    /// Pop the innermost clipping rectangle.
    pub fn pop_scissor(&mut self) {
        self.scissor_stack.pop();
    }

    /// Resize the canvas, discarding its contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Text of one row, continuation cells skipped.
    #[must_use]
    pub fn row_text(&self, y: u32) -> String {
        let mut out = String::with_capacity(self.width as usize);
        for x in 0..self.width {
            if let Some(ch) = self.get(x, y).and_then(|cell| cell.content.glyph()) {
                out.push(ch);
            }
        }
        out
    }

    /// Whole canvas as plain text, one line per row, trailing spaces trimmed.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Find the first occurrence of `needle` on any row.
    ///
    /// Returns the (column, row) of its first cell. Rows are compared by
    /// glyph, so the column accounts for wide characters.
    #[must_use]
    pub fn find_text(&self, needle: &str) -> Option<(u32, u32)> {
        for y in 0..self.height {
            let mut glyphs = Vec::with_capacity(self.width as usize);
            for x in 0..self.width {
                if let Some(cell) = self.get(x, y) {
                    if let Some(ch) = cell.content.glyph() {
                        glyphs.push((x, ch));
                    }
                }
            }
            let row: String = glyphs.iter().map(|(_, ch)| ch).collect();
            if let Some(byte_idx) = row.find(needle) {
                let char_idx = row[..byte_idx].chars().count();
                return glyphs.get(char_idx).map(|(x, _)| (*x, y));
            }
        }
        None
    }

    /// Iterate over the cells of a region that hold a character.
    pub fn text_cells(&self, rect: Rect) -> impl Iterator<Item = (u32, u32, &Cell)> {
        let rect = rect.intersect(&self.bounds()).unwrap_or_default();
        (rect.y..rect.bottom())
            .flat_map(move |y| (rect.x..rect.right()).map(move |x| (x, y)))
            .filter_map(move |(x, y)| self.get(x, y).map(|cell| (x, y, cell)))
            .filter(|(_, _, cell)| matches!(cell.content, CellContent::Char(_)))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
