//! Text drawing operations.

use crate::buffer::Canvas;
use crate::cell::{Cell, CellContent};
use crate::color::Rgba;
use crate::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in columns.
#[must_use]
pub fn text_width(text: &str) -> u32 {
    text.graphemes(true)
        .map(|g| g.width().max(usize::from(!g.chars().all(char::is_control))))
        .sum::<usize>() as u32
}

impl Canvas {
    /// Draw text at a position, handling grapheme clusters and wide characters.
    ///
    /// Text is composited over existing cells, so a style without a
    /// background keeps the backdrop visible. Returns the column after the
    /// last drawn grapheme. Line breaks are skipped.
    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, style: Style) -> u32 {
        let fg = style.fg.unwrap_or(Rgba::WHITE);
        let bg = style.bg.unwrap_or(Rgba::TRANSPARENT);
        let mut col = x;

        for grapheme in text.graphemes(true) {
            if grapheme == "\n" || grapheme == "\r" || grapheme == "\r\n" {
                continue;
            }
            let Some(base) = grapheme.chars().next() else {
                continue;
            };
            let width = grapheme.width().max(1) as u32;

            let cell = Cell {
                content: CellContent::Char(base),
                fg,
                bg,
                attributes: style.attributes,
            };
            self.set_blended(col, y, cell);
            for i in 1..width {
                self.set_blended(col + i, y, Cell::continuation(bg));
            }
            col += width;
        }
        col
    }

    /// Draw text right-aligned so that it ends at column `right` (exclusive).
    ///
    /// Text wider than the space to the left is clipped at column 0.
    pub fn draw_text_right(&mut self, right: u32, y: u32, text: &str, style: Style) {
        let width = text_width(text);
        if width <= right {
            self.draw_text(right - width, y, text, style);
        } else {
            let skip = width - right;
            let mut skipped = 0;
            let visible: String = text
                .graphemes(true)
                .skip_while(|g| {
                    if skipped >= skip {
                        return false;
                    }
                    skipped += g.width() as u32;
                    true
                })
                .collect();
            self.draw_text(0, y, &visible, style);
        }
    }
}
