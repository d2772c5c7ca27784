//! Terminal cell type representing a single character position.
//!
//! A frame is a grid of cells, each holding one character with its colors and
//! attributes. Wide characters (CJK, emoji) occupy two columns: the cell after
//! them holds [`CellContent::Continuation`].
//!
//! # Examples
//!
//! ```
//! use experience_panel::{Cell, Rgba, Style};
//!
//! let cell = Cell::new('A', Style::fg(Rgba::GREEN));
//! assert_eq!(cell.display_width(), 1);
//!
//! let wide = Cell::new('語', Style::NONE);
//! assert_eq!(wide.display_width(), 2);
//! ```

use crate::color::Rgba;
use crate::style::{Style, TextAttributes};
use unicode_width::UnicodeWidthChar;

/// Content of a terminal cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellContent {
    /// A visible character.
    ///
    /// Multi-codepoint grapheme clusters are stored by their base character;
    /// the width used for layout is the width of the whole cluster.
    Char(char),
    /// Empty/cleared cell; renders as a space.
    #[default]
    Empty,
    /// Continuation of a wide character from the previous cell.
    Continuation,
}

impl CellContent {
    /// Display width in columns.
    #[must_use]
    pub fn display_width(&self) -> usize {
        match self {
            Self::Char(c) => c.width().unwrap_or(0).max(1),
            Self::Empty => 1,
            Self::Continuation => 0,
        }
    }

    /// Character to emit when writing the cell, `None` for continuations.
    #[must_use]
    pub fn glyph(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            Self::Empty => Some(' '),
            Self::Continuation => None,
        }
    }

    /// Whether the cell carries visible text (anything but space/empty).
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Char(c) if !c.is_whitespace())
    }
}

/// A single cell with content and styling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    /// The character content.
    pub content: CellContent,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Cell {
    /// Create a new cell with a single character.
    #[must_use]
    pub fn new(ch: char, style: Style) -> Self {
        Self {
            content: CellContent::Char(ch),
            fg: style.fg.unwrap_or(Rgba::WHITE),
            bg: style.bg.unwrap_or(Rgba::TRANSPARENT),
            attributes: style.attributes,
        }
    }

    /// Create a cleared cell with the specified background.
    #[must_use]
    pub fn clear(bg: Rgba) -> Self {
        Self {
            content: CellContent::Empty,
            fg: Rgba::WHITE,
            bg,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a continuation cell (placeholder for wide characters).
    #[must_use]
    pub fn continuation(bg: Rgba) -> Self {
        Self {
            content: CellContent::Continuation,
            fg: Rgba::WHITE,
            bg,
            attributes: TextAttributes::empty(),
        }
    }

    /// Display width of this cell.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.content.display_width()
    }

    /// Check if this is a continuation cell.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        self.content == CellContent::Continuation
    }

    /// Composite `self` over `below`.
    ///
    /// Colors blend with Porter-Duff "over". A cell without visible text
    /// keeps the glyph underneath, so a translucent fill tints text rather
    /// than erasing it.
    #[must_use]
    pub fn blend_over(self, below: Self) -> Self {
        let bg = self.bg.blend_over(below.bg);
        if self.content == CellContent::Empty {
            return Self {
                content: below.content,
                fg: self.bg.blend_over(below.fg),
                bg,
                attributes: below.attributes,
            };
        }
        Self {
            content: self.content,
            fg: self.fg.blend_over(bg),
            bg,
            attributes: self.attributes,
        }
    }
}
