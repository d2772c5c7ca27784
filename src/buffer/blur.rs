//! Blur filters for layered cards.
//!
//! Two filters exist because a terminal cannot blur arbitrary pixels:
//!
//! - the **backdrop blur** box-averages colors of the cells under a region,
//!   treating half-block cells as two stacked pixels;
//! - the **text blur** replaces glyphs with shade characters and fades their
//!   color, so text is recognisable as text but unreadable.

use std::fmt;

use crate::buffer::{Canvas, Rect};
use crate::cell::{Cell, CellContent};
use crate::color::Rgba;
use crate::style::TextAttributes;

/// Shade glyphs used by the text blur: light for strong blurs, medium otherwise.
pub const TEXT_BLUR_GLYPHS: [char; 2] = ['░', '▒'];

/// Approximate width of one terminal cell in CSS pixels.
const CELL_PX: u16 = 8;

/// A blur filter value.
///
/// Displays in CSS filter syntax: `none` or `blur(16px)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlurFilter {
    /// No filtering.
    #[default]
    None,
    /// Gaussian-like blur of the given radius in CSS pixels.
    Blur { px: u16 },
}

impl BlurFilter {
    /// Blur with the given radius; a radius of 0 is [`BlurFilter::None`].
    #[must_use]
    pub const fn px(px: u16) -> Self {
        if px == 0 { Self::None } else { Self::Blur { px } }
    }

    /// Whether the filter leaves content untouched.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Blur radius in cells (at least 1 for any non-zero blur).
    #[must_use]
    pub const fn radius_cells(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Blur { px } => px.div_ceil(CELL_PX) as u32,
        }
    }
}

impl fmt::Display for BlurFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Blur { px } => write!(f, "blur({px}px)"),
        }
    }
}

impl Canvas {
    /// Blur the colors underneath `rect`.
    ///
    /// Glyphs are kept; only colors are averaged. Half-block cells (`'▀'`)
    /// contribute their foreground as the upper pixel.
    pub fn apply_backdrop_blur(&mut self, rect: Rect, filter: BlurFilter) {
        let radius = filter.radius_cells();
        let Some(rect) = rect.intersect(&self.bounds()) else {
            return;
        };
        if radius == 0 {
            return;
        }

        let w = rect.width as usize;
        let h = rect.height as usize * 2;
        let mut pixels = Vec::with_capacity(w * h);
        for py in 0..h {
            for col in 0..rect.width {
                let cell = self
                    .get(rect.x + col, rect.y + (py / 2) as u32)
                    .copied()
                    .unwrap_or_default();
                let upper = py % 2 == 0;
                pixels.push(if upper && is_half_block(&cell) {
                    cell.fg
                } else {
                    cell.bg
                });
            }
        }

        let blurred = box_blur(&pixels, w, h, radius as usize);

        for row in 0..rect.height as usize {
            for col in 0..w {
                let upper = blurred[(row * 2) * w + col];
                let lower = blurred[(row * 2 + 1) * w + col];
                let (x, y) = (rect.x + col as u32, rect.y + row as u32);
                if let Some(cell) = self.get_mut(x, y) {
                    if is_half_block(cell) {
                        cell.fg = upper;
                        cell.bg = lower;
                    } else {
                        cell.bg = Rgba::average(&[upper, lower]);
                    }
                }
            }
        }
    }

    /// Obscure the text inside `rect`.
    ///
    /// Meant for a transparent text layer that is composited afterwards:
    /// every character cell becomes a faded shade glyph.
    pub fn apply_text_blur(&mut self, rect: Rect, filter: BlurFilter) {
        let radius = filter.radius_cells();
        let Some(rect) = rect.intersect(&self.bounds()) else {
            return;
        };
        if radius == 0 {
            return;
        }
        let glyph = if radius >= 2 {
            TEXT_BLUR_GLYPHS[0]
        } else {
            TEXT_BLUR_GLYPHS[1]
        };
        let fade = 1.0 / (radius as f32 + 1.0);

        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let Some(cell) = self.get_mut(x, y) else {
                    continue;
                };
                let obscure = match cell.content {
                    CellContent::Char(ch) => !ch.is_whitespace(),
                    CellContent::Continuation => true,
                    CellContent::Empty => false,
                };
                if obscure {
                    cell.content = CellContent::Char(glyph);
                    cell.fg = cell.fg.with_alpha(cell.fg.a * fade);
                    cell.attributes = TextAttributes::empty();
                }
            }
        }
    }

    /// Composite another canvas onto this one with its origin at `(x, y)`.
    ///
    /// Cleared transparent cells of `layer` leave the content below intact.
    pub fn composite(&mut self, x: u32, y: u32, layer: &Self) {
        for row in 0..layer.height() {
            for col in 0..layer.width() {
                if let Some(cell) = layer.get(col, row) {
                    self.set_blended(x + col, y + row, *cell);
                }
            }
        }
    }
}

fn is_half_block(cell: &Cell) -> bool {
    cell.content == CellContent::Char('▀')
}

/// Separable box blur with edge clamping.
fn box_blur(pixels: &[Rgba], w: usize, h: usize, radius: usize) -> Vec<Rgba> {
    let mut horizontal = Vec::with_capacity(pixels.len());
    for y in 0..h {
        for x in 0..w {
            let lo = x.saturating_sub(radius);
            let hi = (x + radius).min(w - 1);
            horizontal.push(Rgba::average(&pixels[y * w + lo..=y * w + hi]));
        }
    }

    let mut out = Vec::with_capacity(pixels.len());
    let mut column = Vec::with_capacity(2 * radius + 1);
    for y in 0..h {
        let lo = y.saturating_sub(radius);
        let hi = (y + radius).min(h - 1);
        for x in 0..w {
            column.clear();
            column.extend((lo..=hi).map(|yy| horizontal[yy * w + x]));
            out.push(Rgba::average(&column));
        }
    }
    out
}
