//! Pixel images drawn with half-block characters.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `'▀'`, the lower one as the cell background. Images are
//! scaled to the target rectangle with nearest-neighbour sampling.

use crate::buffer::{Canvas, Rect};
use crate::cell::Cell;
use crate::color::Rgba;
use crate::style::Style;

const UPPER_HALF: char = '▀';

/// A 2D pixel raster.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Create a buffer filled with transparent black.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a buffer filled with one color.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            pixels: vec![color; size],
        }
    }

    /// Create from row-major pixel data; `None` if the length does not match.
    #[must_use]
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Vertical gradient from `top` to `bottom`.
    #[must_use]
    pub fn vertical_gradient(width: u32, height: u32, top: Rgba, bottom: Rgba) -> Self {
        let mut buffer = Self::new(width, height);
        let span = height.saturating_sub(1).max(1) as f32;
        for y in 0..height {
            let color = top.lerp(bottom, y as f32 / span);
            for x in 0..width {
                buffer.set(x, y, color);
            }
        }
        buffer
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row_offset = (y as usize).checked_mul(self.width as usize)?;
        row_offset.checked_add(x as usize)
    }

    /// Get pixel at (x, y).
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        self.pixel_index(x, y).map(|idx| self.pixels[idx])
    }

    /// Set pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Nearest-neighbour sample for a target raster of `target_w` x `target_h`.
    fn sample(&self, tx: u32, ty: u32, target_w: u32, target_h: u32) -> Rgba {
        if self.width == 0 || self.height == 0 || target_w == 0 || target_h == 0 {
            return Rgba::TRANSPARENT;
        }
        let sx = (u64::from(tx) * u64::from(self.width) / u64::from(target_w)) as u32;
        let sy = (u64::from(ty) * u64::from(self.height) / u64::from(target_h)) as u32;
        self.get(sx, sy).unwrap_or(Rgba::TRANSPARENT)
    }
}

impl Canvas {
    /// Draw an image scaled to fill `rect`.
    ///
    /// The image is composited over existing content, so transparent pixels
    /// let the cells below show through.
    pub fn draw_image(&mut self, rect: Rect, image: &PixelBuffer) {
        let target_w = rect.width;
        let target_h = rect.height.saturating_mul(2);
        for row in 0..rect.height {
            for col in 0..rect.width {
                let (x, y) = (rect.x + col, rect.y + row);
                let Some(below) = self.get(x, y).copied() else {
                    continue;
                };
                let upper = image
                    .sample(col, row * 2, target_w, target_h)
                    .blend_over(below.bg);
                let lower = image
                    .sample(col, row * 2 + 1, target_w, target_h)
                    .blend_over(below.bg);
                let cell = Cell::new(UPPER_HALF, Style::fg(upper).with_bg(lower));
                self.set(x, y, cell);
            }
        }
    }
}
