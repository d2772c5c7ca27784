//! RGBA color type with the blending operations panels need.
//!
//! Colors are floating-point RGBA in `[0.0, 1.0]`. Besides Porter-Duff
//! compositing, this module provides the averaging used by the backdrop blur
//! and the interpolation used by the text blur.
//!
//! # Examples
//!
//! ```
//! use experience_panel::Rgba;
//!
//! let ink = Rgba::from_hex("#1a1a2e").unwrap();
//! let glass = Rgba::WHITE.with_alpha(0.25);
//! let tinted = glass.blend_over(ink);
//! assert!(tinted.luminance() > ink.luminance());
//! ```

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Create a new RGBA color from f32 components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from f32 RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parse a hex color string (`#RGB`, `#RRGGBB` or `#RRGGBBAA`, `#` optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

        match hex.len() {
            3 => {
                let r = byte(0..1)?;
                let g = byte(1..2)?;
                let b = byte(2..3)?;
                Some(Self::from_rgb_u8(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::from_rgb_u8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Some(Self::from_rgba_u8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => None,
        }
    }

    /// Blend this color over another (Porter-Duff "over").
    ///
    /// `self` is the foreground, `other` the background.
    #[must_use]
    pub fn blend_over(self, other: Self) -> Self {
        const ALPHA_EPSILON: f32 = 1e-6;

        if self.a >= 1.0 {
            return self;
        }
        if self.a <= 0.0 {
            return other;
        }

        let inv_alpha = 1.0 - self.a;
        let out_a = other.a.mul_add(inv_alpha, self.a);
        if out_a <= ALPHA_EPSILON {
            return Self::TRANSPARENT;
        }

        Self {
            r: (other.r * other.a).mul_add(inv_alpha, self.r * self.a) / out_a,
            g: (other.g * other.a).mul_add(inv_alpha, self.g * self.a) / out_a,
            b: (other.b * other.a).mul_add(inv_alpha, self.b * self.a) / out_a,
            a: out_a,
        }
    }

    /// Return a new color with the specified alpha value.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.r, self.g, self.b, alpha)
    }

    /// Convert to u8 RGB tuple, clamping values to [0, 255].
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        let to_u8 = |value: f32| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Check if this color is fully transparent.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Check if this color is fully opaque.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Perceived brightness (ITU-R BT.601 weights).
    #[must_use]
    pub fn luminance(self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Linearly interpolate between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: (other.r - self.r).mul_add(t, self.r),
            g: (other.g - self.g).mul_add(t, self.g),
            b: (other.b - self.b).mul_add(t, self.b),
            a: (other.a - self.a).mul_add(t, self.a),
        }
    }

    /// Component-wise mean of a set of colors.
    ///
    /// Returns [`Rgba::TRANSPARENT`] for an empty input.
    #[must_use]
    pub fn average(colors: &[Self]) -> Self {
        if colors.is_empty() {
            return Self::TRANSPARENT;
        }
        let n = colors.len() as f32;
        let (r, g, b, a) = colors.iter().fold((0.0, 0.0, 0.0, 0.0), |acc, c| {
            (acc.0 + c.r, acc.1 + c.g, acc.2 + c.b, acc.3 + c.a)
        });
        Self::new(r / n, g / n, b / n, a / n)
    }

    /// Whether two colors are equal within 1/255 per channel.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        const TOLERANCE: f32 = 1.0 / 255.0;
        (self.r - other.r).abs() <= TOLERANCE
            && (self.g - other.g).abs() <= TOLERANCE
            && (self.b - other.b).abs() <= TOLERANCE
            && (self.a - other.a).abs() <= TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_formats() {
        assert_eq!(Rgba::from_hex("#FF0000"), Some(Rgba::RED));
        assert_eq!(Rgba::from_hex("00ff00"), Some(Rgba::GREEN));
        assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::WHITE));

        let translucent = Rgba::from_hex("#0000FF80").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Rgba::from_hex(""), None);
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#GGGGGG"), None);
        // Multi-byte input must not split a char boundary
        assert_eq!(Rgba::from_hex("#ééé"), None);
    }

    #[test]
    fn test_blend_over_extremes() {
        assert_eq!(Rgba::RED.blend_over(Rgba::BLUE), Rgba::RED);
        assert_eq!(Rgba::TRANSPARENT.blend_over(Rgba::BLUE), Rgba::BLUE);
    }

    #[test]
    fn test_blend_over_half() {
        let result = Rgba::WHITE.with_alpha(0.5).blend_over(Rgba::BLACK);
        assert!((result.r - 0.5).abs() < 1e-5);
        assert!((result.a - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_lerp_clamps() {
        assert_eq!(Rgba::BLACK.lerp(Rgba::WHITE, 2.0), Rgba::WHITE);
        assert_eq!(Rgba::BLACK.lerp(Rgba::WHITE, -1.0), Rgba::BLACK);
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert!((mid.g - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_average() {
        assert_eq!(Rgba::average(&[]), Rgba::TRANSPARENT);
        let avg = Rgba::average(&[Rgba::BLACK, Rgba::WHITE]);
        assert!(avg.approx_eq(Rgba::rgb(0.5, 0.5, 0.5)));
        assert_eq!(Rgba::average(&[Rgba::RED]), Rgba::RED);
    }

    #[test]
    fn test_luminance_ordering() {
        assert!(Rgba::WHITE.luminance() > Rgba::GREEN.luminance());
        assert!(Rgba::GREEN.luminance() > Rgba::RED.luminance());
        assert!(Rgba::RED.luminance() > Rgba::BLUE.luminance());
        assert!(Rgba::BLACK.luminance().abs() < f32::EPSILON);
    }

    #[test]
    fn test_to_rgb_u8_clamps() {
        assert_eq!(Rgba::rgb(2.0, -1.0, 0.5).to_rgb_u8(), (255, 0, 128));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rgba_strategy() -> impl Strategy<Value = Rgba> {
        (0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0)
            .prop_map(|(r, g, b, a)| Rgba::new(r, g, b, a))
    }

    proptest! {
        #[test]
        fn blend_over_opaque_background_stays_opaque(fg in rgba_strategy(), bg in rgba_strategy()) {
            let out = fg.blend_over(bg.with_alpha(1.0));
            prop_assert!((out.a - 1.0).abs() < 1e-4);
        }

        #[test]
        fn average_stays_within_channel_bounds(colors in prop::collection::vec(rgba_strategy(), 1..16)) {
            let avg = Rgba::average(&colors);
            let min_r = colors.iter().map(|c| c.r).fold(f32::INFINITY, f32::min);
            let max_r = colors.iter().map(|c| c.r).fold(f32::NEG_INFINITY, f32::max);
            prop_assert!(avg.r >= min_r - 1e-5 && avg.r <= max_r + 1e-5);
        }
    }
}
