//! Panel configuration.

use crate::color::Rgba;
use crate::history::TruncateMiss;
use crate::hover::{DEFAULT_BACKDROP_BLUR_PX, DEFAULT_TEXT_BLUR_PX};

/// Colors used for panel chrome and text under one scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub text: Rgba,
    pub muted: Rgba,
    pub link: Rgba,
    pub sidebar: Rgba,
    /// Translucent tint laid under the header row.
    pub header: Rgba,
}

impl Palette {
    /// Light text on dark backdrops.
    pub const DARK: Self = Self {
        text: Rgba::rgb(0.93, 0.93, 0.95),
        muted: Rgba::rgb(0.62, 0.64, 0.70),
        link: Rgba::rgb(0.45, 0.72, 1.0),
        sidebar: Rgba::rgb(0.08, 0.09, 0.11),
        header: Rgba::new(0.0, 0.0, 0.0, 0.45),
    };

    /// Dark text on light backdrops.
    pub const LIGHT: Self = Self {
        text: Rgba::rgb(0.08, 0.08, 0.10),
        muted: Rgba::rgb(0.36, 0.38, 0.42),
        link: Rgba::rgb(0.05, 0.35, 0.80),
        sidebar: Rgba::rgb(0.92, 0.93, 0.95),
        header: Rgba::new(1.0, 1.0, 1.0, 0.45),
    };

    #[must_use]
    pub const fn for_scheme(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }
}

/// Options controlling panel layout and behaviour.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelOptions {
    /// Columns reserved for the close button and side actions.
    pub sidebar_width: u32,
    /// Rows of the header (name, logo, role).
    pub header_height: u32,
    /// Backdrop blur once revealed, in CSS pixels.
    pub backdrop_blur_px: u16,
    /// Content blur while hidden, in CSS pixels.
    pub text_blur_px: u16,
    /// What jumping back to a page missing from the history does.
    pub truncate_miss: TruncateMiss,
    /// Appended to every breadcrumb.
    pub breadcrumb_separator: String,
    /// Shown when the current page has no content.
    pub fallback_text: String,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            sidebar_width: 3,
            header_height: 2,
            backdrop_blur_px: DEFAULT_BACKDROP_BLUR_PX,
            text_blur_px: DEFAULT_TEXT_BLUR_PX,
            truncate_miss: TruncateMiss::Clear,
            breadcrumb_separator: "  >".to_string(),
            fallback_text: "No content for this page.".to_string(),
        }
    }
}

impl PanelOptions {
    #[must_use]
    pub fn with_sidebar_width(mut self, width: u32) -> Self {
        self.sidebar_width = width;
        self
    }

    #[must_use]
    pub fn with_header_height(mut self, rows: u32) -> Self {
        self.header_height = rows.max(1);
        self
    }

    #[must_use]
    pub fn with_blur(mut self, backdrop_px: u16, text_px: u16) -> Self {
        self.backdrop_blur_px = backdrop_px;
        self.text_blur_px = text_px;
        self
    }

    #[must_use]
    pub fn with_truncate_miss(mut self, policy: TruncateMiss) -> Self {
        self.truncate_miss = policy;
        self
    }

    #[must_use]
    pub fn with_breadcrumb_separator(mut self, separator: impl Into<String>) -> Self {
        self.breadcrumb_separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = text.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = PanelOptions::default();
        assert_eq!(opts.backdrop_blur_px, 16);
        assert_eq!(opts.text_blur_px, 4);
        assert_eq!(opts.truncate_miss, TruncateMiss::Clear);
        assert_eq!(opts.breadcrumb_separator, "  >");
        assert!(opts.sidebar_width >= 1);
    }

    #[test]
    fn test_builders() {
        let opts = PanelOptions::default()
            .with_sidebar_width(5)
            .with_header_height(0)
            .with_blur(8, 0)
            .with_truncate_miss(TruncateMiss::Keep)
            .with_breadcrumb_separator(" /")
            .with_fallback_text("nothing here");

        assert_eq!(opts.sidebar_width, 5);
        assert_eq!(opts.header_height, 1);
        assert_eq!((opts.backdrop_blur_px, opts.text_blur_px), (8, 0));
        assert_eq!(opts.truncate_miss, TruncateMiss::Keep);
        assert_eq!(opts.breadcrumb_separator, " /");
        assert_eq!(opts.fallback_text, "nothing here");
    }

    #[test]
    fn test_palette_for_scheme() {
        assert_eq!(Palette::for_scheme(true), Palette::DARK);
        assert_eq!(Palette::for_scheme(false), Palette::LIGHT);
        assert!(Palette::DARK.text.luminance() > Palette::LIGHT.text.luminance());
    }
}
