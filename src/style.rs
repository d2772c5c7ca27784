//! Text styling with attributes and colors.
//!
//! - [`TextAttributes`]: bitflags for bold, dim, italic, underline, etc.
//! - [`Style`]: optional foreground/background plus attributes
//!
//! # Examples
//!
//! ```
//! use experience_panel::{Rgba, Style, TextAttributes};
//!
//! let title = Style::fg(Rgba::WHITE).with_bold();
//! let crumb = Style::fg(Rgba::from_hex("#9ecbff").unwrap()).with_underline();
//! let merged = title.merge(crumb);
//! assert!(merged.attributes.contains(TextAttributes::BOLD | TextAttributes::UNDERLINE));
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes.
    ///
    /// Combine with bitwise OR. Not all terminals support all attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Dim/decreased intensity.
        const DIM           = 0x02;
        /// Italic.
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Swapped foreground/background.
        const INVERSE       = 0x20;
        /// Hidden/invisible text.
        const HIDDEN        = 0x40;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x80;
    }
}

impl TextAttributes {
    /// SGR parameter codes that switch each attribute on, in bit order.
    pub(crate) fn sgr_codes(self) -> impl Iterator<Item = &'static str> {
        [
            (Self::BOLD, "1"),
            (Self::DIM, "2"),
            (Self::ITALIC, "3"),
            (Self::UNDERLINE, "4"),
            (Self::INVERSE, "7"),
            (Self::HIDDEN, "8"),
            (Self::STRIKETHROUGH, "9"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, code)| code)
    }
}

/// Complete text style.
///
/// `None` colors mean "inherit from whatever is underneath": text drawn with
/// no background keeps the backdrop visible.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Rgba>,
    /// Background color.
    pub bg: Option<Rgba>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a style with only foreground color.
    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only background color.
    #[must_use]
    pub const fn bg(color: Rgba) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::BOLD,
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attrs),
            ..self
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    /// Return a new style with the underline attribute added.
    #[must_use]
    pub const fn with_underline(self) -> Self {
        self.with_attributes(TextAttributes::UNDERLINE)
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Merge two styles, with `other` taking precedence for set values.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_none_is_empty() {
        assert!(Style::NONE.is_empty());
        assert!(Style::default().is_empty());
        assert!(!Style::bold().is_empty());
    }

    #[test]
    fn test_with_builders_keep_other_fields() {
        let style = Style::fg(Rgba::RED).with_bg(Rgba::BLUE).with_bold();
        assert_eq!(style.fg, Some(Rgba::RED));
        assert_eq!(style.bg, Some(Rgba::BLUE));
        assert!(style.attributes.contains(TextAttributes::BOLD));
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base = Style::fg(Rgba::RED).with_bg(Rgba::BLACK);
        let overlay = Style::fg(Rgba::GREEN).with_underline();
        let merged = base.merge(overlay);

        assert_eq!(merged.fg, Some(Rgba::GREEN));
        assert_eq!(merged.bg, Some(Rgba::BLACK));
        assert!(merged.attributes.contains(TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_sgr_codes_in_order() {
        let attrs = TextAttributes::UNDERLINE | TextAttributes::BOLD;
        let codes: Vec<_> = attrs.sgr_codes().collect();
        assert_eq!(codes, vec!["1", "4"]);
        assert_eq!(TextAttributes::empty().sgr_codes().count(), 0);
    }
}
