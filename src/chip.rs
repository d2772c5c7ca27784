//! Chip buttons that open panels.

use crate::buffer::{Canvas, Rect, text_width};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::identifier::Identifier;
use crate::options::Palette;
use crate::style::Style;

type ClickCallback = Box<dyn FnMut(&Identifier)>;

/// A one-line button labelled `"<role>⋅<name>"` for an entry.
pub struct ChipButton {
    identifier: Identifier,
    label: String,
    on_click: ClickCallback,
}

impl ChipButton {
    /// Resolve the entry behind `identifier` and build its chip.
    pub fn new<F>(identifier: Identifier, on_click: F, dataset: &dyn Dataset) -> Result<Self>
    where
        F: FnMut(&Identifier) + 'static,
    {
        let entry = dataset.resolve(&identifier)?;
        Ok(Self {
            label: format!("{}⋅{}", entry.role, entry.name),
            identifier,
            on_click: Box::new(on_click),
        })
    }

    #[must_use]
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Width on screen, including one column of padding on each side.
    #[must_use]
    pub fn width(&self) -> u32 {
        text_width(&self.label) + 2
    }

    /// Draw the chip with its top-left corner at `(x, y)` and return the
    /// rectangle it occupies. `active` highlights chips whose panel is open.
    pub fn render(&self, canvas: &mut Canvas, x: u32, y: u32, palette: &Palette, active: bool) -> Rect {
        let rect = Rect::new(x, y, self.width(), 1);
        let (fg, bg) = if active {
            (palette.sidebar, palette.link)
        } else {
            (palette.text, palette.sidebar)
        };
        canvas.fill_rect(rect, bg);
        canvas.draw_text(x + 1, y, &self.label, Style::fg(fg));
        rect
    }

    /// Invoke the click callback with the chip's identifier.
    pub fn click(&mut self) {
        (self.on_click)(&self.identifier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelBuffer;
    use crate::color::Rgba;
    use crate::dataset::{Catalog, ExperienceEntry, Image, Themed};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn catalog() -> Catalog {
        let image = Themed::uniform(Image::new("img", PixelBuffer::filled(1, 1, Rgba::RED)));
        Catalog::new().with_entry(
            "alpha",
            ExperienceEntry::new("Alpha Corp", "Engineer", image.clone(), image),
        )
    }

    #[test]
    fn test_label_format() {
        let chip = ChipButton::new("chip:alpha".into(), |_| {}, &catalog()).unwrap();
        assert_eq!(chip.label(), "Engineer⋅Alpha Corp");
        assert_eq!(chip.width(), text_width("Engineer⋅Alpha Corp") + 2);
    }

    #[test]
    fn test_unknown_key_fails() {
        assert!(ChipButton::new("chip:nope".into(), |_| {}, &catalog()).is_err());
    }

    #[test]
    fn test_click_reports_identifier() {
        let clicked = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&clicked);
        let mut chip = ChipButton::new(
            "chip:alpha".into(),
            move |id: &Identifier| *sink.borrow_mut() = Some(id.clone()),
            &catalog(),
        )
        .unwrap();

        chip.click();
        assert_eq!(*clicked.borrow(), Some(Identifier::new("chip:alpha")));
    }

    #[test]
    fn test_render_returns_rect() {
        let chip = ChipButton::new("chip:alpha".into(), |_| {}, &catalog()).unwrap();
        let mut canvas = Canvas::new(40, 2);
        let rect = chip.render(&mut canvas, 2, 1, &Palette::DARK, false);
        assert_eq!(rect, Rect::new(2, 1, chip.width(), 1));
        assert_eq!(canvas.find_text("Engineer⋅Alpha Corp"), Some((3, 1)));
    }
}
