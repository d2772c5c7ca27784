//! The description panel for one experience entry.
//!
//! A panel resolves its entry from an [`Identifier`], wraps an
//! [`ExperienceContent`] in a hover card and draws it next to a sidebar with
//! the close button. Pointer events are routed through the hit grid rebuilt
//! on every render.
//!
//! # Examples
//!
//! ```
//! use experience_panel::buffer::{Canvas, PixelBuffer};
//! use experience_panel::{
//!     Catalog, DescriptionPanel, ExperienceEntry, Image, PageContent, PanelOptions, Rgba,
//!     Themed,
//! };
//!
//! let image = Image::new("cover.png", PixelBuffer::filled(4, 4, Rgba::BLUE));
//! let entry = ExperienceEntry::new("Acme", "Engineer", Themed::uniform(image.clone()),
//!     Themed::uniform(image))
//!     .with_page("/", |_| PageContent::new().text("Hello"));
//! let catalog = Catalog::new().with_entry("acme", entry);
//!
//! let mut panel = DescriptionPanel::new(
//!     "chip:acme".into(),
//!     |_| {},
//!     &catalog,
//!     PanelOptions::default(),
//! )
//! .unwrap();
//!
//! let mut canvas = Canvas::new(40, 10);
//! panel.render(&mut canvas, &true);
//! assert!(canvas.find_text("Acme").is_some());
//! ```

mod content;

pub use content::{ContentTarget, ExperienceContent};

use crate::buffer::{Canvas, Rect};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::event::{LogLevel, emit_json, emit_log};
use crate::hitgrid::HitGrid;
use crate::history::NavigationHistory;
use crate::hover::{AuxAction, Card, CardProps, CardTarget, HoverCompositor, HoverState};
use crate::identifier::Identifier;
use crate::input::{MouseEvent, MouseEventKind};
use crate::options::{Palette, PanelOptions};
use crate::style::Style;
use crate::terminal::ColorScheme;

/// Props passed down to the card on each render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelProps {
    /// Dark color scheme.
    pub dark: bool,
    pub palette: Palette,
}

impl PanelProps {
    #[must_use]
    pub const fn for_scheme(dark: bool) -> Self {
        Self {
            dark,
            palette: Palette::for_scheme(dark),
        }
    }
}

impl CardProps for PanelProps {
    fn dark(&self) -> bool {
        self.dark
    }
}

/// What a cell of the panel reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelTarget {
    Close,
    Card(CardTarget<ContentTarget>),
}

/// Outcome of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelResponse {
    /// State changed; draw again.
    Redraw,
    /// The close button was pressed and `on_cross` has been called.
    Closed,
    /// Nothing happened.
    Ignored,
}

type CrossCallback = Box<dyn FnMut(&Identifier)>;

/// Detail panel for one entry.
pub struct DescriptionPanel {
    identifier: Identifier,
    on_cross: CrossCallback,
    card: Card<ExperienceContent>,
    actions: Vec<AuxAction>,
    options: PanelOptions,
    hit_grid: HitGrid<PanelTarget>,
}

impl DescriptionPanel {
    /// Resolve the entry for `identifier` and build the panel.
    ///
    /// Fails with [`Error::Lookup`](crate::Error::Lookup) when the dataset
    /// has no entry for the key, or
    /// [`Error::MalformedIdentifier`](crate::Error::MalformedIdentifier) when
    /// the identifier has none.
    pub fn new<F>(
        identifier: Identifier,
        on_cross: F,
        dataset: &dyn Dataset,
        options: PanelOptions,
    ) -> Result<Self>
    where
        F: FnMut(&Identifier) + 'static,
    {
        let entry = dataset.resolve(&identifier)?;
        let backdrop = entry.cover.clone();
        let content = ExperienceContent::new(entry, &options);
        let composed = HoverCompositor::new()
            .with_blur(options.backdrop_blur_px, options.text_blur_px)
            .compose(content, backdrop);

        emit_log(LogLevel::Debug, &format!("panel: opened {identifier}"));
        Ok(Self {
            identifier,
            on_cross: Box::new(on_cross),
            card: composed.card,
            actions: composed.actions,
            options,
            hit_grid: HitGrid::default(),
        })
    }

    #[must_use]
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    #[must_use]
    pub fn history(&self) -> &NavigationHistory {
        self.card.inner().history()
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.card.state()
    }

    #[must_use]
    pub fn card(&self) -> &Card<ExperienceContent> {
        &self.card
    }

    #[must_use]
    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    /// Target under a cell, as of the last render.
    #[must_use]
    pub fn hit_test(&self, x: u32, y: u32) -> Option<&PanelTarget> {
        self.hit_grid.test(x, y)
    }

    /// Draw the panel over the whole canvas.
    pub fn render(&mut self, canvas: &mut Canvas, scheme: &dyn ColorScheme) {
        let area = canvas.bounds();
        self.render_in(canvas, area, scheme);
    }

    /// Draw the panel into `area` and rebuild the hit grid.
    pub fn render_in(
        &mut self,
        canvas: &mut Canvas,
        area: Rect,
        scheme: &dyn ColorScheme,
    ) {
        let props = PanelProps::for_scheme(scheme.prefers_dark());
        let (width, height) = canvas.size();
        if self.hit_grid.size() == (width, height) {
            self.hit_grid.clear();
        } else {
            self.hit_grid.resize(width, height);
        }
        let Some(area) = area.intersect(&canvas.bounds()) else {
            return;
        };

        let (sidebar, card_area) = area.split_left(self.options.sidebar_width);
        self.render_sidebar(canvas, sidebar, &props);

        if !card_area.is_empty() {
            let regions = self.card.render(canvas, card_area, &props);
            self.hit_grid
                .extend(regions.into_iter().map(|r| r.map(PanelTarget::Card)));
        }
    }

    fn render_sidebar(&mut self, canvas: &mut Canvas, sidebar: Rect, props: &PanelProps) {
        if sidebar.is_empty() {
            return;
        }
        let palette = props.palette;
        canvas.fill_rect(sidebar, palette.sidebar);

        let center = sidebar.x + sidebar.width / 2;
        let style = Style::fg(palette.text).with_bold();
        canvas.draw_text(center, sidebar.y, "X", style);
        self.hit_grid.register(
            Rect::new(sidebar.x, sidebar.y, sidebar.width, 1),
            PanelTarget::Close,
        );

        for (row, action) in (2..sidebar.height).step_by(2).zip(&self.actions) {
            let mut glyph = [0u8; 4];
            canvas.draw_text(
                center,
                sidebar.y + row,
                action.glyph.encode_utf8(&mut glyph),
                Style::fg(palette.muted),
            );
        }
    }

    /// Route a pointer event through the hit grid.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> PanelResponse {
        let target = self.hit_grid.test(event.x, event.y).cloned();
        let over_card = matches!(target, Some(PanelTarget::Card(_)));

        match event.kind {
            MouseEventKind::Move => respond(self.card.pointer_over(over_card)),
            MouseEventKind::Press if event.is_left_press() => match target {
                Some(PanelTarget::Close) => {
                    self.close();
                    PanelResponse::Closed
                }
                Some(PanelTarget::Card(card_target)) => respond(self.card.click(&card_target)),
                None => {
                    self.card.pointer_over(false);
                    PanelResponse::Ignored
                }
            },
            _ => PanelResponse::Ignored,
        }
    }

    /// Invoke the close callback, as the close button does.
    pub fn close(&mut self) {
        emit_json(
            "panel.close",
            &serde_json::json!({ "id": self.identifier.as_str() }),
        );
        (self.on_cross)(&self.identifier);
    }
}

fn respond(changed: bool) -> PanelResponse {
    if changed {
        PanelResponse::Redraw
    } else {
        PanelResponse::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelBuffer;
    use crate::color::Rgba;
    use crate::content::PageContent;
    use crate::dataset::{Catalog, ExperienceEntry, Image, Themed};
    use crate::error::Error;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn catalog() -> Catalog {
        let cover = Themed::new(
            Image::new("cover-light", PixelBuffer::filled(4, 4, Rgba::WHITE)),
            Image::new("cover-dark", PixelBuffer::filled(4, 4, Rgba::BLACK)),
        );
        let logo = Themed::uniform(Image::new("logo", PixelBuffer::filled(2, 2, Rgba::RED)));
        Catalog::new().with_entry(
            "alpha",
            ExperienceEntry::new("Alpha", "Lead", logo, cover)
                .with_page("/", |nav| PageContent::new().line(nav.link("projects", "projects")))
                .with_page("projects", |_| PageContent::new().text("List")),
        )
    }

    fn panel() -> (DescriptionPanel, Rc<RefCell<Vec<String>>>) {
        let closed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&closed);
        let panel = DescriptionPanel::new(
            Identifier::new("chip:alpha"),
            move |id: &Identifier| sink.borrow_mut().push(id.to_string()),
            &catalog(),
            PanelOptions::default(),
        )
        .unwrap();
        (panel, closed)
    }

    #[test]
    fn test_lookup_failures() {
        let err = DescriptionPanel::new(
            Identifier::new("chip:missing"),
            |_| {},
            &catalog(),
            PanelOptions::default(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, Error::Lookup { ref key } if key == "missing"));

        let err = DescriptionPanel::new(
            Identifier::new("alpha"),
            |_| {},
            &catalog(),
            PanelOptions::default(),
        )
        .err()
        .unwrap();
        assert!(err.is_lookup());
    }

    #[test]
    fn test_close_button() {
        let (mut panel, closed) = panel();
        let mut canvas = Canvas::new(40, 12);
        panel.render(&mut canvas, &true);

        let (x, y) = canvas.find_text("X").unwrap();
        assert_eq!(panel.hit_test(x, y), Some(&PanelTarget::Close));
        assert_eq!(
            panel.handle_mouse(&MouseEvent::click(x, y)),
            PanelResponse::Closed
        );
        assert_eq!(*closed.borrow(), vec!["chip:alpha".to_string()]);
    }

    #[test]
    fn test_move_into_card_reveals() {
        let (mut panel, _) = panel();
        let mut canvas = Canvas::new(40, 12);
        panel.render(&mut canvas, &false);

        assert_eq!(
            panel.handle_mouse(&MouseEvent::move_to(0, 5)),
            PanelResponse::Ignored
        );
        assert_eq!(
            panel.handle_mouse(&MouseEvent::move_to(20, 8)),
            PanelResponse::Redraw
        );
        assert!(panel.hover_state().is_revealed());
        assert_eq!(
            panel.handle_mouse(&MouseEvent::move_to(21, 8)),
            PanelResponse::Ignored
        );
    }

    #[test]
    fn test_link_click_navigates() {
        let (mut panel, _) = panel();
        let mut canvas = Canvas::new(40, 12);
        panel.render(&mut canvas, &true);
        panel.handle_mouse(&MouseEvent::move_to(20, 8));

        let mut canvas = Canvas::new(40, 12);
        panel.render(&mut canvas, &true);
        let (x, y) = canvas.find_text("projects").unwrap();
        assert_eq!(panel.handle_mouse(&MouseEvent::click(x, y)), PanelResponse::Redraw);
        assert_eq!(panel.history().pages(), ["/", "projects"]);
    }

    #[test]
    fn test_release_and_right_click_ignored() {
        let (mut panel, closed) = panel();
        let mut canvas = Canvas::new(40, 12);
        panel.render(&mut canvas, &true);
        let (x, y) = canvas.find_text("X").unwrap();

        let release = MouseEvent::release(x, y, crate::input::MouseButton::Left);
        assert_eq!(panel.handle_mouse(&release), PanelResponse::Ignored);
        let right = MouseEvent::press(x, y, crate::input::MouseButton::Right);
        assert_eq!(panel.handle_mouse(&right), PanelResponse::Ignored);
        assert!(closed.borrow().is_empty());
    }
}
