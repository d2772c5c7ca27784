//! Content of an experience card: header, breadcrumbs and page body.

use std::sync::Arc;

use crate::buffer::{Canvas, Rect, text_width};
use crate::content::{PageContent, Span};
use crate::dataset::ExperienceEntry;
use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::hitgrid::HitRegion;
use crate::history::NavigationHistory;
use crate::hover::{ContentRenderer, InjectedProps, ToggleHover};
use crate::options::PanelOptions;
use crate::panel::PanelProps;
use crate::style::Style;

/// Width of the header logo in cells.
const LOGO_WIDTH: u32 = 4;

/// Interactive parts of the content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentTarget {
    /// The header row; toggles the reveal state.
    Header,
    /// A breadcrumb; jumps back to its page.
    Breadcrumb(String),
    /// A link in the body; navigates forward to its page.
    Link(String),
}

/// Renders one entry and owns its navigation history.
pub struct ExperienceContent {
    entry: Arc<ExperienceEntry>,
    history: NavigationHistory,
    header_height: u32,
    breadcrumb_separator: String,
    fallback_text: String,
}

impl ExperienceContent {
    #[must_use]
    pub fn new(entry: Arc<ExperienceEntry>, options: &PanelOptions) -> Self {
        Self {
            entry,
            history: NavigationHistory::with_policy(options.truncate_miss),
            header_height: options.header_height.max(1),
            breadcrumb_separator: options.breadcrumb_separator.clone(),
            fallback_text: options.fallback_text.clone(),
        }
    }

    #[must_use]
    pub fn entry(&self) -> &ExperienceEntry {
        &self.entry
    }

    #[must_use]
    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Content of the current page.
    pub fn page_content(&self) -> Result<PageContent> {
        self.entry.produce(self.history.current_page())
    }

    /// Text of the breadcrumb for `page`.
    #[must_use]
    pub fn breadcrumb_label(&self, page: &str) -> String {
        format!("{page}{}", self.breadcrumb_separator)
    }

    fn render_header(
        &self,
        canvas: &mut Canvas,
        header: Rect,
        props: &PanelProps,
    ) -> HitRegion<ContentTarget> {
        let palette = props.palette;
        canvas.fill_rect(header, palette.header);
        canvas.push_scissor(header);

        let logo_x = header.x + header.width.saturating_sub(LOGO_WIDTH) / 2;
        let text_y = header.y + (header.height - 1) / 2;
        let logo = self.entry.logo.select(props.dark);
        canvas.draw_image(
            Rect::new(logo_x, header.y, LOGO_WIDTH, header.height),
            &logo.pixels,
        );

        let title = Style::fg(palette.text).with_bold();
        canvas.draw_text_right(logo_x.saturating_sub(1), text_y, &self.entry.name, title);
        canvas.draw_text(logo_x + LOGO_WIDTH + 1, text_y, &self.entry.role, title);

        canvas.pop_scissor();
        HitRegion::new(header, ContentTarget::Header)
    }

    /// Lay breadcrumbs out left to right, wrapping onto further rows.
    /// Returns the regions and the number of rows used.
    fn render_breadcrumbs(
        &self,
        canvas: &mut Canvas,
        area: Rect,
        props: &PanelProps,
    ) -> (Vec<HitRegion<ContentTarget>>, u32) {
        let style = Style::fg(props.palette.link);
        let mut regions = Vec::with_capacity(self.history.len());
        let (mut x, mut row) = (area.x, 0);

        canvas.push_scissor(area);
        for page in self.history.pages() {
            let label = self.breadcrumb_label(page);
            let width = text_width(&label);
            if x > area.x && x + width > area.right() {
                x = area.x;
                row += 1;
            }
            if row >= area.height {
                break;
            }
            let y = area.y + row;
            let end = canvas.draw_text(x, y, &label, style);
            if let Some(visible) = Rect::new(x, y, end - x, 1).intersect(&area) {
                regions.push(HitRegion::new(
                    visible,
                    ContentTarget::Breadcrumb(page.clone()),
                ));
            }
            x = end + 1;
        }
        canvas.pop_scissor();

        let rows_used = if self.history.is_empty() { 0 } else { row + 1 };
        (regions, rows_used.min(area.height))
    }

    /// Draw the body on its own layer so the text blur only touches it.
    fn render_body(
        &self,
        canvas: &mut Canvas,
        body: Rect,
        props: &PanelProps,
        injected: InjectedProps,
    ) -> Vec<HitRegion<ContentTarget>> {
        if body.is_empty() {
            return Vec::new();
        }
        let palette = props.palette;
        let page = self.page_content().unwrap_or_else(|err| {
            emit_log(LogLevel::Warn, &format!("panel: {err}"));
            PageContent::new().line(Span::styled(
                self.fallback_text.as_str(),
                Style::fg(palette.muted),
            ))
        });

        let mut layer = Canvas::new(body.width, body.height);
        let links = page.render(
            &mut layer,
            Rect::new(0, 0, body.width, body.height),
            Style::fg(palette.text),
            Style::fg(palette.link).with_underline(),
        );
        let bounds = layer.bounds();
        layer.apply_text_blur(bounds, injected.text_blur);
        canvas.composite(body.x, body.y, &layer);

        links
            .into_iter()
            .map(|region| {
                let rect = Rect::new(
                    region.rect.x + body.x,
                    region.rect.y + body.y,
                    region.rect.width,
                    region.rect.height,
                );
                HitRegion::new(rect, ContentTarget::Link(region.target))
            })
            .collect()
    }
}

impl ContentRenderer for ExperienceContent {
    type Props = PanelProps;
    type Target = ContentTarget;

    fn render(
        &self,
        canvas: &mut Canvas,
        area: Rect,
        props: &PanelProps,
        injected: InjectedProps,
    ) -> Vec<HitRegion<ContentTarget>> {
        let (header, rest) = area.split_top(self.header_height);
        let inner = Rect::new(
            rest.x + 1,
            rest.y,
            rest.width.saturating_sub(2),
            rest.height,
        );

        let mut regions = Vec::new();
        if !header.is_empty() {
            regions.push(self.render_header(canvas, header, props));
        }

        // One spacer row between header and breadcrumbs
        let (_, nav_area) = inner.split_top(1);
        let (crumbs, rows) = self.render_breadcrumbs(canvas, nav_area, props);
        regions.extend(crumbs);

        let (_, body) = nav_area.split_top(rows + 1);
        regions.extend(self.render_body(canvas, body, props, injected));
        regions
    }

    fn on_click(&mut self, target: &ContentTarget, hover: &mut ToggleHover<'_>) -> bool {
        match target {
            ContentTarget::Header => {
                hover.toggle();
                true
            }
            ContentTarget::Breadcrumb(page) => self.history.truncate_to(page),
            ContentTarget::Link(page) => self.history.push(page.as_str()),
        }
    }
}
