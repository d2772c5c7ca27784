//! Page content produced for an entry's sub-pages.
//!
//! A page is a list of [`Line`]s made of styled [`Span`]s. Spans created
//! through [`Navigator::link`] carry a target page; when the page is drawn
//! each link becomes a hit region that navigates forward.

use crate::buffer::{Canvas, Rect, text_width};
use crate::hitgrid::HitRegion;
use crate::style::Style;

/// A run of text with one style.
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Style,
    link: Option<String>,
}

impl Span {
    /// Unstyled text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::NONE)
    }

    /// Styled text.
    #[must_use]
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            link: None,
        }
    }

    /// Target page when this span is a link.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Display width in columns.
    #[must_use]
    pub fn width(&self) -> u32 {
        text_width(&self.text)
    }
}

impl From<&str> for Span {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for Span {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

/// One row of spans.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// Empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span.
    #[must_use]
    pub fn push(mut self, span: impl Into<Span>) -> Self {
        self.spans.push(span.into());
        self
    }

    /// Concatenated text of all spans.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Span::plain(text).into()
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Span::plain(text).into()
    }
}

/// The body of one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageContent {
    lines: Vec<Line>,
}

impl PageContent {
    /// Empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    #[must_use]
    pub fn line(mut self, line: impl Into<Line>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append plain text, one line per `\n`-separated part.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.lines.extend(text.split('\n').map(Line::from));
        self
    }

    /// Append an empty line.
    #[must_use]
    pub fn blank(mut self) -> Self {
        self.lines.push(Line::new());
        self
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Link targets in reading order.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .filter_map(Span::link)
    }

    /// Draw the page into `area`, one line per row, clipped to the area.
    ///
    /// `base` applies to every span and `link_style` additionally to links.
    /// Returns one hit region per visible link, targeting its page.
    pub fn render(
        &self,
        canvas: &mut Canvas,
        area: Rect,
        base: Style,
        link_style: Style,
    ) -> Vec<HitRegion<String>> {
        let mut regions = Vec::new();
        canvas.push_scissor(area);
        for (row, line) in (0..area.height).zip(&self.lines) {
            let y = area.y + row;
            let mut x = area.x;
            for span in &line.spans {
                let mut style = base.merge(span.style);
                if span.link.is_some() {
                    style = style.merge(link_style);
                }
                let next = canvas.draw_text(x, y, &span.text, style);
                if let Some(target) = &span.link {
                    let rect = Rect::new(x, y, next - x, 1);
                    if let Some(visible) = rect.intersect(&area) {
                        regions.push(HitRegion::new(visible, target.clone()));
                    }
                }
                x = next;
            }
        }
        canvas.pop_scissor();
        regions
    }
}

/// The "navigate forward" capability handed to page producers.
///
/// A producer cannot change the history itself; it can only create link
/// spans that navigate when clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: String,
}

impl Navigator {
    /// Navigator for a page being produced.
    #[must_use]
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }

    /// The page being produced.
    #[must_use]
    pub fn current_page(&self) -> &str {
        &self.current
    }

    /// A link span that pushes `target` onto the history when clicked.
    #[must_use]
    pub fn link(&self, text: impl Into<String>, target: impl Into<String>) -> Span {
        Span {
            text: text.into(),
            style: Style::NONE,
            link: Some(target.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_builder_and_links() {
        let nav = Navigator::new("/");
        let page = PageContent::new()
            .text("Intro\nSecond")
            .blank()
            .line(Line::new().push("See ").push(nav.link("projects", "projects")));

        assert_eq!(page.lines().len(), 4);
        assert_eq!(page.lines()[3].text(), "See projects");
        assert_eq!(page.links().collect::<Vec<_>>(), vec!["projects"]);
    }

    #[test]
    fn test_render_produces_link_regions() {
        let nav = Navigator::new("/");
        let page = PageContent::new()
            .text("Heading")
            .line(Line::new().push("go: ").push(nav.link("detail", "detail")));

        let mut canvas = Canvas::new(20, 4);
        let area = Rect::new(2, 1, 18, 3);
        let regions = page.render(&mut canvas, area, Style::NONE, Style::fg(Rgba::BLUE));

        assert_eq!(canvas.row_text(1).trim(), "Heading");
        assert_eq!(canvas.row_text(2).trim(), "go: detail");
        assert_eq!(
            regions,
            vec![HitRegion::new(Rect::new(6, 2, 6, 1), "detail".to_string())]
        );
        assert_eq!(canvas.get(6, 2).unwrap().fg, Rgba::BLUE);
    }

    #[test]
    fn test_render_clips_to_area() {
        let nav = Navigator::new("/");
        let page = PageContent::new()
            .line("one")
            .line(nav.link("hidden", "below"));

        let mut canvas = Canvas::new(10, 3);
        let regions = page.render(&mut canvas, Rect::new(0, 0, 10, 1), Style::NONE, Style::NONE);

        assert!(regions.is_empty());
        assert_eq!(canvas.row_text(1).trim(), "");
    }
}
