//! Hover-reveal cards.
//!
//! A [`HoverCompositor`] wraps any [`ContentRenderer`] into a [`Card`] that
//! draws a backdrop image behind the content and owns the reveal state.
//! While hidden, the backdrop is sharp and the content is blurred; once the
//! pointer enters the card the blur moves to the backdrop and the content
//! becomes readable.
//!
//! The inner renderer never sees the state itself. It receives the text
//! blur to apply through [`InjectedProps`] and may flip the state through
//! the [`ToggleHover`] capability when one of its own targets is clicked.
//!
//! | state    | backdrop blur | text blur  |
//! |----------|---------------|------------|
//! | Hidden   | `none`        | `blur(4px)`  |
//! | Revealed | `blur(16px)`  | `none`     |

use crate::buffer::{BlurFilter, Canvas, Rect};
use crate::dataset::{Image, Themed};
use crate::event::{LogLevel, emit_event, emit_log};
use crate::hitgrid::HitRegion;

/// Default backdrop blur once revealed.
pub const DEFAULT_BACKDROP_BLUR_PX: u16 = 16;

/// Default content blur while hidden.
pub const DEFAULT_TEXT_BLUR_PX: u16 = 4;

/// Reveal state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HoverState {
    #[default]
    Hidden,
    Revealed,
}

impl HoverState {
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    /// Pointer entered the card: reveal. Returns whether the state changed.
    pub fn pointer_enter(&mut self) -> bool {
        if self.is_revealed() {
            return false;
        }
        self.set(Self::Revealed);
        true
    }

    /// Flip between hidden and revealed.
    pub fn toggle(&mut self) {
        let next = match self {
            Self::Hidden => Self::Revealed,
            Self::Revealed => Self::Hidden,
        };
        self.set(next);
    }

    fn set(&mut self, next: Self) {
        *self = next;
        let name = if next.is_revealed() {
            "hover.reveal"
        } else {
            "hover.hide"
        };
        emit_log(LogLevel::Debug, &format!("hover: {next:?}"));
        emit_event(name, "{}");
    }
}

/// Capability to flip the reveal state, lent to the inner renderer.
#[derive(Debug)]
pub struct ToggleHover<'a> {
    state: &'a mut HoverState,
    toggled: bool,
}

impl<'a> ToggleHover<'a> {
    pub(crate) fn new(state: &'a mut HoverState) -> Self {
        Self {
            state,
            toggled: false,
        }
    }

    /// Flip the reveal state.
    pub fn toggle(&mut self) {
        self.state.toggle();
        self.toggled = !self.toggled;
    }

    /// Whether the state differs from when the capability was lent.
    #[must_use]
    pub fn toggled(&self) -> bool {
        self.toggled
    }
}

/// Values the card injects into the inner renderer on every render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InjectedProps {
    /// Filter the renderer must apply to its text.
    pub text_blur: BlurFilter,
}

/// Props a card needs from the panel: which backdrop variant to draw.
pub trait CardProps {
    fn dark(&self) -> bool;
}

/// Renders the content inside a card.
pub trait ContentRenderer {
    /// Props supplied by the owner on every render.
    type Props: CardProps;
    /// Interactive targets the renderer registers.
    type Target: Clone;

    /// Draw into `area`, applying `injected.text_blur` to the text, and
    /// return the regions that react to clicks.
    fn render(
        &self,
        canvas: &mut Canvas,
        area: Rect,
        props: &Self::Props,
        injected: InjectedProps,
    ) -> Vec<HitRegion<Self::Target>>;

    /// Handle a click on one of the renderer's targets. Returns whether
    /// anything changed and a redraw is needed.
    fn on_click(&mut self, target: &Self::Target, hover: &mut ToggleHover<'_>) -> bool;
}

/// Hit target of a card: its surface or one of the inner renderer's targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardTarget<T> {
    Surface,
    Inner(T),
}

/// A side-panel control contributed by a compositor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuxAction {
    pub glyph: char,
    pub label: String,
}

/// Output of [`HoverCompositor::compose`].
pub struct Composed<R> {
    pub card: Card<R>,
    /// Extra side-panel controls; hover cards contribute none.
    pub actions: Vec<AuxAction>,
}

/// Builds hover cards with the configured blur strengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverCompositor {
    backdrop_blur_px: u16,
    text_blur_px: u16,
}

impl HoverCompositor {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            backdrop_blur_px: DEFAULT_BACKDROP_BLUR_PX,
            text_blur_px: DEFAULT_TEXT_BLUR_PX,
        }
    }

    #[must_use]
    pub const fn with_blur(mut self, backdrop_px: u16, text_px: u16) -> Self {
        self.backdrop_blur_px = backdrop_px;
        self.text_blur_px = text_px;
        self
    }

    /// Wrap `inner` in a hidden card over `backdrop`.
    #[must_use]
    pub fn compose<R: ContentRenderer>(&self, inner: R, backdrop: Themed<Image>) -> Composed<R> {
        Composed {
            card: Card {
                inner,
                backdrop,
                state: HoverState::Hidden,
                pointer_inside: false,
                backdrop_blur_px: self.backdrop_blur_px,
                text_blur_px: self.text_blur_px,
            },
            actions: Vec::new(),
        }
    }
}

impl Default for HoverCompositor {
    fn default() -> Self {
        Self::new()
    }
}

/// A content renderer wrapped with a backdrop and reveal state.
pub struct Card<R> {
    inner: R,
    backdrop: Themed<Image>,
    state: HoverState,
    pointer_inside: bool,
    backdrop_blur_px: u16,
    text_blur_px: u16,
}

impl<R: ContentRenderer> Card<R> {
    #[must_use]
    pub fn state(&self) -> HoverState {
        self.state
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    /// Blur over the backdrop image.
    #[must_use]
    pub fn backdrop_blur(&self) -> BlurFilter {
        if self.is_revealed() {
            BlurFilter::px(self.backdrop_blur_px)
        } else {
            BlurFilter::None
        }
    }

    /// Blur injected into the content.
    #[must_use]
    pub fn text_blur(&self) -> BlurFilter {
        if self.is_revealed() {
            BlurFilter::None
        } else {
            BlurFilter::px(self.text_blur_px)
        }
    }

    #[must_use]
    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Draw backdrop, blur and content; returns the surface region followed
    /// by the inner regions.
    pub fn render(
        &self,
        canvas: &mut Canvas,
        area: Rect,
        props: &R::Props,
    ) -> Vec<HitRegion<CardTarget<R::Target>>> {
        // Variant picked once per render, independent of hover
        let backdrop = self.backdrop.select(props.dark());
        canvas.draw_image(area, &backdrop.pixels);
        canvas.apply_backdrop_blur(area, self.backdrop_blur());

        let injected = InjectedProps {
            text_blur: self.text_blur(),
        };
        let inner = self.inner.render(canvas, area, props, injected);

        let mut regions = Vec::with_capacity(inner.len() + 1);
        regions.push(HitRegion::new(area, CardTarget::Surface));
        regions.extend(inner.into_iter().map(|r| r.map(CardTarget::Inner)));
        regions
    }

    /// Track whether the pointer is over the card; entering reveals.
    ///
    /// Returns whether the reveal state changed.
    pub fn pointer_over(&mut self, inside: bool) -> bool {
        let entered = inside && !self.pointer_inside;
        self.pointer_inside = inside;
        entered && self.state.pointer_enter()
    }

    /// Handle a press on one of the card's targets.
    ///
    /// A press arriving while the pointer was outside counts as entering
    /// first. Returns whether anything changed.
    pub fn click(&mut self, target: &CardTarget<R::Target>) -> bool {
        let mut changed = self.pointer_over(true);
        if let CardTarget::Inner(inner_target) = target {
            let mut hover = ToggleHover::new(&mut self.state);
            let inner_changed = self.inner.on_click(inner_target, &mut hover);
            changed |= inner_changed || hover.toggled();
        }
        changed
    }
}
