//! Rectangles and the scissor (clipping) stack.

/// An axis-aligned rectangle of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside this rectangle.
    #[must_use]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && py >= self.y && px < self.right() && py < self.bottom()
    }

    /// Intersection with another rectangle, `None` when they do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Self::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Check if this rectangle has zero area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shrink by `margin` cells on every side.
    #[must_use]
    pub const fn inset(&self, margin: u32) -> Self {
        let twice = margin.saturating_mul(2);
        Self::new(
            self.x.saturating_add(margin),
            self.y.saturating_add(margin),
            self.width.saturating_sub(twice),
            self.height.saturating_sub(twice),
        )
    }

    /// Split off the top `rows` rows, returning `(top, rest)`.
    #[must_use]
    pub fn split_top(&self, rows: u32) -> (Self, Self) {
        let rows = rows.min(self.height);
        (
            Self::new(self.x, self.y, self.width, rows),
            Self::new(self.x, self.y + rows, self.width, self.height - rows),
        )
    }

    /// Split off the left `cols` columns, returning `(left, rest)`.
    #[must_use]
    pub fn split_left(&self, cols: u32) -> (Self, Self) {
        let cols = cols.min(self.width);
        (
            Self::new(self.x, self.y, cols, self.height),
            Self::new(self.x + cols, self.y, self.width - cols, self.height),
        )
    }
}

/// Stack of clipping rectangles; the effective clip is their intersection.
#[derive(Clone, Debug, Default)]
pub struct ScissorStack {
    stack: Vec<Option<Rect>>,
    current: Option<Rect>,
}

impl ScissorStack {
    /// Create a stack with no clipping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a rectangle, intersecting with the current clip.
    pub fn push(&mut self, rect: Rect) {
        self.stack.push(self.current);
        self.current = Some(match self.current {
            Some(current) => current.intersect(&rect).unwrap_or_default(),
            None => rect,
        });
    }

    /// Pop the top rectangle.
    pub fn pop(&mut self) {
        if let Some(previous) = self.stack.pop() {
            self.current = previous;
        }
    }

    /// Check if a point passes the current clip.
    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.current.is_none_or(|rect| rect.contains(x, y))
    }

    /// The effective clip, `None` when unclipped.
    #[must_use]
    pub fn current(&self) -> Option<Rect> {
        self.current
    }

    /// Nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
