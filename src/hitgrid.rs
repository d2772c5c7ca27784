//! Hit testing grid for pointer events.
//!
//! Each frame registers the interactive regions it drew; pointer positions
//! are then resolved back to the target registered last at that cell, so
//! nested regions (a breadcrumb inside a card) win over their containers.

use crate::buffer::Rect;

/// A region of cells bound to an interactive target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HitRegion<T> {
    pub rect: Rect,
    pub target: T,
}

impl<T> HitRegion<T> {
    /// Create a hit region.
    #[must_use]
    pub const fn new(rect: Rect, target: T) -> Self {
        Self { rect, target }
    }

    /// Convert the target type, keeping the rectangle.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> HitRegion<U> {
        HitRegion {
            rect: self.rect,
            target: f(self.target),
        }
    }
}

/// A grid mapping screen positions to targets.
///
/// Targets are interned once per registration; cells store indices into
/// the target table.
#[derive(Clone, Debug)]
pub struct HitGrid<T> {
    width: u32,
    height: u32,
    cells: Vec<Option<u32>>,
    targets: Vec<T>,
}

impl<T> HitGrid<T> {
    /// Create a new hit grid with the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            cells: vec![None; size],
            targets: Vec::new(),
        }
    }

    #[inline]
    fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row_offset = (y as usize).checked_mul(self.width as usize)?;
        row_offset.checked_add(x as usize)
    }

    /// Clear all hit areas.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.targets.clear();
    }

    /// Register a hit area; later registrations win where they overlap.
    pub fn register(&mut self, rect: Rect, target: T) {
        let Ok(id) = u32::try_from(self.targets.len()) else {
            return;
        };
        self.targets.push(target);
        for row in rect.y..rect.bottom().min(self.height) {
            for col in rect.x..rect.right().min(self.width) {
                if let Some(idx) = self.cell_index(col, row) {
                    self.cells[idx] = Some(id);
                }
            }
        }
    }

    /// Register a batch of regions in order.
    pub fn extend(&mut self, regions: impl IntoIterator<Item = HitRegion<T>>) {
        for region in regions {
            self.register(region.rect, region.target);
        }
    }

    /// Target at a position.
    #[must_use]
    pub fn test(&self, x: u32, y: u32) -> Option<&T> {
        let id = self.cell_index(x, y).and_then(|idx| self.cells[idx])?;
        self.targets.get(id as usize)
    }

    /// Resize the grid, clearing all hit areas.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Get dimensions.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of registered targets since the last clear.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether nothing has been registered since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<T> Default for HitGrid<T> {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
