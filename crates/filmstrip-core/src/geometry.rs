#![forbid(unsafe_code)]

//! Grid primitives.

use serde::{Deserialize, Serialize};

/// Shape of the participant grid.
///
/// `columns` must be at least 1 for any placement to be meaningful; the
/// layout crate rejects shapes that violate this instead of clamping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridShape {
    /// Number of columns in the grid.
    pub columns: u32,
    /// Number of rows the host has room for. Informational; placement may
    /// use more rows than this.
    pub rows: u32,
}

impl GridShape {
    /// Create a new grid shape.
    #[inline]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }
}

/// A rectangle of grid cells occupied by one tile.
///
/// Uses cell coordinates (0-indexed, origin at the top-left of the grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileRect {
    /// Left column (inclusive).
    pub x: u32,
    /// Top row (inclusive).
    pub y: u32,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl TileRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A single cell at `(x, y)`.
    #[inline]
    pub const fn cell(x: u32, y: u32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Check if a cell is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether the two rectangles share at least one cell.
    #[inline]
    pub fn intersects(&self, other: &TileRect) -> bool {
        self.intersection_opt(other).is_some()
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &TileRect) -> Option<TileRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(TileRect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TileRect;

    #[test]
    fn rect_contains_edges() {
        let rect = TileRect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 8));
    }

    #[test]
    fn rect_intersection_overlaps() {
        let a = TileRect::new(0, 0, 2, 2);
        let b = TileRect::new(1, 1, 2, 2);
        assert_eq!(a.intersection_opt(&b), Some(TileRect::new(1, 1, 1, 1)));
        assert!(a.intersects(&b));
    }

    #[test]
    fn adjacent_cells_do_not_intersect() {
        let moderator = TileRect::new(0, 0, 2, 2);
        assert!(!moderator.intersects(&TileRect::cell(2, 0)));
        assert!(!moderator.intersects(&TileRect::cell(0, 2)));
        assert!(moderator.intersects(&TileRect::cell(1, 1)));
    }
}
