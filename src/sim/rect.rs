//! Axis-aligned rectangles for paddle, ball and tile hit zones
//!
//! Integer screen coordinates, y grows downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            width,
            height,
        }
    }

    pub fn from_pos(pos: IVec2, width: i32, height: i32) -> Self {
        Self { pos, width, height }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.height
    }

    /// Closed-interval overlap test, see [`intersects`]
    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(self, other)
    }
}

/// Check whether two rectangles overlap
///
/// Edges are inclusive: rectangles that merely touch count as overlapping.
/// A zero-sized rectangle behaves as a point.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    if a.right() < b.left() || b.right() < a.left() {
        return false;
    }
    if a.bottom() < b.top() || b.bottom() < a.top() {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_touching_edges_count() {
        let a = Rect::new(0, 0, 10, 10);
        // Shares the x = 10 edge
        assert!(intersects(&a, &Rect::new(10, 0, 10, 10)));
        // Shares the y = 10 edge
        assert!(intersects(&a, &Rect::new(0, 10, 10, 10)));
        // Corner contact
        assert!(a.intersects(&Rect::new(10, 10, 5, 5)));
    }

    #[test]
    fn test_separated_rects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!intersects(&a, &Rect::new(11, 0, 10, 10)));
        assert!(!intersects(&a, &Rect::new(-11, 0, 10, 10)));
        assert!(!intersects(&a, &Rect::new(0, 11, 10, 10)));
        assert!(!intersects(&a, &Rect::new(0, -11, 10, 10)));
    }

    #[test]
    fn test_zero_size_is_a_point() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(intersects(&a, &Rect::new(5, 5, 0, 0)));
        assert!(intersects(&a, &Rect::new(10, 10, 0, 0)));
        assert!(!intersects(&a, &Rect::new(11, 5, 0, 0)));
        // Two identical points
        assert!(intersects(&Rect::new(3, 3, 0, 0), &Rect::new(3, 3, 0, 0)));
    }
}
