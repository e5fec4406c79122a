//! Axis-aligned integer rectangles
//!
//! Everything that collides is a `Rect` in map pixel space:
//! - x, y: top-left corner
//! - w, h: extent to the right and downward

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A `size` box whose center lands on `center` (integer division rounds the
    /// origin toward the top-left for odd sizes)
    pub fn centered_at(center: IVec2, size: IVec2) -> Self {
        Self::new(center.x - size.x / 2, center.y - size.y / 2, size.x, size.y)
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Center point (integer, rounds toward the top-left)
    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Strict overlap: rectangles that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Copy shifted by `delta`
    #[inline]
    pub fn translated(&self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 32, 32);
        let right = Rect::new(32, 0, 32, 32);
        let below = Rect::new(0, 32, 32, 32);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&Rect::new(31, 31, 32, 32)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Rect::new(10, 10, 28, 28);
        let b = Rect::new(30, 5, 8, 8);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_centered_at() {
        let r = Rect::centered_at(IVec2::new(494, 494), IVec2::splat(8));
        assert_eq!(r, Rect::new(490, 490, 8, 8));
        assert_eq!(r.center(), IVec2::new(494, 494));
    }
}
