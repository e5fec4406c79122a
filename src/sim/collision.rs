//! Collision detection and response against the static wall set
//!
//! Movement is resolved one axis at a time: apply the X component, revert it if
//! the box now overlaps a wall, then do the same for Y. Because the axes are
//! independent, a diagonal push into a wall slides along whichever axis is open.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Wall;

/// A single movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The other axis
    pub fn other(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Component of `v` along this axis
    pub fn component(self, v: IVec2) -> i32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Vector with `amount` on this axis and zero on the other
    pub fn vector(self, amount: i32) -> IVec2 {
        match self {
            Axis::Horizontal => IVec2::new(amount, 0),
            Axis::Vertical => IVec2::new(0, amount),
        }
    }
}

/// Result of a single-axis move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMove {
    /// Rectangle after the move (unchanged if blocked)
    pub rect: Rect,
    /// Whether a wall forced the move to be reverted
    pub blocked: bool,
}

/// True if `rect` overlaps any wall. Only yes/no matters, not which wall.
pub fn collides_any(rect: &Rect, walls: &[Wall]) -> bool {
    walls.iter().any(|wall| wall.rect.overlaps(rect))
}

/// Apply `delta` along `axis`, reverting it if the result overlaps a wall
pub fn resolve_axis_move(rect: Rect, axis: Axis, delta: i32, walls: &[Wall]) -> AxisMove {
    if delta == 0 {
        return AxisMove {
            rect,
            blocked: false,
        };
    }

    let moved = rect.translated(axis.vector(delta));
    if collides_any(&moved, walls) {
        AxisMove {
            rect,
            blocked: true,
        }
    } else {
        AxisMove {
            rect: moved,
            blocked: false,
        }
    }
}

/// Apply `delta` X-first then Y, each axis blocked independently (wall sliding)
pub fn move_and_slide(rect: Rect, delta: IVec2, walls: &[Wall]) -> Rect {
    let after_x = resolve_axis_move(rect, Axis::Horizontal, delta.x, walls);
    resolve_axis_move(after_x.rect, Axis::Vertical, delta.y, walls).rect
}

/// Indices of every item whose rectangle overlaps `rect`, in slice order
pub fn overlapping<'a, T>(
    rect: &'a Rect,
    items: &'a [T],
    rect_of: impl Fn(&T) -> &Rect + 'a,
) -> impl Iterator<Item = usize> + 'a {
    items
        .iter()
        .enumerate()
        .filter(move |(_, item)| rect_of(*item).overlaps(rect))
        .map(|(i, _)| i)
}
