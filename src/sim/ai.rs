//! Enemy chase heuristic
//!
//! Greedy and two-axis: step along whichever axis has the larger gap to the
//! target; if a wall blocks that step, try the other axis instead. No search,
//! so an enemy can still wedge itself into a concave corner.

use glam::IVec2;

use super::collision::{Axis, resolve_axis_move};
use super::rect::Rect;
use super::state::Wall;

/// Outcome of one chase step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaseStep {
    pub rect: Rect,
    /// Axis tried first
    pub primary: Axis,
    /// A wall reverted the primary step
    pub primary_blocked: bool,
    /// The secondary axis was attempted
    pub fell_back: bool,
}

/// Axis with the larger gap; ties go vertical
pub fn primary_axis(delta: IVec2) -> Axis {
    if delta.x.abs() > delta.y.abs() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

/// Step of at most `speed` toward closing `delta`, never overshooting
#[inline]
pub fn step_toward(delta: i32, speed: i32) -> i32 {
    delta.clamp(-speed, speed)
}

/// Move `rect` one tick toward `target` (a center point)
pub fn chase(rect: Rect, speed: i32, target: IVec2, walls: &[Wall]) -> ChaseStep {
    let delta = target - rect.center();
    let primary = primary_axis(delta);

    let first = resolve_axis_move(
        rect,
        primary,
        step_toward(primary.component(delta), speed),
        walls,
    );
    if !first.blocked {
        return ChaseStep {
            rect: first.rect,
            primary,
            primary_blocked: false,
            fell_back: false,
        };
    }

    let secondary = primary.other();
    let secondary_delta = secondary.component(delta);
    if secondary_delta == 0 {
        return ChaseStep {
            rect,
            primary,
            primary_blocked: true,
            fell_back: false,
        };
    }

    let second = resolve_axis_move(rect, secondary, step_toward(secondary_delta, speed), walls);
    ChaseStep {
        rect: second.rect,
        primary,
        primary_blocked: true,
        fell_back: true,
    }
}
