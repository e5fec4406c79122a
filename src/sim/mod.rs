//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only; time comes from the tick, never the wall clock
//! - Stable iteration order (by entity ID)
//! - No rendering, asset or platform dependencies

pub mod ai;
pub mod anim;
pub mod collision;
pub mod map;
pub mod rect;
pub mod state;
pub mod tick;

pub use ai::{ChaseStep, chase};
pub use anim::Animation;
pub use collision::{Axis, AxisMove, collides_any, move_and_slide, resolve_axis_move};
pub use rect::Rect;
pub use state::{
    Direction, Enemy, EntityIds, GamePhase, GameState, Generator, Player, Projectile,
    ProjectileReport, Wall,
};
pub use tick::{LogicalKey, TickEvents, TickInput, tick, transition};
