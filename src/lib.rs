//! Gauntlet - a top-down tile-map arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, chase AI, game state)
//! - `tuning`: Data-driven game balance
//! - `camera`: Viewport follow/clamp
//! - `view`: Read-only render snapshot for whatever draws the game
//! - `assets`: Sprite sheet descriptors and walking animation

pub mod assets;
pub mod camera;
pub mod sim;
pub mod tuning;
pub mod view;

pub use camera::Camera;
pub use tuning::{Tuning, TuningError};

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (~60 Hz)
    pub const SIM_DT_MS: u64 = 16;

    /// Tile edge length in pixels
    pub const TILE_SIZE: i32 = 32;
    /// Map dimensions in tiles
    pub const MAP_WIDTH: i32 = 40;
    pub const MAP_HEIGHT: i32 = 30;
    /// Map dimensions in pixels
    pub const MAP_WIDTH_PX: i32 = MAP_WIDTH * TILE_SIZE;
    pub const MAP_HEIGHT_PX: i32 = MAP_HEIGHT * TILE_SIZE;

    /// Viewport dimensions
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Player defaults
    pub const PLAYER_SIZE: i32 = TILE_SIZE - 4;
    pub const PLAYER_SPEED: i32 = 4;
    pub const PLAYER_MAX_HEALTH: u32 = 1000;
    /// Player start tile
    pub const PLAYER_START_X: i32 = 15;
    pub const PLAYER_START_Y: i32 = 15;

    /// Enemy defaults
    pub const ENEMY_SIZE: i32 = TILE_SIZE - 4;
    pub const ENEMY_SPEED: i32 = 2;
    pub const ENEMY_DAMAGE: u32 = 10;

    /// Generator defaults
    pub const GENERATOR_HIT_POINTS: u32 = 3;
    pub const SPAWN_INTERVAL_MS: u64 = 3000;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: i32 = 8;
    pub const PROJECTILE_SPEED: i32 = 8;
    pub const SHOOT_COOLDOWN_MS: u64 = 250;

    /// Sprite sheet layout (LPC walk cycle)
    pub const SPRITE_FRAME_SIZE: u32 = 64;
    pub const WALK_FRAMES: usize = 9;
    pub const ANIMATION_SPEED: f32 = 0.15;
}

/// Pixel position of the top-left corner of a tile
#[inline]
pub fn tile_to_px(tile_x: i32, tile_y: i32) -> IVec2 {
    IVec2::new(tile_x, tile_y) * consts::TILE_SIZE
}
