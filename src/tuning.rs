//! Data-driven game balance
//!
//! Every gameplay number the simulation uses, loadable from JSON. Missing
//! fields fall back to the built-in defaults, so a tuning file only needs
//! the values it changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Rect, collides_any, map};
use crate::tile_to_px;

/// Errors from reading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning JSON")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Gameplay balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_speed: i32,
    pub player_size: i32,
    pub player_max_health: u32,
    /// Start position in tiles
    pub player_start_tile: (i32, i32),

    // === Enemies ===
    pub enemy_speed: i32,
    pub enemy_size: i32,
    /// Health removed from the player on contact
    pub enemy_damage: u32,

    // === Generators ===
    pub spawn_interval_ms: u64,
    pub generator_hit_points: u32,

    // === Projectiles ===
    pub projectile_speed: i32,
    pub projectile_size: i32,
    pub shoot_cooldown_ms: u64,

    // === Visual ===
    /// Walk-cycle frames advanced per tick
    pub animation_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            player_size: PLAYER_SIZE,
            player_max_health: PLAYER_MAX_HEALTH,
            player_start_tile: (PLAYER_START_X, PLAYER_START_Y),

            enemy_speed: ENEMY_SPEED,
            enemy_size: ENEMY_SIZE,
            enemy_damage: ENEMY_DAMAGE,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            generator_hit_points: GENERATOR_HIT_POINTS,

            projectile_speed: PROJECTILE_SPEED,
            projectile_size: PROJECTILE_SIZE,
            shoot_cooldown_ms: SHOOT_COOLDOWN_MS,

            animation_speed: ANIMATION_SPEED,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("player_speed", self.player_speed),
            ("player_size", self.player_size),
            ("enemy_speed", self.enemy_speed),
            ("enemy_size", self.enemy_size),
            ("projectile_speed", self.projectile_speed),
            ("projectile_size", self.projectile_size),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(TuningError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        // Anything bigger than a tile can't fit the one-tile corridors
        for (name, value) in [("player_size", self.player_size), ("enemy_size", self.enemy_size)] {
            if value > TILE_SIZE {
                return Err(TuningError::Invalid(format!(
                    "{name} {value} is larger than a tile ({TILE_SIZE})"
                )));
            }
        }
        if self.player_max_health == 0 {
            return Err(TuningError::Invalid("player_max_health must be positive".into()));
        }
        if self.generator_hit_points == 0 {
            return Err(TuningError::Invalid("generator_hit_points must be positive".into()));
        }
        if self.spawn_interval_ms == 0 {
            return Err(TuningError::Invalid("spawn_interval_ms must be positive".into()));
        }
        let (tx, ty) = self.player_start_tile;
        if !(0..MAP_WIDTH).contains(&tx) || !(0..MAP_HEIGHT).contains(&ty) {
            return Err(TuningError::Invalid(format!(
                "player_start_tile ({tx}, {ty}) is outside the map"
            )));
        }
        let start = tile_to_px(tx, ty);
        let player = Rect::new(start.x, start.y, self.player_size, self.player_size);
        if collides_any(&player, &map::walls()) {
            return Err(TuningError::Invalid(format!(
                "player_start_tile ({tx}, {ty}) overlaps a wall"
            )));
        }
        if map::GENERATOR_TILES.contains(&(tx, ty)) {
            return Err(TuningError::Invalid(format!(
                "player_start_tile ({tx}, {ty}) is on a generator"
            )));
        }
        if !(self.animation_speed.is_finite() && self.animation_speed >= 0.0) {
            return Err(TuningError::Invalid("animation_speed must be finite and >= 0".into()));
        }

        if self.enemy_speed >= self.player_speed {
            log::warn!(
                "enemy_speed {} >= player_speed {}: the player can't outrun enemies",
                self.enemy_speed,
                self.player_speed
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides() {
        let tuning = Tuning::from_json(r#"{ "enemy_speed": 3, "spawn_interval_ms": 1500 }"#)
            .expect("valid tuning");
        assert_eq!(tuning.enemy_speed, 3);
        assert_eq!(tuning.spawn_interval_ms, 1500);
        assert_eq!(tuning.player_speed, PLAYER_SPEED);
        assert_eq!(tuning.player_max_health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_json_round_trip() {
        let mut tuning = Tuning::default();
        tuning.shoot_cooldown_ms = 100;
        let json = tuning.to_json().expect("serializes");
        assert_eq!(Tuning::from_json(&json).expect("parses"), tuning);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "player_speed": 0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "player_start_tile": [50, 3] }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "generator_hit_points": 0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(Tuning::from_json("{ nope"), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_rejects_start_in_wall() {
        for json in [
            r#"{ "player_start_tile": [0, 0] }"#,
            r#"{ "player_start_tile": [15, 10] }"#,
            r#"{ "player_start_tile": [5, 5] }"#,
            r#"{ "player_size": 200 }"#,
            r#"{ "enemy_size": 200 }"#,
        ] {
            assert!(
                matches!(Tuning::from_json(json), Err(TuningError::Invalid(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn test_tile_sized_entities_spawn_clear() {
        let tuning = Tuning::from_json(r#"{ "player_size": 32, "enemy_size": 32 }"#)
            .expect("tile-sized entities are allowed");
        let walls = map::walls();
        let start = tile_to_px(tuning.player_start_tile.0, tuning.player_start_tile.1);
        let player = Rect::new(start.x, start.y, tuning.player_size, tuning.player_size);
        assert!(!collides_any(&player, &walls));
        for &(tx, ty) in &map::GENERATOR_TILES {
            let pos = tile_to_px(tx, ty);
            let enemy = Rect::new(pos.x, pos.y, tuning.enemy_size, tuning.enemy_size);
            assert!(!collides_any(&enemy, &walls));
        }
    }

    #[test]
    fn test_missing_file() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io { .. }));
        assert!(err.to_string().contains("tuning.json"));
    }
}
