//! Read-only render snapshot
//!
//! Whatever draws the game gets a `Frame` each tick: screen-space boxes for
//! every visible entity, HUD numbers and which overlay to show. It never
//! touches `GameState` directly.

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::sim::{Direction, GamePhase, GameState, Rect};

/// Full-screen overlay drawn on top of the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    None,
    /// Title or pause menu
    Menu { resume: bool },
    GameOver,
}

impl Overlay {
    pub fn for_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Menu => Overlay::Menu { resume: false },
            GamePhase::Paused => Overlay::Menu { resume: true },
            GamePhase::GameOver => Overlay::GameOver,
            GamePhase::Playing => Overlay::None,
        }
    }

    /// Text of the selectable option, if the overlay has one
    pub fn option_label(&self) -> Option<&'static str> {
        match self {
            Overlay::Menu { resume: false } => Some("Play"),
            Overlay::Menu { resume: true } => Some("Resume"),
            Overlay::GameOver => Some("Restart"),
            Overlay::None => None,
        }
    }
}

/// Numbers shown in the corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub health: u32,
    pub max_health: u32,
    pub enemies: usize,
    pub generators: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSprite {
    pub rect: Rect,
    pub hit_points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSprite {
    pub rect: Rect,
    pub facing: Direction,
    pub frame: usize,
    pub moving: bool,
}

/// Everything needed to draw one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub phase: GamePhase,
    pub overlay: Overlay,
    pub walls: Vec<Rect>,
    pub generators: Vec<GeneratorSprite>,
    pub enemies: Vec<Rect>,
    pub projectiles: Vec<Rect>,
    pub player: PlayerSprite,
    pub hud: Hud,
}

impl Frame {
    /// Snapshot `state` as seen through `camera`, culling anything off screen
    pub fn capture(state: &GameState, camera: &Camera) -> Self {
        let view = camera.visible();
        let visible = |rect: &Rect| rect.overlaps(&view).then(|| camera.apply(rect));

        let player = &state.player;
        Self {
            phase: state.phase,
            overlay: Overlay::for_phase(state.phase),
            walls: state.walls.iter().filter_map(|w| visible(&w.rect)).collect(),
            generators: state
                .generators
                .iter()
                .filter_map(|g| {
                    visible(&g.rect).map(|rect| GeneratorSprite {
                        rect,
                        hit_points: g.hit_points,
                    })
                })
                .collect(),
            enemies: state.enemies.iter().filter_map(|e| visible(&e.rect)).collect(),
            projectiles: state
                .projectiles
                .iter()
                .filter_map(|p| visible(&p.rect))
                .collect(),
            player: PlayerSprite {
                rect: camera.apply(&player.rect),
                facing: player.facing,
                frame: player.animation.current_frame(),
                moving: player.animation.moving,
            },
            hud: Hud {
                health: player.health,
                max_health: player.max_health,
                enemies: state.enemies.len(),
                generators: state.generators.len(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{Enemy, TickInput, tick};
    use glam::IVec2;

    #[test]
    fn test_overlay_labels() {
        assert_eq!(Overlay::for_phase(GamePhase::Menu).option_label(), Some("Play"));
        assert_eq!(Overlay::for_phase(GamePhase::Paused).option_label(), Some("Resume"));
        assert_eq!(Overlay::for_phase(GamePhase::Playing), Overlay::None);
        assert_eq!(Overlay::None.option_label(), None);
    }

    #[test]
    fn test_capture_is_camera_relative_and_culled() {
        let mut state = GameState::default();
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, SIM_DT_MS);
        tick(&mut state, &TickInput::default(), SIM_DT_MS);

        let tuning = state.tuning.clone();
        let near = state.player.rect.pos() + IVec2::new(64, 0);
        state.enemies.push(Enemy::new(900, near, &tuning));
        state.enemies.push(Enemy::new(901, IVec2::new(40, 40), &tuning));

        let frame = Frame::capture(&state, &state.camera);
        let offset = state.camera.offset;
        assert_eq!(frame.player.rect.pos(), state.player.rect.pos() - offset);
        assert_eq!(frame.enemies, vec![state.enemies[0].rect.translated(-offset)]);
        assert_eq!(frame.hud.enemies, 2);
        assert_eq!(frame.hud.health, PLAYER_MAX_HEALTH);
        assert_eq!(frame.overlay, Overlay::None);

        let screen = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);
        assert!(frame.walls.iter().all(|w| w.overlaps(&screen)));
        assert!(!frame.walls.is_empty());
    }

    #[test]
    fn test_capture_through_other_camera() {
        let state = GameState::default();
        let mut camera = Camera::new();
        camera.follow(&Rect::new(MAP_WIDTH_PX - 40, MAP_HEIGHT_PX - 40, 28, 28));

        let frame = Frame::capture(&state, &camera);
        // Only the bottom-right generator is in view
        assert_eq!(frame.generators.len(), 1);
        let generator = &state.generators[3];
        assert_eq!(frame.generators[0].rect, generator.rect.translated(-camera.offset));
        assert!(frame.walls.len() < state.walls.len());
    }

    #[test]
    fn test_frame_serializes() {
        let state = GameState::default();
        let frame = Frame::capture(&state, &state.camera);
        let json = serde_json::to_string(&frame).expect("frame serializes");
        assert!(json.contains("\"Menu\""));
    }
}
