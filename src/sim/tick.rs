//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};

/// Logical keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalKey {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Confirm,
    Pause,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 7] = [
        LogicalKey::Up,
        LogicalKey::Down,
        LogicalKey::Left,
        LogicalKey::Right,
        LogicalKey::Fire,
        LogicalKey::Confirm,
        LogicalKey::Pause,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalKey::Up => "UP",
            LogicalKey::Down => "DOWN",
            LogicalKey::Left => "LEFT",
            LogicalKey::Right => "RIGHT",
            LogicalKey::Fire => "FIRE",
            LogicalKey::Confirm => "CONFIRM",
            LogicalKey::Pause => "PAUSE",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Shoot request (one-shot, subject to cooldown)
    pub fire: bool,
    /// Menu select / resume / restart
    pub confirm: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Snapshot from any "is this key down" lookup
    pub fn from_lookup(mut pressed: impl FnMut(LogicalKey) -> bool) -> Self {
        Self {
            up: pressed(LogicalKey::Up),
            down: pressed(LogicalKey::Down),
            left: pressed(LogicalKey::Left),
            right: pressed(LogicalKey::Right),
            fire: pressed(LogicalKey::Fire),
            confirm: pressed(LogicalKey::Confirm),
            pause: pressed(LogicalKey::Pause),
        }
    }

    pub fn is_pressed(&self, key: LogicalKey) -> bool {
        match key {
            LogicalKey::Up => self.up,
            LogicalKey::Down => self.down,
            LogicalKey::Left => self.left,
            LogicalKey::Right => self.right,
            LogicalKey::Fire => self.fire,
            LogicalKey::Confirm => self.confirm,
            LogicalKey::Pause => self.pause,
        }
    }
}

/// What happened during one tick, for sound/HUD hooks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub enemies_spawned: u32,
    pub enemies_killed: u32,
    pub generators_destroyed: u32,
    /// Enemies consumed by touching the player
    pub player_hits: u32,
    pub damage_taken: u32,
    pub shots_fired: u32,
    /// New phase, if the phase changed this tick
    pub phase_changed: Option<GamePhase>,
}

/// Phase change caused by this tick's input, if any. Entering `GameOver` is
/// not input-driven; it happens inside the world step.
pub fn transition(phase: GamePhase, input: &TickInput) -> Option<GamePhase> {
    match phase {
        GamePhase::Menu if input.confirm => Some(GamePhase::Playing),
        GamePhase::Playing if input.pause => Some(GamePhase::Paused),
        GamePhase::Paused if input.confirm || input.pause => Some(GamePhase::Playing),
        GamePhase::GameOver if input.confirm => Some(GamePhase::Playing),
        _ => None,
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: u64) -> TickEvents {
    let mut events = TickEvents::default();
    let before = state.phase;

    if let Some(next) = transition(state.phase, input) {
        if before == GamePhase::GameOver {
            state.reset_run();
            log::info!("Restarting run");
        }
        state.phase = next;
    } else if state.phase == GamePhase::Playing {
        step_world(state, input, dt_ms, &mut events);
    }

    if state.phase != before {
        log::info!("Phase {:?} -> {:?}", before, state.phase);
        events.phase_changed = Some(state.phase);
    }
    events
}

/// One PLAYING tick: player, camera, generators, enemies, projectiles, contact
fn step_world(state: &mut GameState, input: &TickInput, dt_ms: u64, events: &mut TickEvents) {
    state.clock_ms += dt_ms;
    state.time_ticks += 1;
    let now = state.clock_ms;

    // Fire before moving, so the shot leaves from where the player stood
    if input.fire && state.try_shoot() {
        events.shots_fired += 1;
    }

    state
        .player
        .update(input, &state.walls, state.tuning.animation_speed);

    state.camera.follow(&state.player.rect);

    for generator in state.generators.iter_mut() {
        if generator.update(now, &mut state.ids, &mut state.enemies, &state.tuning) {
            events.enemies_spawned += 1;
        }
    }
    if events.enemies_spawned > 0 {
        log::debug!(
            "Spawned {} enemies ({} alive)",
            events.enemies_spawned,
            state.enemies.len()
        );
    }

    for enemy in state.enemies.iter_mut() {
        enemy.update(&state.player, &state.walls);
    }

    // Projectiles mutate enemies/generators as they go; spent shots are swept after
    let mut spent: Vec<u32> = Vec::new();
    for projectile in state.projectiles.iter_mut() {
        let report = projectile.update(
            &state.walls,
            &mut state.enemies,
            &mut state.generators,
            &state.bounds,
        );
        events.enemies_killed += report.killed_enemies;
        for id in &report.destroyed_generators {
            log::info!("Generator {} destroyed", id);
        }
        events.generators_destroyed += report.destroyed_generators.len() as u32;
        if !report.alive {
            spent.push(projectile.id);
        }
    }
    if !spent.is_empty() {
        state.projectiles.retain(|p| !spent.contains(&p.id));
    }

    let (hits, damage) = state.resolve_player_contacts();
    events.player_hits = hits;
    events.damage_taken = damage;

    if state.player.is_dead() {
        log::info!(
            "Game over after {} ticks ({} enemies alive)",
            state.time_ticks,
            state.enemies.len()
        );
        state.phase = GamePhase::GameOver;
    }
}
