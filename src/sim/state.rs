//! Game state and core simulation types
//!
//! Everything the renderer reads and everything a tick mutates lives here.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::ai;
use super::anim::Animation;
use super::collision::{collides_any, move_and_slide, overlapping};
use super::map;
use super::rect::Rect;
use super::tick::TickInput;
use crate::camera::Camera;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::tile_to_px;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Player health hit zero
    GameOver,
}

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in screen space (y grows downward)
    pub fn vector(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }
}

/// A blocking map tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub rect: Rect,
}

impl Wall {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// A wall filling one map tile
    pub fn at_tile(tile_x: i32, tile_y: i32) -> Self {
        let pos = tile_to_px(tile_x, tile_y);
        Self::new(Rect::new(pos.x, pos.y, TILE_SIZE, TILE_SIZE))
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub speed: i32,
    /// Last direction moved; projectiles travel this way
    pub facing: Direction,
    pub health: u32,
    pub max_health: u32,
    /// Walk cycle, purely visual
    #[serde(skip)]
    pub animation: Animation,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        let start = tile_to_px(tuning.player_start_tile.0, tuning.player_start_tile.1);
        Self {
            rect: Rect::new(start.x, start.y, tuning.player_size, tuning.player_size),
            speed: tuning.player_speed,
            facing: Direction::Up,
            health: tuning.player_max_health,
            max_health: tuning.player_max_health,
            animation: Animation::default(),
        }
    }

    /// Move from held direction keys. Left beats right and up beats down; when
    /// both axes are pressed the vertical key decides the facing.
    pub fn update(&mut self, input: &TickInput, walls: &[Wall], animation_speed: f32) {
        let mut delta = IVec2::ZERO;

        if input.left {
            delta.x = -self.speed;
            self.facing = Direction::Left;
        } else if input.right {
            delta.x = self.speed;
            self.facing = Direction::Right;
        }

        if input.up {
            delta.y = -self.speed;
            self.facing = Direction::Up;
        } else if input.down {
            delta.y = self.speed;
            self.facing = Direction::Down;
        }

        self.rect = move_and_slide(self.rect, delta, walls);
        self.animation.advance(delta != IVec2::ZERO, animation_speed, WALK_FRAMES);
    }

    /// New projectile at the player's center, heading where the player faces
    pub fn shoot(&self, id: u32, tuning: &Tuning) -> Projectile {
        Projectile::new(
            id,
            self.rect.center(),
            self.facing,
            tuning.projectile_speed,
            tuning.projectile_size,
        )
    }

    /// Reduce health, flooring at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// An enemy that chases the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub rect: Rect,
    pub speed: i32,
    /// Health removed from the player on contact
    pub damage: u32,
}

impl Enemy {
    pub fn new(id: u32, pos: IVec2, tuning: &Tuning) -> Self {
        Self {
            id,
            rect: Rect::new(pos.x, pos.y, tuning.enemy_size, tuning.enemy_size),
            speed: tuning.enemy_speed,
            damage: tuning.enemy_damage,
        }
    }

    /// One chase step toward the player
    pub fn update(&mut self, player: &Player, walls: &[Wall]) {
        let step = ai::chase(self.rect, self.speed, player.rect.center(), walls);
        self.rect = step.rect;
    }
}

/// A stationary enemy spawner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generator {
    pub id: u32,
    pub rect: Rect,
    pub spawn_interval_ms: u64,
    pub last_spawn_ms: u64,
    pub hit_points: u32,
}

impl Generator {
    pub fn new(id: u32, tile_x: i32, tile_y: i32, tuning: &Tuning) -> Self {
        let pos = tile_to_px(tile_x, tile_y);
        Self {
            id,
            rect: Rect::new(pos.x, pos.y, TILE_SIZE, TILE_SIZE),
            spawn_interval_ms: tuning.spawn_interval_ms,
            last_spawn_ms: 0,
            hit_points: tuning.generator_hit_points,
        }
    }

    /// Spawn an enemy on top of the generator once the interval has elapsed.
    /// Returns true if an enemy was added.
    pub fn update(
        &mut self,
        now_ms: u64,
        ids: &mut EntityIds,
        enemies: &mut Vec<Enemy>,
        tuning: &Tuning,
    ) -> bool {
        if now_ms.saturating_sub(self.last_spawn_ms) < self.spawn_interval_ms {
            return false;
        }
        self.last_spawn_ms = now_ms;
        enemies.push(Enemy::new(ids.next(), self.rect.pos(), tuning));
        true
    }

    /// Remove one hit point, flooring at zero
    pub fn take_damage(&mut self) {
        self.hit_points = self.hit_points.saturating_sub(1);
    }

    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }
}

/// What a projectile did during one update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectileReport {
    /// False once the projectile hit a wall/enemy or left the map
    pub alive: bool,
    /// Generators that lost a hit point this tick
    pub damaged_generators: Vec<u32>,
    /// Generators that reached zero and were removed
    pub destroyed_generators: Vec<u32>,
    /// Enemies removed by the hit
    pub killed_enemies: u32,
}

/// A player shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub rect: Rect,
    pub direction: Direction,
    pub speed: i32,
    /// Generator IDs this projectile has already damaged (one hit per generator)
    #[serde(default)]
    pub hit_generators: Vec<u32>,
}

impl Projectile {
    pub fn new(id: u32, center: IVec2, direction: Direction, speed: i32, size: i32) -> Self {
        Self {
            id,
            rect: Rect::centered_at(center, IVec2::splat(size)),
            direction,
            speed,
            hit_generators: Vec::new(),
        }
    }

    /// Advance one tick and resolve hits, in priority order: wall, generator
    /// damage (non-terminal), enemy kill, leaving `bounds`.
    ///
    /// Damaged generators that reach zero hit points and killed enemies are
    /// removed from their collections before this returns, so the next
    /// projectile in the same tick sees the updated world.
    pub fn update(
        &mut self,
        walls: &[Wall],
        enemies: &mut Vec<Enemy>,
        generators: &mut Vec<Generator>,
        bounds: &Rect,
    ) -> ProjectileReport {
        let mut report = ProjectileReport::default();

        self.rect = self.rect.translated(self.direction.vector() * self.speed);

        if collides_any(&self.rect, walls) {
            return report;
        }

        let touching: Vec<usize> = overlapping(&self.rect, &generators[..], |g| &g.rect).collect();
        for index in touching {
            let generator = &mut generators[index];
            if self.hit_generators.contains(&generator.id) {
                continue;
            }
            generator.take_damage();
            self.hit_generators.push(generator.id);
            report.damaged_generators.push(generator.id);
            if generator.is_destroyed() {
                report.destroyed_generators.push(generator.id);
            }
        }
        if !report.destroyed_generators.is_empty() {
            generators.retain(|g| !g.is_destroyed());
        }

        let before = enemies.len();
        enemies.retain(|e| !e.rect.overlaps(&self.rect));
        let killed = before - enemies.len();
        if killed > 0 {
            report.killed_enemies = killed as u32;
            return report;
        }

        let pos = self.rect.pos();
        if pos.x < bounds.x || pos.x > bounds.right() || pos.y < bounds.y || pos.y > bounds.bottom()
        {
            return report;
        }

        report.alive = true;
        report
    }
}

/// Monotonic entity ID allocator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIds {
    next_id: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl EntityIds {
    /// Allocate a new entity ID
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Gameplay balance this run was built with
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation clock; only advances while playing
    pub clock_ms: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Map extent in pixels; projectiles past it are dropped
    pub bounds: Rect,
    pub player: Player,
    pub camera: Camera,
    /// Static map
    pub walls: Vec<Wall>,
    /// Live generators (sorted by id)
    pub generators: Vec<Generator>,
    /// Live enemies (sorted by id)
    pub enemies: Vec<Enemy>,
    /// Live projectiles (sorted by id)
    pub projectiles: Vec<Projectile>,
    /// Clock time of the last accepted shot
    pub last_shot_ms: Option<u64>,
    pub ids: EntityIds,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Fresh game on the built-in map, sitting at the title menu
    pub fn new(tuning: Tuning) -> Self {
        let mut ids = EntityIds::default();
        let walls = map::walls();
        let generators = map::GENERATOR_TILES
            .iter()
            .map(|&(tx, ty)| Generator::new(ids.next(), tx, ty, &tuning))
            .collect();

        Self {
            player: Player::new(&tuning),
            tuning,
            phase: GamePhase::Menu,
            clock_ms: 0,
            time_ticks: 0,
            bounds: Rect::new(0, 0, MAP_WIDTH_PX, MAP_HEIGHT_PX),
            camera: Camera::new(),
            walls,
            generators,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            last_shot_ms: None,
            ids,
        }
    }

    /// Same as `new` but with a caller-supplied layout (tests, custom arenas)
    pub fn with_layout(tuning: Tuning, walls: Vec<Wall>, generator_tiles: &[(i32, i32)]) -> Self {
        let mut state = Self::new(tuning);
        state.walls = walls;
        state.generators = generator_tiles
            .iter()
            .map(|&(tx, ty)| Generator::new(state.ids.next(), tx, ty, &state.tuning))
            .collect();
        state
    }

    /// Start over after game over. Walls and generators are part of the map
    /// and are left as they are.
    pub fn reset_run(&mut self) {
        self.player = Player::new(&self.tuning);
        self.camera.reset();
        self.enemies.clear();
        self.projectiles.clear();
        self.last_shot_ms = None;
    }

    /// Whether the shoot cooldown has elapsed
    pub fn can_shoot(&self) -> bool {
        match self.last_shot_ms {
            None => true,
            Some(last) => self.clock_ms.saturating_sub(last) >= self.tuning.shoot_cooldown_ms,
        }
    }

    /// Fire if the cooldown allows it; extra requests are dropped
    pub fn try_shoot(&mut self) -> bool {
        if !self.can_shoot() {
            return false;
        }
        self.last_shot_ms = Some(self.clock_ms);
        let id = self.ids.next();
        let projectile = self.player.shoot(id, &self.tuning);
        self.projectiles.push(projectile);
        true
    }

    /// Remove every enemy touching the player and apply its damage.
    /// Returns (enemies removed, total damage).
    pub fn resolve_player_contacts(&mut self) -> (u32, u32) {
        let player_rect = self.player.rect;
        let hits: Vec<usize> = overlapping(&player_rect, &self.enemies, |e| &e.rect).collect();
        if hits.is_empty() {
            return (0, 0);
        }

        let damage: u32 = hits.iter().map(|&i| self.enemies[i].damage).sum();
        self.enemies.retain(|e| !e.rect.overlaps(&player_rect));
        self.player.take_damage(damage);
        (hits.len() as u32, damage)
    }
}
