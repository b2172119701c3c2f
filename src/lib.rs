//! Space Defender - a single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, difficulty, game modes)
//! - `renderer`: Terminal renderer that draws a read-only view of the simulation
//! - `platform`: Input collection from terminal key events
//! - `settings`: Host configuration loaded from JSON

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
///
/// World coordinates are y-up with the origin at the bottom-left corner of the
/// playfield.
pub mod consts {
    /// Fixed simulation rate
    pub const TICK_RATE_HZ: u32 = 60;

    /// Playfield dimensions (world units)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_X: f32 = WIDTH / 2.0;
    pub const PLAYER_START_Y: f32 = 50.0;
    pub const STARTING_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 5;

    /// Bullets leave the nose of the ship and travel straight up
    pub const BULLET_SPEED: f32 = 10.0;

    /// Enemy speed = base + random increment in [0, SPREAD) + level * per-level
    pub const ENEMY_BASE_SPEED: f32 = 2.0;
    pub const ENEMY_SPEED_SPREAD: u32 = 3;
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.5;
    /// Half-extent kept clear of the side walls when spawning enemies
    pub const ENEMY_EXTENT: f32 = 20.0;
    pub const ENEMY_ARCHETYPES: u32 = 4;

    pub const POWER_UP_SPEED: f32 = 1.5;
    pub const POWER_UP_MARGIN: f32 = 20.0;
    /// Ticks between power-up spawns (independent of level)
    pub const POWER_UP_INTERVAL: u32 = 300;

    /// How far past a vertical boundary an entity may drift before it is culled
    pub const BULLET_CULL_MARGIN: f32 = 0.0;
    pub const ENEMY_CULL_MARGIN: f32 = 30.0;
    pub const POWER_UP_CULL_MARGIN: f32 = 20.0;

    /// Difficulty progression
    pub const LEVEL_DURATION_TICKS: u32 = 900;
    pub const MAX_LEVEL: u32 = 3;
    pub const BASE_SPAWN_INTERVAL: u32 = 60;
    pub const SPAWN_INTERVAL_STEP: u32 = 25;

    /// Ticks without a bullet hit before a life is taken
    pub const NO_HIT_PENALTY_TICKS: u32 = 300;

    /// Collision thresholds (center distance)
    pub const ENEMY_HIT_PADDING: f32 = 15.0;
    pub const POWER_UP_HIT_PADDING: f32 = 10.0;
    pub const BULLET_HIT_RADIUS: f32 = 20.0;

    /// Score rewards
    pub const ENEMY_SCORE: u64 = 10;
    pub const POWER_UP_SCORE: u64 = 20;
}

/// True when two centers are strictly closer than `threshold`
#[inline]
pub fn within(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance(b) < threshold
}

/// True when `y` has drifted more than `margin` past the top or bottom of the playfield
#[inline]
pub fn outside_vertical(y: f32, margin: f32) -> bool {
    y > consts::HEIGHT + margin || y < -margin
}
