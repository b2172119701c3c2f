//! Game state and core simulation types
//!
//! Everything the tick mutates lives in one `GameState` aggregate; there are no
//! statics. Construct a fresh state per run or per test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::store::EntityStore;
use crate::consts::*;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen, waiting for confirm
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for confirm to restart
    GameOver,
}

/// The player's craft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Collision/drawing radius proxy
    pub size: f32,
    pub speed: f32,
    /// Always within `0..=MAX_LIVES`
    pub lives: u8,
    pub score: u64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            lives: STARTING_LIVES,
            score: 0,
        }
    }
}

impl Player {
    /// Take one life; never goes below zero. Returns true if that was the last one.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    /// Grant one life, capped at `MAX_LIVES`
    pub fn gain_life(&mut self) {
        self.lives = (self.lives + 1).min(MAX_LIVES);
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Where a freshly fired bullet starts
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y + self.size)
    }
}

/// A player bullet travelling straight up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub speed: f32,
    pub active: bool,
}

impl Bullet {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            speed: BULLET_SPEED,
            active: true,
        }
    }
}

/// Cosmetic enemy variants. Only the renderer looks at this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyArchetype {
    Circle,
    Triangle,
    Square,
    Diamond,
}

impl EnemyArchetype {
    pub const ALL: [EnemyArchetype; 4] = [
        EnemyArchetype::Circle,
        EnemyArchetype::Triangle,
        EnemyArchetype::Square,
        EnemyArchetype::Diamond,
    ];

    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % ENEMY_ARCHETYPES) as usize]
    }
}

/// A descending enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub speed: f32,
    pub active: bool,
    pub archetype: EnemyArchetype,
}

impl Enemy {
    pub fn new(pos: Vec2, speed: f32, archetype: EnemyArchetype) -> Self {
        Self {
            pos,
            speed,
            active: true,
            archetype,
        }
    }
}

/// A descending extra-life pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub speed: f32,
    pub active: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            speed: POWER_UP_SPEED,
            active: true,
        }
    }
}

/// Things that happened during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began (from Menu or GameOver)
    Started,
    ShotFired,
    EnemySpawned,
    PowerUpSpawned,
    /// A bullet destroyed an enemy
    EnemyDestroyed,
    /// An enemy rammed the player
    PlayerHit,
    PowerUpCollected,
    LevelUp { level: u32 },
    /// A life was taken for going too long without a hit
    SurvivalPenalty,
    GameOver { score: u64 },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    pub player: Player,
    pub store: EntityStore,
    pub difficulty: Difficulty,
    /// Ticks simulated while Playing in the current run
    pub time_ticks: u64,
    /// Events raised by the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state sitting on the title screen
    pub fn new() -> Self {
        Self {
            mode: GameMode::Menu,
            player: Player::default(),
            store: EntityStore::default(),
            difficulty: Difficulty::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Reset everything for a new run and enter Playing
    pub fn restart(&mut self) {
        self.player = Player::default();
        self.store.clear();
        self.difficulty = Difficulty::default();
        self.time_ticks = 0;
        self.mode = GameMode::Playing;
        self.events.push(GameEvent::Started);
    }

    /// Enter GameOver. Only meaningful while Playing.
    pub fn end_run(&mut self) {
        if self.mode == GameMode::Playing {
            self.mode = GameMode::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.player.score,
            });
            log::info!(
                "Game over: score {} at level {} after {} ticks",
                self.player.score,
                self.difficulty.level,
                self.time_ticks
            );
        }
    }

    pub fn is_playing(&self) -> bool {
        self.mode == GameMode::Playing
    }
}
