//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - Stable iteration order (insertion order, preserved by compaction)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod kinematics;
pub mod spawner;
pub mod state;
pub mod store;
pub mod tick;

pub use collision::{CollisionReport, resolve};
pub use difficulty::{Difficulty, Penalty, spawn_interval_for_level};
pub use spawner::{SpawnReport, spawn_due, spawn_enemy, spawn_power_up};
pub use state::{Bullet, Enemy, EnemyArchetype, GameEvent, GameMode, GameState, Player, PowerUp};
pub use store::EntityStore;
pub use tick::{TickInput, TickOutcome, tick};
