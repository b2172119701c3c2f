//! Timed enemy and power-up spawning
//!
//! All randomness comes through the caller's `Rng` so a seeded generator gives
//! a reproducible stream of spawns.

use glam::Vec2;
use rand::Rng;

use super::difficulty::Difficulty;
use super::state::{Enemy, EnemyArchetype, PowerUp};
use super::store::EntityStore;
use crate::consts::*;

/// What `spawn_due` added this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub enemy: bool,
    pub power_up: bool,
}

/// Build an enemy at the top edge for the given level
pub fn spawn_enemy<R: Rng>(level: u32, rng: &mut R) -> Enemy {
    let x = rng.random_range(ENEMY_EXTENT..WIDTH - ENEMY_EXTENT);
    let increment = rng.random_range(0..ENEMY_SPEED_SPREAD) as f32;
    let speed = ENEMY_BASE_SPEED + increment + level as f32 * ENEMY_SPEED_PER_LEVEL;
    let archetype = EnemyArchetype::from_index(rng.random_range(0..ENEMY_ARCHETYPES));
    Enemy::new(Vec2::new(x, HEIGHT), speed, archetype)
}

/// Build a power-up at the top edge
pub fn spawn_power_up<R: Rng>(rng: &mut R) -> PowerUp {
    let x = rng.random_range(POWER_UP_MARGIN..WIDTH - POWER_UP_MARGIN);
    PowerUp::new(Vec2::new(x, HEIGHT))
}

/// Fire whichever spawn timers have run past their interval
pub fn spawn_due<R: Rng>(
    clock: &mut Difficulty,
    store: &mut EntityStore,
    rng: &mut R,
) -> SpawnReport {
    let mut report = SpawnReport::default();

    if clock.enemy_spawn_ticks > clock.enemy_spawn_interval {
        let enemy = spawn_enemy(clock.level, rng);
        log::trace!(
            "Enemy {:?} at x={:.1} speed={:.1}",
            enemy.archetype,
            enemy.pos.x,
            enemy.speed
        );
        store.push_enemy(enemy);
        clock.enemy_spawn_ticks = 0;
        report.enemy = true;
    }

    if clock.power_up_ticks > POWER_UP_INTERVAL {
        let power_up = spawn_power_up(rng);
        log::debug!("Power-up at x={:.1}", power_up.pos.x);
        store.push_power_up(power_up);
        clock.power_up_ticks = 0;
        report.power_up = true;
    }

    report
}
