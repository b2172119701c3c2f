//! Difficulty tiers and the survival clock

use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::consts::*;

/// Ticks between enemy spawns at a given level (60, 35, 10)
pub fn spawn_interval_for_level(level: u32) -> u32 {
    let steps = level.clamp(1, MAX_LEVEL) - 1;
    BASE_SPAWN_INTERVAL.saturating_sub(steps * SPAWN_INTERVAL_STEP)
}

/// Level and per-run counters, all measured in ticks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    /// 1..=MAX_LEVEL, never decreases within a run
    pub level: u32,
    pub enemy_spawn_interval: u32,
    pub level_ticks: u32,
    pub enemy_spawn_ticks: u32,
    pub power_up_ticks: u32,
    /// Ticks since the last bullet hit
    pub no_hit_ticks: u32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            level: 1,
            enemy_spawn_interval: spawn_interval_for_level(1),
            level_ticks: 0,
            enemy_spawn_ticks: 0,
            power_up_ticks: 0,
            no_hit_ticks: 0,
        }
    }
}

/// Outcome of the survival check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    None,
    /// A life was taken and some remain
    LifeLost,
    /// The last life was taken
    Exhausted,
}

impl Difficulty {
    /// Count one tick and apply the level-up rule.
    ///
    /// Returns the new level when this tick promoted the player.
    pub fn advance(&mut self) -> Option<u32> {
        self.level_ticks += 1;
        self.enemy_spawn_ticks += 1;
        self.power_up_ticks += 1;
        self.no_hit_ticks += 1;

        if self.level_ticks < LEVEL_DURATION_TICKS {
            return None;
        }

        // The level timer restarts whether or not we are already at the cap
        self.level_ticks = 0;
        if self.level >= MAX_LEVEL {
            return None;
        }

        self.level += 1;
        self.enemy_spawn_interval = spawn_interval_for_level(self.level);
        log::info!(
            "Level {} reached, enemy spawn interval now {} ticks",
            self.level,
            self.enemy_spawn_interval
        );
        Some(self.level)
    }

    pub fn register_hit(&mut self) {
        self.no_hit_ticks = 0;
    }

    pub fn survival_expired(&self) -> bool {
        self.no_hit_ticks >= NO_HIT_PENALTY_TICKS
    }

    /// Take a life if the player has gone too long without a hit
    pub fn apply_survival_penalty(&mut self, player: &mut Player) -> Penalty {
        if !self.survival_expired() || player.lives == 0 {
            return Penalty::None;
        }
        self.no_hit_ticks = 0;
        let exhausted = player.lose_life();
        log::info!("No hit for {} ticks, lives now {}", NO_HIT_PENALTY_TICKS, player.lives);
        if exhausted {
            Penalty::Exhausted
        } else {
            Penalty::LifeLost
        }
    }
}
