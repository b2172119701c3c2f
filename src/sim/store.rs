//! Entity collections
//!
//! One `Vec` per entity kind. Consumers flip `active` off during a tick and
//! `compact` removes them afterwards, so nothing is removed while it is being
//! iterated.

use serde::{Deserialize, Serialize};

use super::state::{Bullet, Enemy, PowerUp};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityStore {
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
}

impl EntityStore {
    pub fn push_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    pub fn push_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn push_power_up(&mut self, power_up: PowerUp) {
        self.power_ups.push(power_up);
    }

    pub fn active_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.active)
    }

    pub fn active_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.active)
    }

    pub fn active_power_ups(&self) -> impl Iterator<Item = &PowerUp> {
        self.power_ups.iter().filter(|p| p.active)
    }

    /// Drop every inactive entity, keeping the survivors in order
    pub fn compact(&mut self) -> usize {
        let before = self.len();
        self.bullets.retain(|b| b.active);
        self.enemies.retain(|e| e.active);
        self.power_ups.retain(|p| p.active);
        let removed = before - self.len();
        if removed > 0 {
            log::trace!("Compacted {} inactive entities", removed);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
        self.enemies.clear();
        self.power_ups.clear();
    }

    /// Total entities across all kinds, active or not
    pub fn len(&self) -> usize {
        self.bullets.len() + self.enemies.len() + self.power_ups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when nothing inactive is waiting for `compact`
    pub fn is_compact(&self) -> bool {
        self.bullets.iter().all(|b| b.active)
            && self.enemies.iter().all(|e| e.active)
            && self.power_ups.iter().all(|p| p.active)
    }
}
