//! Collision detection and response
//!
//! Every test is a plain center-to-center distance against a fixed threshold
//! per pair kind. Entities deactivated earlier in the tick are skipped, never
//! removed, so indices stay valid until `EntityStore::compact`.

use super::difficulty::Difficulty;
use super::state::{GameEvent, Player};
use super::store::EntityStore;
use crate::consts::*;
use crate::within;

/// Tallies from one `resolve` pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub player_hits: u32,
    pub enemies_destroyed: u32,
    pub power_ups_collected: u32,
    /// The player ran out of lives during this pass
    pub lives_exhausted: bool,
}

/// Enemies touching the player are destroyed and cost a life each.
///
/// Stops at the hit that takes the last life.
pub fn player_vs_enemies(
    player: &mut Player,
    store: &mut EntityStore,
    events: &mut Vec<GameEvent>,
    report: &mut CollisionReport,
) {
    let threshold = player.size + ENEMY_HIT_PADDING;
    for enemy in store.enemies.iter_mut().filter(|e| e.active) {
        if !within(enemy.pos, player.pos, threshold) {
            continue;
        }
        enemy.active = false;
        report.player_hits += 1;
        events.push(GameEvent::PlayerHit);
        log::debug!("Player rammed at ({:.0}, {:.0})", enemy.pos.x, enemy.pos.y);
        if player.lose_life() {
            report.lives_exhausted = true;
            return;
        }
    }
}

/// Bullets destroy the first still-active enemy they overlap.
///
/// Scan order is bullets outer, enemies inner; a spent bullet or a destroyed
/// enemy cannot match again this tick.
pub fn bullets_vs_enemies(
    player: &mut Player,
    clock: &mut Difficulty,
    store: &mut EntityStore,
    events: &mut Vec<GameEvent>,
    report: &mut CollisionReport,
) {
    let EntityStore {
        bullets, enemies, ..
    } = store;

    for bullet in bullets.iter_mut().filter(|b| b.active) {
        let Some(enemy) = enemies
            .iter_mut()
            .find(|e| e.active && within(bullet.pos, e.pos, BULLET_HIT_RADIUS))
        else {
            continue;
        };
        bullet.active = false;
        enemy.active = false;
        player.add_score(ENEMY_SCORE);
        clock.register_hit();
        report.enemies_destroyed += 1;
        events.push(GameEvent::EnemyDestroyed);
    }
}

/// Power-ups touching the player grant a life (capped) and points
pub fn player_vs_power_ups(
    player: &mut Player,
    store: &mut EntityStore,
    events: &mut Vec<GameEvent>,
    report: &mut CollisionReport,
) {
    let threshold = player.size + POWER_UP_HIT_PADDING;
    for power_up in store.power_ups.iter_mut().filter(|p| p.active) {
        if !within(power_up.pos, player.pos, threshold) {
            continue;
        }
        power_up.active = false;
        player.gain_life();
        player.add_score(POWER_UP_SCORE);
        report.power_ups_collected += 1;
        events.push(GameEvent::PowerUpCollected);
        log::debug!("Power-up collected, lives now {}", player.lives);
    }
}

/// Run every pair check for one tick.
///
/// Once the last life is gone the remaining checks are skipped.
pub fn resolve(
    player: &mut Player,
    clock: &mut Difficulty,
    store: &mut EntityStore,
    events: &mut Vec<GameEvent>,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    player_vs_enemies(player, store, events, &mut report);
    if report.lives_exhausted {
        return report;
    }

    bullets_vs_enemies(player, clock, store, events, &mut report);
    player_vs_power_ups(player, store, events, &mut report);

    report
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::state::{Bullet, Enemy, EnemyArchetype, PowerUp};

    fn enemy(x: f32, y: f32) -> Enemy {
        Enemy::new(Vec2::new(x, y), 2.0, EnemyArchetype::Triangle)
    }

    struct Fixture {
        player: Player,
        clock: Difficulty,
        store: EntityStore,
        events: Vec<GameEvent>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                player: Player::default(),
                clock: Difficulty::default(),
                store: EntityStore::default(),
                events: Vec::new(),
            }
        }

        fn resolve(&mut self) -> CollisionReport {
            resolve(
                &mut self.player,
                &mut self.clock,
                &mut self.store,
                &mut self.events,
            )
        }
    }

    #[test]
    fn test_bullet_hit_scores_and_resets_clock() {
        let mut f = Fixture::new();
        f.clock.no_hit_ticks = 120;
        f.store.push_bullet(Bullet::new(Vec2::new(300.0, 300.0)));
        f.store.push_enemy(enemy(300.0, 319.0));

        let report = f.resolve();

        assert_eq!(report.enemies_destroyed, 1);
        assert!(!f.store.bullets[0].active);
        assert!(!f.store.enemies[0].active);
        assert_eq!(f.player.score, ENEMY_SCORE);
        assert_eq!(f.clock.no_hit_ticks, 0);
        assert_eq!(f.events, vec![GameEvent::EnemyDestroyed]);
    }

    #[test]
    fn test_bullet_miss_at_threshold() {
        let mut f = Fixture::new();
        f.store.push_bullet(Bullet::new(Vec2::new(300.0, 300.0)));
        f.store.push_enemy(enemy(300.0, 320.0));

        let report = f.resolve();

        assert_eq!(report.enemies_destroyed, 0);
        assert!(f.store.bullets[0].active);
        assert!(f.store.enemies[0].active);
        assert_eq!(f.player.score, 0);
    }

    #[test]
    fn test_bullet_only_takes_first_enemy() {
        let mut f = Fixture::new();
        f.store.push_bullet(Bullet::new(Vec2::new(300.0, 300.0)));
        f.store.push_enemy(enemy(305.0, 300.0));
        f.store.push_enemy(enemy(295.0, 300.0));

        f.resolve();

        assert!(!f.store.enemies[0].active);
        assert!(f.store.enemies[1].active);
        assert_eq!(f.player.score, ENEMY_SCORE);
    }

    #[test]
    fn test_destroyed_enemy_not_matched_by_later_bullet() {
        let mut f = Fixture::new();
        f.store.push_bullet(Bullet::new(Vec2::new(300.0, 300.0)));
        f.store.push_bullet(Bullet::new(Vec2::new(302.0, 300.0)));
        f.store.push_enemy(enemy(301.0, 305.0));

        let report = f.resolve();

        assert_eq!(report.enemies_destroyed, 1);
        assert!(!f.store.bullets[0].active);
        assert!(f.store.bullets[1].active);
        assert_eq!(f.player.score, ENEMY_SCORE);
    }

    #[test]
    fn test_player_ram_costs_one_life() {
        let mut f = Fixture::new();
        let p = f.player.pos;
        f.store.push_enemy(enemy(p.x + 34.0, p.y));
        f.store.push_enemy(enemy(p.x + 35.0, p.y));

        let report = f.resolve();

        assert_eq!(report.player_hits, 1);
        assert_eq!(f.player.lives, STARTING_LIVES - 1);
        assert!(!f.store.enemies[0].active);
        assert!(f.store.enemies[1].active);
    }

    #[test]
    fn test_last_life_stops_resolution() {
        let mut f = Fixture::new();
        f.player.lives = 1;
        let p = f.player.pos;
        f.store.push_enemy(enemy(p.x, p.y));
        f.store.push_enemy(enemy(p.x + 1.0, p.y));
        f.store.push_power_up(PowerUp::new(p));

        let report = f.resolve();

        assert!(report.lives_exhausted);
        assert_eq!(f.player.lives, 0);
        assert_eq!(report.player_hits, 1);
        assert!(f.store.enemies[1].active);
        assert!(f.store.power_ups[0].active);
    }

    #[test]
    fn test_power_up_caps_lives_but_scores() {
        let mut f = Fixture::new();
        f.player.lives = MAX_LIVES;
        let p = f.player.pos;
        f.store.push_power_up(PowerUp::new(Vec2::new(p.x, p.y + 29.0)));

        let report = f.resolve();

        assert_eq!(report.power_ups_collected, 1);
        assert_eq!(f.player.lives, MAX_LIVES);
        assert_eq!(f.player.score, POWER_UP_SCORE);
        assert!(!f.store.power_ups[0].active);
    }

    #[test]
    fn test_power_up_grants_life() {
        let mut f = Fixture::new();
        let p = f.player.pos;
        f.store.push_power_up(PowerUp::new(p));
        f.resolve();
        assert_eq!(f.player.lives, STARTING_LIVES + 1);
    }

    #[test]
    fn test_inactive_entities_ignored() {
        let mut f = Fixture::new();
        let p = f.player.pos;
        f.store.push_enemy(enemy(p.x, p.y));
        f.store.enemies[0].active = false;
        f.store.push_bullet(Bullet::new(Vec2::new(500.0, 500.0)));
        f.store.bullets[0].active = false;
        f.store.push_enemy(enemy(500.0, 500.0));

        let report = f.resolve();

        assert_eq!(report, CollisionReport::default());
        assert_eq!(f.player.lives, STARTING_LIVES);
    }
}
