//! Movement and boundary deactivation

use super::state::Player;
use super::store::EntityStore;
use super::tick::TickInput;
use crate::consts::*;
use crate::outside_vertical;

/// Move the player by the held directions, clamped inside the playfield.
///
/// Opposite directions cancel out.
pub fn steer_player(player: &mut Player, input: &TickInput) {
    let mut dx = 0.0;
    let mut dy = 0.0;
    if input.left {
        dx -= player.speed;
    }
    if input.right {
        dx += player.speed;
    }
    if input.up {
        dy += player.speed;
    }
    if input.down {
        dy -= player.speed;
    }

    player.pos.x = (player.pos.x + dx).clamp(player.size, WIDTH - player.size);
    player.pos.y = (player.pos.y + dy).clamp(player.size, HEIGHT - player.size);
}

/// Advance every active entity one tick and flag the ones that left the playfield
pub fn advance(store: &mut EntityStore) {
    for bullet in store.bullets.iter_mut().filter(|b| b.active) {
        bullet.pos.y += bullet.speed;
        if outside_vertical(bullet.pos.y, BULLET_CULL_MARGIN) {
            bullet.active = false;
        }
    }

    for enemy in store.enemies.iter_mut().filter(|e| e.active) {
        enemy.pos.y -= enemy.speed;
        if outside_vertical(enemy.pos.y, ENEMY_CULL_MARGIN) {
            enemy.active = false;
        }
    }

    for power_up in store.power_ups.iter_mut().filter(|p| p.active) {
        power_up.pos.y -= power_up.speed;
        if outside_vertical(power_up.pos.y, POWER_UP_CULL_MARGIN) {
            power_up.active = false;
        }
    }
}
