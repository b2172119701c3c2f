//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation one frame. The host calls
//! `tick` at `TICK_RATE_HZ` and renders the resulting state afterwards.

use rand::Rng;

use super::collision;
use super::difficulty::Penalty;
use super::kinematics;
use super::spawner;
use super::state::{Bullet, GameEvent, GameMode, GameState};

/// Logical actions sampled once per tick.
///
/// `shoot` and `confirm` are expected to be edge-triggered by the input
/// collector so a held key fires once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
    pub confirm: bool,
    pub quit: bool,
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the game state by one fixed timestep
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) -> TickOutcome {
    state.events.clear();

    if input.quit {
        log::info!("Quit requested in {:?}", state.mode);
        return TickOutcome::Quit;
    }

    match state.mode {
        GameMode::Menu | GameMode::GameOver => {
            if input.confirm {
                log::info!("Starting new run from {:?}", state.mode);
                state.restart();
            }
            return TickOutcome::Continue;
        }
        GameMode::Playing => {}
    }

    state.time_ticks += 1;

    if input.shoot {
        state.store.push_bullet(Bullet::new(state.player.muzzle()));
        state.events.push(GameEvent::ShotFired);
    }

    if let Some(level) = state.difficulty.advance() {
        state.events.push(GameEvent::LevelUp { level });
    }

    match state.difficulty.apply_survival_penalty(&mut state.player) {
        Penalty::None => {}
        Penalty::LifeLost => state.events.push(GameEvent::SurvivalPenalty),
        Penalty::Exhausted => {
            state.events.push(GameEvent::SurvivalPenalty);
            state.end_run();
        }
    }

    if state.is_playing() {
        simulate(state, input, rng);
    }

    state.store.compact();
    TickOutcome::Continue
}

/// Movement, spawning and collisions for a tick that is still in Playing
fn simulate<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) {
    kinematics::steer_player(&mut state.player, input);

    let spawned = spawner::spawn_due(&mut state.difficulty, &mut state.store, rng);
    if spawned.enemy {
        state.events.push(GameEvent::EnemySpawned);
    }
    if spawned.power_up {
        state.events.push(GameEvent::PowerUpSpawned);
    }

    kinematics::advance(&mut state.store);

    let report = collision::resolve(
        &mut state.player,
        &mut state.difficulty,
        &mut state.store,
        &mut state.events,
    );
    if report.lives_exhausted {
        state.end_run();
    }
}
