use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use space_defender::consts::*;
use space_defender::sim::{
    Difficulty, Enemy, EnemyArchetype, EntityStore, GameEvent, GameMode, GameState, Player,
    PowerUp, TickInput, collision, kinematics, tick,
};

fn start_run(rng: &mut Pcg32) -> GameState {
    let mut state = GameState::new();
    let confirm = TickInput {
        confirm: true,
        ..Default::default()
    };
    tick(&mut state, &confirm, rng);
    assert_eq!(state.mode, GameMode::Playing);
    state
}

#[test]
fn falling_enemy_rams_player_exactly_once() {
    let mut player = Player::default();
    player.pos = Vec2::new(400.0, 50.0);
    let mut clock = Difficulty::default();
    let mut store = EntityStore::default();
    let mut events = Vec::new();
    store.push_enemy(Enemy::new(Vec2::new(400.0, 600.0), 3.0, EnemyArchetype::Diamond));

    let mut hits = 0;
    for _ in 0..184 {
        kinematics::advance(&mut store);
        hits += collision::resolve(&mut player, &mut clock, &mut store, &mut events).player_hits;
        store.compact();
    }

    assert_eq!(hits, 1);
    assert_eq!(player.lives, STARTING_LIVES - 1);
    assert!(store.enemies.is_empty());
    assert_eq!(
        events.iter().filter(|e| **e == GameEvent::PlayerHit).count(),
        1
    );
}

#[test]
fn survival_penalty_every_300_ticks_without_a_hit() {
    let mut rng = Pcg32::seed_from_u64(2024);
    let mut state = start_run(&mut rng);
    let idle = TickInput::default();

    let mut penalties = 0;
    for _ in 0..NO_HIT_PENALTY_TICKS {
        tick(&mut state, &idle, &mut rng);
        penalties += state
            .events
            .iter()
            .filter(|e| **e == GameEvent::SurvivalPenalty)
            .count();
        // Keep spawned enemies away from the player
        state.store.clear();
    }
    assert_eq!(penalties, 1);
    assert_eq!(state.player.lives, STARTING_LIVES - 1);
    assert_eq!(state.difficulty.no_hit_ticks, 0);

    for _ in 0..NO_HIT_PENALTY_TICKS - 1 {
        tick(&mut state, &idle, &mut rng);
        assert!(!state.events.contains(&GameEvent::SurvivalPenalty));
        state.store.clear();
    }
    tick(&mut state, &idle, &mut rng);
    assert!(state.events.contains(&GameEvent::SurvivalPenalty));
    assert_eq!(state.player.lives, STARTING_LIVES - 2);
}

#[test]
fn survival_penalty_runs_out_lives() {
    let mut rng = Pcg32::seed_from_u64(5);
    let mut state = start_run(&mut rng);
    let idle = TickInput::default();

    let mut ticks = 0;
    while state.mode == GameMode::Playing {
        tick(&mut state, &idle, &mut rng);
        state.store.clear();
        ticks += 1;
    }
    assert_eq!(ticks, NO_HIT_PENALTY_TICKS * STARTING_LIVES as u32);
    assert_eq!(state.player.lives, 0);
    assert_eq!(state.mode, GameMode::GameOver);
}

#[test]
fn levels_advance_every_900_ticks_and_cap_at_3() {
    let mut rng = Pcg32::seed_from_u64(31337);
    let mut state = start_run(&mut rng);
    let idle = TickInput::default();

    let mut run_ticks = |state: &mut GameState, n: u32| {
        for _ in 0..n {
            tick(state, &idle, &mut rng);
            // Stand in for steady hits so the survival clock never fires
            state.difficulty.no_hit_ticks = 0;
            state.store.clear();
        }
    };

    run_ticks(&mut state, LEVEL_DURATION_TICKS - 1);
    assert_eq!(state.difficulty.level, 1);
    run_ticks(&mut state, 1);
    assert_eq!(state.difficulty.level, 2);
    assert_eq!(state.difficulty.enemy_spawn_interval, 35);

    run_ticks(&mut state, LEVEL_DURATION_TICKS);
    assert_eq!(state.difficulty.level, 3);
    assert_eq!(state.difficulty.enemy_spawn_interval, 10);

    run_ticks(&mut state, LEVEL_DURATION_TICKS);
    assert_eq!(state.difficulty.level, 3);
    assert_eq!(state.difficulty.enemy_spawn_interval, 10);
    assert_eq!(state.mode, GameMode::Playing);
}

#[test]
fn restart_from_game_over_resets_everything() {
    let mut rng = Pcg32::seed_from_u64(8);
    let mut state = start_run(&mut rng);
    state.player.score = 990;
    state.player.pos = Vec2::new(123.0, 321.0);
    state.difficulty.level = 3;
    state.difficulty.enemy_spawn_interval = 10;
    state
        .store
        .push_power_up(PowerUp::new(Vec2::new(700.0, 500.0)));
    state.mode = GameMode::GameOver;

    let confirm = TickInput {
        confirm: true,
        ..Default::default()
    };
    tick(&mut state, &confirm, &mut rng);

    assert_eq!(state.mode, GameMode::Playing);
    assert_eq!(state.player.lives, 3);
    assert_eq!(state.player.score, 0);
    assert_eq!(state.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
    assert_eq!(state.difficulty, Difficulty::default());
    assert!(state.store.is_empty());
}

#[test]
fn power_up_at_full_lives_still_scores() {
    let mut rng = Pcg32::seed_from_u64(99);
    let mut state = start_run(&mut rng);
    state.player.lives = MAX_LIVES;
    let p = state.player.pos;
    state
        .store
        .push_power_up(PowerUp::new(Vec2::new(p.x, p.y + 5.0)));

    tick(&mut state, &TickInput::default(), &mut rng);

    assert_eq!(state.player.lives, MAX_LIVES);
    assert_eq!(state.player.score, POWER_UP_SCORE);
    assert!(state.store.power_ups.is_empty());
}

#[test]
fn shooting_a_descending_enemy_scores_and_resets_clock() {
    let mut rng = Pcg32::seed_from_u64(4);
    let mut state = start_run(&mut rng);
    let p = state.player.pos;
    state.store.push_enemy(Enemy::new(
        Vec2::new(p.x, 300.0),
        2.0,
        EnemyArchetype::Square,
    ));

    let shoot = TickInput {
        shoot: true,
        ..Default::default()
    };
    tick(&mut state, &shoot, &mut rng);

    let mut destroyed = false;
    for _ in 0..40 {
        tick(&mut state, &TickInput::default(), &mut rng);
        if state.events.contains(&GameEvent::EnemyDestroyed) {
            destroyed = true;
            break;
        }
    }

    assert!(destroyed);
    assert_eq!(state.player.score, ENEMY_SCORE);
    assert_eq!(state.difficulty.no_hit_ticks, 0);
    assert!(state.store.bullets.is_empty());
}
