//! Terminal rendering module
//!
//! Draws a read-only `GameState` into a `Canvas`, then presents the canvas with
//! crossterm. Nothing here feeds back into the simulation.

pub mod canvas;
pub mod shapes;

pub use canvas::{Canvas, Cell};

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
};
use glam::{IVec2, Vec2};

use crate::consts::{HEIGHT, MAX_LEVEL, WIDTH};
use crate::settings::Settings;
use crate::sim::{Bullet, Enemy, EnemyArchetype, GameMode, GameState, Player, PowerUp};
use canvas::colors;

const STAR_COUNT: u32 = 100;
/// World units the starfield scrolls per frame while playing
const STAR_SCROLL: f32 = 0.5;

/// Scene drawer. Holds only cosmetic state (the starfield scroll).
#[derive(Debug, Clone)]
pub struct Renderer {
    star_offset: f32,
    starfield: bool,
    show_hud: bool,
}

impl Renderer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            star_offset: 0.0,
            starfield: settings.starfield,
            show_hud: settings.show_hud,
        }
    }

    pub fn star_offset(&self) -> f32 {
        self.star_offset
    }

    /// Draw one frame of `state` into `canvas`
    pub fn draw(&mut self, canvas: &mut Canvas, state: &GameState) {
        canvas.clear();

        if state.is_playing() {
            self.star_offset += STAR_SCROLL;
            if self.star_offset > HEIGHT {
                self.star_offset = 0.0;
            }
        }
        if self.starfield {
            draw_stars(canvas, self.star_offset);
        }

        match state.mode {
            GameMode::Menu => draw_menu(canvas),
            GameMode::Playing => {
                draw_player(canvas, &state.player);
                for bullet in state.store.active_bullets() {
                    draw_bullet(canvas, bullet, state.difficulty.level);
                }
                for enemy in state.store.active_enemies() {
                    draw_enemy(canvas, enemy);
                }
                for power_up in state.store.active_power_ups() {
                    draw_power_up(canvas, power_up);
                }
                if self.show_hud {
                    draw_hud(canvas, state);
                }
            }
            GameMode::GameOver => draw_game_over(canvas, state.player.score),
        }
    }
}

/// Flush a canvas to the terminal, one color run at a time
pub fn present<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    for row in 0..canvas.rows() {
        out.queue(cursor::MoveTo(0, row))?;
        let mut current: Option<Color> = None;
        let mut run = String::with_capacity(canvas.cols() as usize);
        for cell in canvas.row(row) {
            if current != Some(cell.color) {
                if !run.is_empty() {
                    out.queue(Print(&run))?;
                    run.clear();
                }
                out.queue(style::SetForegroundColor(cell.color))?;
                current = Some(cell.color);
            }
            run.push(cell.ch);
        }
        out.queue(Print(&run))?;
    }
    out.queue(style::ResetColor)?;
    out.flush()
}

fn draw_stars(canvas: &mut Canvas, offset: f32) {
    for i in 0..STAR_COUNT {
        let x = ((i * 73) as f32) % WIDTH;
        let y = ((i * 117) as f32 + offset) % HEIGHT;
        canvas.plot(canvas.to_cell(Vec2::new(x, y)), '.', colors::STAR);
    }
}

/// World-space offset to cell-space offset (rows grow downward)
fn cell_offset(canvas: &Canvas, offset: Vec2) -> IVec2 {
    let s = canvas.scale();
    IVec2::new(
        (offset.x * s.x).round() as i32,
        (-offset.y * s.y).round() as i32,
    )
}

fn draw_player(canvas: &mut Canvas, player: &Player) {
    let color = if player.lives == 1 {
        colors::PLAYER_CRITICAL
    } else {
        colors::PLAYER
    };
    let center = canvas.to_cell(player.pos);
    let s = player.size;
    let hull = [
        center + cell_offset(canvas, Vec2::new(0.0, s)),
        center + cell_offset(canvas, Vec2::new(-s / 2.0, -s / 2.0)),
        center + cell_offset(canvas, Vec2::new(s / 2.0, -s / 2.0)),
    ];
    canvas.plot_all(&shapes::polygon_outline(&hull), '*', color);

    for (root, tip) in [
        (Vec2::new(-s / 2.0, -s / 2.0), Vec2::new(-s, -s)),
        (Vec2::new(s / 2.0, -s / 2.0), Vec2::new(s, -s)),
    ] {
        let wing = shapes::line_bresenham(
            center + cell_offset(canvas, root),
            center + cell_offset(canvas, tip),
        );
        canvas.plot_all(&wing, '/', color);
    }

    canvas.plot(center, 'A', colors::PLAYER_COCKPIT);
}

fn draw_bullet(canvas: &mut Canvas, bullet: &Bullet, level: u32) {
    let (ch, color) = if level < MAX_LEVEL {
        ('|', colors::BULLET)
    } else {
        ('!', colors::BULLET_FINAL_LEVEL)
    };
    canvas.plot(canvas.to_cell(bullet.pos), ch, color);
}

fn draw_enemy(canvas: &mut Canvas, enemy: &Enemy) {
    let center = canvas.to_cell(enemy.pos);
    let s = canvas.scale();
    match enemy.archetype {
        EnemyArchetype::Circle => {
            let body = shapes::filled_ellipse(center, 15.0 * s.x, 15.0 * s.y);
            canvas.plot_all(&body, 'o', colors::ENEMY_CIRCLE);
            // Squash the outline to the cell aspect ratio
            let r = (15.0 * s.x).round() as i32;
            let ratio = if s.x > 0.0 { s.y / s.x } else { 1.0 };
            let rim: Vec<IVec2> = shapes::circle_midpoint(IVec2::ZERO, r)
                .into_iter()
                .map(|p| center + IVec2::new(p.x, (p.y as f32 * ratio).round() as i32))
                .collect();
            canvas.plot_all(&rim, 'O', colors::ENEMY_CIRCLE_RIM);
        }
        EnemyArchetype::Triangle => {
            let tri = [
                center + cell_offset(canvas, Vec2::new(0.0, -20.0)),
                center + cell_offset(canvas, Vec2::new(-15.0, 15.0)),
                center + cell_offset(canvas, Vec2::new(15.0, 15.0)),
            ];
            canvas.plot_all(&shapes::polygon_outline(&tri), 'v', colors::ENEMY_TRIANGLE);
        }
        EnemyArchetype::Square => {
            let min = center + cell_offset(canvas, Vec2::new(-15.0, 15.0));
            let max = center + cell_offset(canvas, Vec2::new(15.0, -15.0));
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    canvas.plot(IVec2::new(x, y), '#', colors::ENEMY_SQUARE);
                }
            }
        }
        EnemyArchetype::Diamond => {
            let size = 20.0;
            let corners = [
                center + cell_offset(canvas, Vec2::new(0.0, size)),
                center + cell_offset(canvas, Vec2::new(size, 0.0)),
                center + cell_offset(canvas, Vec2::new(0.0, -size)),
                center + cell_offset(canvas, Vec2::new(-size, 0.0)),
            ];
            for i in 0..corners.len() {
                let edge = shapes::line_dda(corners[i], corners[(i + 1) % corners.len()]);
                canvas.plot_all(&edge, '+', colors::ENEMY_DIAMOND);
            }
        }
    }
}

fn draw_power_up(canvas: &mut Canvas, power_up: &PowerUp) {
    let center = canvas.to_cell(power_up.pos);
    let s = canvas.scale();
    let body = shapes::filled_ellipse(center, 10.0 * s.x, 10.0 * s.y);
    canvas.plot_all(&body, '@', colors::POWER_UP);
    canvas.plot(center, '+', colors::POWER_UP_MARK);
}

fn draw_hud(canvas: &mut Canvas, state: &GameState) {
    let lives = format!("Lives: {}", state.player.lives);
    canvas.text(IVec2::new(1, 0), &lives, colors::HUD);

    let level = format!("Level: {}", state.difficulty.level);
    canvas.text_centered(0, &level, colors::HUD);

    let score = format!("Score: {}", state.player.score);
    let col = canvas.cols() as i32 - score.chars().count() as i32 - 1;
    canvas.text(IVec2::new(col.max(0), 0), &score, colors::HUD);

    for i in 0..state.player.lives as i32 {
        canvas.plot(IVec2::new(1 + i * 2, 1), '♥', colors::LIFE_ICON);
    }
}

fn draw_menu(canvas: &mut Canvas) {
    let mid = canvas.rows() as i32 / 2;
    canvas.text_centered(mid - 5, "SPACE DEFENDER", colors::TITLE);
    canvas.text_centered(mid - 3, "Press SPACE to Start", colors::TEXT);
    canvas.text_centered(mid - 1, "Controls:", colors::TEXT);
    canvas.text_centered(mid, "Arrows / WASD - Move", colors::TEXT);
    canvas.text_centered(mid + 1, "SPACE - Shoot", colors::TEXT);
    canvas.text_centered(mid + 2, "ESC - Quit", colors::TEXT);
}

fn draw_game_over(canvas: &mut Canvas, score: u64) {
    let mid = canvas.rows() as i32 / 2;
    canvas.text_centered(mid - 3, "GAME OVER", colors::GAME_OVER);
    canvas.text_centered(mid - 1, &format!("Final Score: {score}"), colors::TEXT);
    canvas.text_centered(mid + 1, "Press SPACE to Restart", colors::TEXT);
    canvas.text_centered(mid + 2, "Press ESC to Quit", colors::TEXT);
}
