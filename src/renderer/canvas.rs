//! Character-cell canvas the scene is drawn into before presenting

use crossterm::style::Color;
use glam::{IVec2, Vec2};

use crate::consts::{HEIGHT, WIDTH};

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        color: Color::Reset,
    };
}

/// A cols x rows grid of cells, row 0 at the top
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::BLANK; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Reallocate if the terminal changed size, then blank every cell
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols != self.cols || rows != self.rows {
            *self = Self::new(cols, rows);
        } else {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn index(&self, p: IVec2) -> Option<usize> {
        let in_bounds =
            p.x >= 0 && p.y >= 0 && p.x < self.cols as i32 && p.y < self.rows as i32;
        in_bounds.then(|| p.y as usize * self.cols as usize + p.x as usize)
    }

    /// Set one cell; points off the canvas are ignored
    pub fn plot(&mut self, p: IVec2, ch: char, color: Color) {
        if let Some(i) = self.index(p) {
            self.cells[i] = Cell { ch, color };
        }
    }

    pub fn plot_all(&mut self, points: &[IVec2], ch: char, color: Color) {
        for &p in points {
            self.plot(p, ch, color);
        }
    }

    pub fn get(&self, p: IVec2) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Write a string starting at `p`, clipped to the canvas
    pub fn text(&mut self, p: IVec2, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.plot(p + IVec2::new(i as i32, 0), ch, color);
        }
    }

    /// Write a string horizontally centred on `row`
    pub fn text_centered(&mut self, row: i32, text: &str, color: Color) {
        let len = text.chars().count() as i32;
        let col = (self.cols as i32 - len) / 2;
        self.text(IVec2::new(col.max(0), row), text, color);
    }

    pub fn row(&self, row: u16) -> &[Cell] {
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Row contents as plain text (no colors)
    pub fn row_string(&self, row: u16) -> String {
        self.row(row).iter().map(|c| c.ch).collect()
    }

    /// Columns per world unit, rows per world unit
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.cols as f32 / WIDTH, self.rows as f32 / HEIGHT)
    }

    /// Map a y-up world position to a top-down cell
    pub fn to_cell(&self, world: Vec2) -> IVec2 {
        let s = self.scale();
        IVec2::new(
            (world.x * s.x).floor() as i32,
            ((HEIGHT - world.y) * s.y).floor() as i32,
        )
    }
}

/// Colors for game elements
pub mod colors {
    use crossterm::style::Color;

    pub const STAR: Color = Color::White;
    pub const PLAYER: Color = Color::Cyan;
    pub const PLAYER_CRITICAL: Color = Color::Red;
    pub const PLAYER_COCKPIT: Color = Color::Blue;
    pub const BULLET: Color = Color::Yellow;
    pub const BULLET_FINAL_LEVEL: Color = Color::Red;
    pub const ENEMY_CIRCLE: Color = Color::Red;
    pub const ENEMY_CIRCLE_RIM: Color = Color::DarkRed;
    pub const ENEMY_TRIANGLE: Color = Color::DarkYellow;
    pub const ENEMY_SQUARE: Color = Color::Magenta;
    pub const ENEMY_DIAMOND: Color = Color::Cyan;
    pub const POWER_UP: Color = Color::Green;
    pub const POWER_UP_MARK: Color = Color::White;
    pub const HUD: Color = Color::White;
    pub const LIFE_ICON: Color = Color::Red;
    pub const TITLE: Color = Color::Cyan;
    pub const GAME_OVER: Color = Color::Red;
    pub const TEXT: Color = Color::White;
}
