//! Keyboard input collection
//!
//! Terminals differ in what they report: keyboard-enhanced terminals send
//! press/repeat/release, classic ones only send a press per OS auto-repeat.
//! Held actions are therefore tracked by the frame they were last seen and
//! expire after `HOLD_WINDOW_TICKS` of silence. Shoot and confirm fire once on
//! the leading edge of a hold.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::TickInput;

/// A held key stays live this many ticks after its last press/repeat.
///
/// OS key repeat runs at 15 Hz or faster, so 8 ticks at 60 Hz (~133 ms) is
/// always refreshed before it lapses.
pub const HOLD_WINDOW_TICKS: u64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Shoot,
    Confirm,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Press,
    Repeat,
    Release,
}

impl From<KeyEventKind> for KeyPhase {
    fn from(kind: KeyEventKind) -> Self {
        match kind {
            KeyEventKind::Press => KeyPhase::Press,
            KeyEventKind::Repeat => KeyPhase::Repeat,
            KeyEventKind::Release => KeyPhase::Release,
        }
    }
}

/// Fixed default key map
pub fn actions_for_key(code: KeyCode, modifiers: KeyModifiers) -> &'static [Action] {
    match code {
        KeyCode::Char('c') | KeyCode::Char('C') if modifiers.contains(KeyModifiers::CONTROL) => {
            &[Action::Quit]
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => &[Action::Left],
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => &[Action::Right],
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => &[Action::Up],
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => &[Action::Down],
        KeyCode::Char(' ') => &[Action::Shoot, Action::Confirm],
        KeyCode::Enter => &[Action::Confirm],
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => &[Action::Quit],
        _ => &[],
    }
}

/// Turns key events into one `TickInput` per tick
#[derive(Debug, Clone)]
pub struct InputCollector {
    /// Action -> frame it was last pressed or repeated
    held: HashMap<Action, u64>,
    shoot_edge: bool,
    confirm_edge: bool,
    quit: bool,
    frame: u64,
    hold_window: u64,
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl InputCollector {
    pub fn new() -> Self {
        Self::with_hold_window(HOLD_WINDOW_TICKS)
    }

    pub fn with_hold_window(hold_window: u64) -> Self {
        Self {
            held: HashMap::new(),
            shoot_edge: false,
            confirm_edge: false,
            quit: false,
            frame: 0,
            hold_window,
        }
    }

    fn is_held(&self, action: Action) -> bool {
        self.held
            .get(&action)
            .map(|&last| self.frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    /// Record one logical action transition
    pub fn record(&mut self, action: Action, phase: KeyPhase) {
        match phase {
            KeyPhase::Press => {
                // A press while still held is an auto-repeat on a classic terminal
                if !self.is_held(action) {
                    match action {
                        Action::Shoot => self.shoot_edge = true,
                        Action::Confirm => self.confirm_edge = true,
                        Action::Quit => self.quit = true,
                        _ => {}
                    }
                }
                self.held.insert(action, self.frame);
            }
            KeyPhase::Repeat => {
                self.held.insert(action, self.frame);
            }
            KeyPhase::Release => {
                self.held.remove(&action);
            }
        }
    }

    /// Map and record a terminal key event
    pub fn handle_key(&mut self, event: KeyEvent) {
        let phase = KeyPhase::from(event.kind);
        for &action in actions_for_key(event.code, event.modifiers) {
            self.record(action, phase);
        }
    }

    /// Produce this tick's input and consume the shoot/confirm edges
    pub fn sample(&mut self) -> TickInput {
        let input = TickInput {
            left: self.is_held(Action::Left),
            right: self.is_held(Action::Right),
            up: self.is_held(Action::Up),
            down: self.is_held(Action::Down),
            shoot: std::mem::take(&mut self.shoot_edge),
            confirm: std::mem::take(&mut self.confirm_edge),
            quit: self.quit,
        };
        self.frame += 1;
        let (frame, window) = (self.frame, self.hold_window);
        self.held
            .retain(|_, last| frame.saturating_sub(*last) <= window);
        input
    }
}
