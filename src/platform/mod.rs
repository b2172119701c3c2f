//! Platform abstraction layer
//!
//! Handles terminal specifics for:
//! - Input events (key map, held keys, edge-triggered actions)

pub mod input;

pub use input::{Action, InputCollector, KeyPhase, actions_for_key};
