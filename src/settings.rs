//! Host settings and preferences
//!
//! Read from a JSON file at startup. Gameplay constants are deliberately not
//! part of this; only how the host runs and draws.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE_HZ;

/// Settings for the terminal host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed for a reproducible run; random when absent
    pub seed: Option<u64>,
    /// Simulation ticks per second
    pub tick_rate_hz: u32,

    // === Visual ===
    /// Scrolling starfield background
    pub starfield: bool,
    /// Lives/score/level overlay while playing
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate_hz: TICK_RATE_HZ,
            starfield: true,
            show_hud: true,
        }
    }
}

impl Settings {
    /// Environment variable naming an alternate settings file
    pub const PATH_ENV: &'static str = "SPACE_DEFENDER_SETTINGS";

    /// Default file name, relative to the working directory
    const FILE_NAME: &'static str = "space_defender.json";

    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::FILE_NAME))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load from `path`; a missing or malformed file yields defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON; unknown fields are ignored, missing ones defaulted
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Keep values inside what the host can run
    fn sanitized(mut self) -> Self {
        if self.tick_rate_hz == 0 || self.tick_rate_hz > 240 {
            log::warn!(
                "tick_rate_hz {} out of range, using {}",
                self.tick_rate_hz,
                TICK_RATE_HZ
            );
            self.tick_rate_hz = TICK_RATE_HZ;
        }
        self
    }

    /// Duration of one simulation tick
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.tick_rate_hz as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.tick_rate_hz, TICK_RATE_HZ);
        assert!(settings.starfield);
    }

    #[test]
    fn test_bad_tick_rate_is_replaced() {
        let settings = Settings::from_json(r#"{ "tick_rate_hz": 0 }"#).unwrap();
        assert_eq!(settings.tick_rate_hz, TICK_RATE_HZ);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ seed: ").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("space_defender_missing_settings.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join("space_defender_settings_test.json");
        let settings = Settings {
            seed: Some(7),
            starfield: false,
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_tick_duration() {
        let settings = Settings::default();
        let micros = settings.tick_duration().as_micros();
        assert!((16_600..16_700).contains(&micros));
    }
}
