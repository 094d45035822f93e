//! Game settings
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ENEMY_LIMIT, MUTATION_INTERVAL_SECS, TICK_RATE};
use crate::sim::SimConfig;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Seconds of play between mutation events
    pub mutation_interval_secs: u32,
    /// Enemy population that ends the game
    pub enemy_limit: usize,

    // === Headless demo ===
    /// Ticks the demo binary runs before exiting (0 = until quit)
    pub demo_ticks: u64,
    /// Screen units per character in the text renderer
    pub text_scale: i32,
    /// Print every Nth frame (0 = only the last)
    pub print_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            mutation_interval_secs: MUTATION_INTERVAL_SECS,
            enemy_limit: ENEMY_LIMIT,

            demo_ticks: 600,
            text_scale: 15,
            print_every: 0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Mutation interval in ticks (never zero)
    pub fn mutation_interval_ticks(&self) -> u32 {
        self.mutation_interval_secs
            .saturating_mul(self.tick_rate.max(1))
            .max(1)
    }

    /// Tunables handed to the simulation
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            mutation_interval_ticks: self.mutation_interval_ticks(),
            enemy_limit: self.enemy_limit,
        }
    }

    /// Demo run length, `None` meaning unbounded
    pub fn demo_limit(&self) -> Option<u64> {
        (self.demo_ticks > 0).then_some(self.demo_ticks)
    }
}
