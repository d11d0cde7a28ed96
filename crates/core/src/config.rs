//! Simulation configuration, read from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `LIFE_GRID_SIZE` | 1024 |
//! | `LIFE_SEED` | random |
//! | `LIFE_STARTUP_CHANCE` | 50 |
//! | `LIFE_RANDOMIZE_CHANCE` | 5 |
//! | `LIFE_START_PAUSED` | false |
//! | `LIFE_TICK_MS` | 16 |
//!
//! Malformed or out-of-range values fall back to the default with a warning.

use std::str::FromStr;

use log::warn;

use crate::types::{GRID_SIZE, MAX_CHANCE, MAX_GRID_SIZE, RANDOMIZE_CHANCE, STARTUP_CHANCE, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub startup_chance: u8,
    pub randomize_chance: u8,
    pub start_paused: bool,
    pub tick_ms: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: GRID_SIZE,
            height: GRID_SIZE,
            seed: 1,
            startup_chance: STARTUP_CHANCE,
            randomize_chance: RANDOMIZE_CHANCE,
            start_paused: false,
            tick_ms: TICK_MS,
        }
    }
}

impl SimConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment in production).
    ///
    /// An unset seed is drawn from the thread RNG.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let size = parse_var(&lookup, "LIFE_GRID_SIZE", GRID_SIZE, |v| {
            (1..=MAX_GRID_SIZE).contains(v)
        });
        let seed = parse_var(&lookup, "LIFE_SEED", rand::random(), |_| true);
        let startup_chance = parse_var(&lookup, "LIFE_STARTUP_CHANCE", defaults.startup_chance, |v| {
            *v <= MAX_CHANCE
        });
        let randomize_chance =
            parse_var(&lookup, "LIFE_RANDOMIZE_CHANCE", defaults.randomize_chance, |v| {
                *v <= MAX_CHANCE
            });
        let start_paused = lookup("LIFE_START_PAUSED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.start_paused);
        let tick_ms = parse_var(&lookup, "LIFE_TICK_MS", defaults.tick_ms, |v| *v > 0);

        Self {
            width: size,
            height: size,
            seed,
            startup_chance,
            randomize_chance,
            start_paused,
            tick_ms,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_start_paused(mut self, start_paused: bool) -> Self {
        self.start_paused = start_paused;
        self
    }

    pub fn with_startup_chance(mut self, chance: u8) -> Self {
        self.startup_chance = chance;
        self
    }
}

fn parse_var<T: FromStr + Copy + std::fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(v) if valid(&v) => v,
        _ => {
            warn!("ignoring {}={:?}, using {}", key, raw, default);
            default
        }
    }
}
