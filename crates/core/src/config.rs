//! Game configuration
//!
//! Every rule constant lives in [`GameConfig`]. Defaults come from
//! `tui-catch-types`; a handful of knobs can be overridden from the
//! environment:
//!
//! | Variable | Field | Notes |
//! |----------|-------|-------|
//! | `CATCH_TICK_MS` | `tick_ms` | at least 1 |
//! | `CATCH_SPAWN_CHANCE` | `spawn_chance` | clamped to `[0, 1]` |
//! | `CATCH_SEED` | `seed` | unset means a random seed per session |
//! | `CATCH_LOG_PATH` | `log_path` | enables file logging |
//!
//! Values that fail to parse fall back to the default.

use std::env;

use crate::types::{
    InputSource, BUTTON_STEP, CAPTURE_LINE, CAPTURE_RADIUS, CATCH_REWARD, FALL_STEP, KEY_STEP,
    SPAWN_CHANCE, TICK_MS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Timer period of the game loop.
    pub tick_ms: u32,
    /// Descent per tick.
    pub fall_step: f32,
    /// Per-tick spawn probability.
    pub spawn_chance: f64,
    /// Blocks below this `y` (exclusive) can be caught.
    pub capture_line: f32,
    /// Horizontal catch distance (exclusive).
    pub capture_radius: f32,
    /// Score per catch.
    pub catch_reward: u32,
    /// Paddle step for keyboard moves.
    pub key_step: f32,
    /// Paddle step for button moves.
    pub button_step: f32,
    /// Fixed spawn seed; `None` picks one per session.
    pub seed: Option<u64>,
    /// File to write logs to; `None` disables logging.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            fall_step: FALL_STEP,
            spawn_chance: SPAWN_CHANCE,
            capture_line: CAPTURE_LINE,
            capture_radius: CAPTURE_RADIUS,
            catch_reward: CATCH_REWARD,
            key_step: KEY_STEP,
            button_step: BUTTON_STEP,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = parse_or(&lookup, "CATCH_TICK_MS", defaults.tick_ms).max(1);

        let spawn_chance = parse_or(&lookup, "CATCH_SPAWN_CHANCE", defaults.spawn_chance);
        let spawn_chance = if spawn_chance.is_nan() {
            defaults.spawn_chance
        } else {
            spawn_chance.clamp(0.0, 1.0)
        };

        let seed = lookup("CATCH_SEED").and_then(|s| match s.trim().parse::<u64>() {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!("ignoring invalid CATCH_SEED: {:?}", s);
                None
            }
        });

        let log_path = lookup("CATCH_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            tick_ms,
            spawn_chance,
            seed,
            log_path,
            ..defaults
        }
    }

    /// Step size for a movement source.
    pub fn step_for(&self, source: InputSource) -> f32 {
        match source {
            InputSource::Keyboard => self.key_step,
            InputSource::Button => self.button_step,
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("ignoring invalid {}: {:?}", key, raw);
                default
            }
        },
        None => default,
    }
}
