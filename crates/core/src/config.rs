//! Engine configuration
//!
//! Defaults reproduce the classic timings. Values can be overridden from the
//! environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `TETRIS_SEED` | `seed` |
//! | `TETRIS_START_LEVEL` | `start_level` |
//! | `TETRIS_LOCK_DELAY_MS` | `lock_delay` |
//! | `TETRIS_ROWS_PER_LEVEL` | `rows_per_level` |
//! | `TETRIS_BAG_GUARD` | `avoid_boundary_repeat` (`1` / `true`) |

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::EngineError;
use crate::types::{LOCK_DELAY_MS, ROWS_PER_LEVEL, START_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Bag seed; `None` seeds from the wall clock
    pub seed: Option<u32>,
    pub start_level: u32,
    pub lock_delay: Duration,
    pub rows_per_level: u32,
    /// Keep a fresh bag from starting with the piece that ended the previous one
    pub avoid_boundary_repeat: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            start_level: START_LEVEL,
            lock_delay: Duration::from_millis(LOCK_DELAY_MS as u64),
            rows_per_level: ROWS_PER_LEVEL,
            avoid_boundary_repeat: false,
        }
    }
}

impl EngineConfig {
    /// Default config with a fixed seed
    pub fn seeded(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Create from environment variables, ignoring malformed values
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let seed = parse_var::<u32>("TETRIS_SEED").ok().flatten();
        let start_level = parse_var("TETRIS_START_LEVEL")
            .ok()
            .flatten()
            .unwrap_or(defaults.start_level);
        let lock_delay = parse_var::<u64>("TETRIS_LOCK_DELAY_MS")
            .ok()
            .flatten()
            .map(Duration::from_millis)
            .unwrap_or(defaults.lock_delay);
        let rows_per_level = parse_var("TETRIS_ROWS_PER_LEVEL")
            .ok()
            .flatten()
            .unwrap_or(defaults.rows_per_level);
        let avoid_boundary_repeat = flag_var("TETRIS_BAG_GUARD");

        Self {
            seed,
            start_level,
            lock_delay,
            rows_per_level,
            avoid_boundary_repeat,
        }
    }

    /// Like [`EngineConfig::from_env`], but a malformed value is an error
    pub fn try_from_env() -> Result<Self, EngineError> {
        let defaults = Self::default();

        Ok(Self {
            seed: parse_var("TETRIS_SEED")?,
            start_level: parse_var("TETRIS_START_LEVEL")?.unwrap_or(defaults.start_level),
            lock_delay: parse_var("TETRIS_LOCK_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.lock_delay),
            rows_per_level: parse_var("TETRIS_ROWS_PER_LEVEL")?
                .unwrap_or(defaults.rows_per_level),
            avoid_boundary_repeat: flag_var("TETRIS_BAG_GUARD"),
        })
    }
}

/// Read and parse an env var; unset or blank is `Ok(None)`
pub fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, EngineError> {
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(None),
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<Option<T>, EngineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| EngineError::Config {
            key,
            value: raw.to_string(),
        })
}

fn flag_var(key: &str) -> bool {
    env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
