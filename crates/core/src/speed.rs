//! Level and gravity speed curve
//!
//! `fall_interval_secs(level) = (0.8 - (level - 1) * 0.007) ^ (level - 1)`
//!
//! Level 1 falls one row per second and every level after that is faster.
//! From around level 19 the formula drops under [`MIN_FALL_INTERVAL_SECS`] and
//! is clamped there; past level 115 the base goes negative and the raw formula
//! would oscillate, which the clamp also covers.

use std::time::Duration;

use crate::types::{ROWS_PER_LEVEL, START_LEVEL};

/// Fastest gravity the engine will run at (one row per millisecond)
pub const MIN_FALL_INTERVAL_SECS: f64 = 0.001;

/// Seconds per automatic one-row fall at `level`
pub fn fall_interval_secs(level: u32) -> f64 {
    let steps = level.max(1) - 1;
    let base = 0.8 - f64::from(steps) * 0.007;
    if base <= 0.0 {
        return MIN_FALL_INTERVAL_SECS;
    }

    let interval = base.powi(steps.min(i32::MAX as u32) as i32);
    if interval.is_finite() && interval > MIN_FALL_INTERVAL_SECS {
        interval
    } else {
        MIN_FALL_INTERVAL_SECS
    }
}

/// [`fall_interval_secs`] as a `Duration`
pub fn fall_interval(level: u32) -> Duration {
    Duration::from_secs_f64(fall_interval_secs(level))
}

/// Level bookkeeping: a level-up happens once the rows cleared since the last
/// level-up reach `level * rows_per_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelProgress {
    level: u32,
    rows_since_level_up: u32,
    total_rows: u32,
    rows_per_level: u32,
}

impl LevelProgress {
    pub fn new(start_level: u32, rows_per_level: u32) -> Self {
        Self {
            level: start_level.max(1),
            rows_since_level_up: 0,
            total_rows: 0,
            rows_per_level: rows_per_level.max(1),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn total_rows(&self) -> u32 {
        self.total_rows
    }

    pub fn rows_since_level_up(&self) -> u32 {
        self.rows_since_level_up
    }

    /// Rows still needed for the next level-up
    pub fn rows_to_next_level(&self) -> u32 {
        self.threshold().saturating_sub(self.rows_since_level_up)
    }

    fn threshold(&self) -> u32 {
        self.level.saturating_mul(self.rows_per_level)
    }

    /// Record cleared rows; returns how many levels were gained.
    ///
    /// Rows past a threshold carry into the next level.
    pub fn record_cleared(&mut self, rows: u32) -> u32 {
        self.total_rows = self.total_rows.saturating_add(rows);
        self.rows_since_level_up = self.rows_since_level_up.saturating_add(rows);

        let mut gained = 0;
        while self.rows_since_level_up >= self.threshold() {
            self.rows_since_level_up -= self.threshold();
            self.level = self.level.saturating_add(1);
            gained += 1;
        }
        gained
    }

    /// Current gravity interval
    pub fn fall_interval(&self) -> Duration {
        fall_interval(self.level)
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::new(START_LEVEL, ROWS_PER_LEVEL)
    }
}
