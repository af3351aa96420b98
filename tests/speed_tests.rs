//! Level and gravity curve tests

use std::time::Duration;

use tetris_sim::core::{fall_interval, fall_interval_secs, LevelProgress, MIN_FALL_INTERVAL_SECS};

#[test]
fn test_level_one_falls_once_per_second() {
    assert_eq!(fall_interval_secs(1), 1.0);
    assert_eq!(fall_interval(1), Duration::from_secs(1));
}

#[test]
fn test_known_levels() {
    assert!((fall_interval_secs(2) - 0.793).abs() < 1e-12);
    assert!((fall_interval_secs(3) - 0.617796).abs() < 1e-12);
    assert!((fall_interval_secs(10) - 0.064151585).abs() < 1e-8);
}

#[test]
fn test_strictly_decreasing_until_clamped() {
    for level in 1..18 {
        assert!(
            fall_interval_secs(level + 1) < fall_interval_secs(level),
            "level {level}"
        );
    }
    assert!(fall_interval_secs(18) > MIN_FALL_INTERVAL_SECS);
    assert_eq!(fall_interval_secs(19), MIN_FALL_INTERVAL_SECS);
}

#[test]
fn test_never_below_minimum() {
    for level in (0..=1000).chain([u32::MAX - 1, u32::MAX]) {
        let secs = fall_interval_secs(level);
        assert!(secs.is_finite(), "level {level}");
        assert!(secs >= MIN_FALL_INTERVAL_SECS, "level {level}");
    }
}

#[test]
fn test_non_increasing_everywhere() {
    for level in 1..500 {
        assert!(fall_interval_secs(level + 1) <= fall_interval_secs(level));
    }
}

#[test]
fn test_level_up_thresholds() {
    let mut progress = LevelProgress::new(1, 10);
    assert_eq!(progress.rows_to_next_level(), 10);

    assert_eq!(progress.record_cleared(4), 0);
    assert_eq!(progress.record_cleared(4), 0);
    assert_eq!(progress.level(), 1);

    // 12 rows since the start: level 2, two rows carried over
    assert_eq!(progress.record_cleared(4), 1);
    assert_eq!(progress.level(), 2);
    assert_eq!(progress.rows_since_level_up(), 2);
    assert_eq!(progress.rows_to_next_level(), 18);

    assert_eq!(progress.record_cleared(18), 1);
    assert_eq!(progress.level(), 3);
    assert_eq!(progress.total_rows(), 30);
    assert_eq!(progress.fall_interval(), fall_interval(3));
}

#[test]
fn test_level_ups_can_chain() {
    let mut progress = LevelProgress::new(1, 1);
    // Thresholds 1 + 2 + 3 = 6
    assert_eq!(progress.record_cleared(6), 3);
    assert_eq!(progress.level(), 4);
    assert_eq!(progress.rows_since_level_up(), 0);
}

#[test]
fn test_start_level_zero_is_level_one() {
    assert_eq!(LevelProgress::new(0, 10).level(), 1);
    assert_eq!(LevelProgress::default().level(), 1);
}
