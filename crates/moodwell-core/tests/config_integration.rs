//! Integration tests for configuration persistence.

use moodwell_core::{ChartLayout, Config, ConfigError, PeriodScale};

#[test]
fn test_load_missing_file_writes_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[chart]"));
    assert!(content.contains("baseline_y"));
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut cfg = Config::default();
    cfg.apply("chart.steps", "10").unwrap();
    cfg.apply("display.default_period", "monthly").unwrap();
    cfg.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.chart.steps, 10);
    assert_eq!(reloaded.display.default_period, PeriodScale::Monthly);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[chart]\nmin_mood = 1.0\nmax_mood = 10.0\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.chart.min_mood, 1.0);
    assert_eq!(cfg.chart.max_mood, 10.0);
    assert_eq!(cfg.chart.canvas_width, ChartLayout::default().canvas_width);
    assert_eq!(cfg.display.text_rows, 12);
}

#[test]
fn test_invalid_files_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "[chart\nsteps = ").unwrap();
    assert!(matches!(Config::load_from(&path), Err(ConfigError::ParseFailed(_))));

    std::fs::write(&path, "[chart]\nmin_mood = 8.0\nmax_mood = 5.5\n").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_oversized_steps_on_disk_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "[chart]\nsteps = 4000000000\n").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::InvalidValue { .. })
    ));

    let mut cfg = Config::load_from(&dir.path().join("fresh.toml")).unwrap();
    assert!(cfg.apply("chart.steps", "4000000000").is_err());
    assert_eq!(cfg.chart, ChartLayout::default());
}
