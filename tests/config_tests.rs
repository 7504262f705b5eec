//! Config file loading and precedence tests.

use std::path::PathBuf;

use clap::Parser;

use textview::cli::{write_default_config, Args};
use textview::config::{Config, ConfigError, DEFAULT_CONFIG};
use textview::raster::Resampling;
use textview::render::{ColorMode, OutputMode};
use textview::settings::Settings;

fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load_from_explicit(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[render\nwidth = ");
    let err = Config::load_from_explicit(path.clone()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn test_wrong_value_type_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[render]\nwidth = \"wide\"\n");
    assert!(matches!(
        Config::load_from_explicit(path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[render]\ncolor = \"256\"\n");
    let config = Config::load_from_explicit(path).unwrap();

    let args = Args::parse_from(["textview", "a.tif"]);
    let settings = Settings::resolve(&args, &config).unwrap();
    assert_eq!(settings.render.color, ColorMode::Palette256);
    assert_eq!(settings.render.resample, Resampling::Average);
    assert_eq!(settings.render.output, OutputMode::Raw);
    assert_eq!(settings.columns, None);
}

#[test]
fn test_initialized_file_loads_as_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("textview").join("config.toml");
    write_default_config(&path).unwrap();

    let config = Config::load_from_explicit(path).unwrap();
    let args = Args::parse_from(["textview", "a.tif"]);
    assert_eq!(
        Settings::resolve(&args, &config).unwrap(),
        Settings::default()
    );
}

#[test]
fn test_cli_flag_beats_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, DEFAULT_CONFIG);
    let config = Config::load_from_explicit(path).unwrap();

    let args = Args::parse_from(["textview", "--output", "line", "-r", "nearest", "a.tif"]);
    let settings = Settings::resolve(&args, &config).unwrap();
    assert_eq!(settings.render.output, OutputMode::Line);
    assert_eq!(settings.render.resample, Resampling::Nearest);
}
