//! GenConfig JSON loading and defaults.

use std::fs;
use std::path::PathBuf;

use apexsales_core::config::GenConfig;
use tempfile::TempDir;

#[test]
fn full_config_loads_from_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gen.json");
    fs::write(
        &path,
        r#"{ "rows": 500, "seed": 7, "seasonal": true, "output": "sales.csv" }"#,
    )
    .unwrap();

    let cfg = GenConfig::load(&path).unwrap();
    assert_eq!(cfg.rows, 500);
    assert_eq!(cfg.seed, 7);
    assert!(cfg.seasonal);
    assert_eq!(cfg.output, PathBuf::from("sales.csv"));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gen.json");
    fs::write(&path, r#"{ "rows": 50 }"#).unwrap();

    let cfg = GenConfig::load(&path).unwrap();
    let defaults = GenConfig::default();
    assert_eq!(cfg.rows, 50);
    assert_eq!(cfg.seed, defaults.seed);
    assert_eq!(cfg.seasonal, defaults.seasonal);
    assert_eq!(cfg.output, defaults.output);
}

#[test]
fn malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gen.json");
    fs::write(&path, "rows = 50").unwrap();

    assert!(GenConfig::load(&path).is_err());
}
