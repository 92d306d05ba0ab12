use glam::Vec3;
use verlet_fluid::config::{ConfigError, LogLevel, SimulationConfig};
use verlet_fluid::simulation::{FlatGround, SurfaceConfig};

#[test]
fn test_toml_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fluid.toml");

    let mut config = SimulationConfig::default();
    config.grid.side = 64;
    config.physics.ground_offset = Vec3::new(0.0, 0.25, 0.1);
    config.surface = SurfaceConfig::Flat(FlatGround { height: -0.3 });
    config.logging.level = LogLevel::Warn;
    config.save_toml(&path).unwrap();

    let loaded = SimulationConfig::from_toml_file(&path).unwrap();
    assert_eq!(loaded.grid, config.grid);
    assert_eq!(loaded.physics, config.physics);
    assert_eq!(loaded.surface, config.surface);
    assert_eq!(loaded.logging.level, LogLevel::Warn);
}

#[test]
fn test_json_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fluid.json");

    let mut config = SimulationConfig::default();
    config.seeding.rng_seed = 99;
    config.runtime.ticks = 42;
    config.save_json(&path).unwrap();

    let loaded = SimulationConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded.seeding, config.seeding);
    assert_eq!(loaded.runtime.ticks, 42);
}

#[test]
fn test_missing_file_is_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SimulationConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileError(_)));
}

#[test]
fn test_loaded_config_is_validated_separately() {
    let config = SimulationConfig::from_toml_str(
        r#"
        [physics]
        gravity = 0.0001
        damping = 1.5
        ground_offset = [0.0, 0.2, 0.2]
        horizontal_bound = 0.45
        "#,
    )
    .unwrap();

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}
