use std::path::{Path, PathBuf};

use mosaic_core::config::ComposeConfig;
use mosaic_core::consts::{DEFAULT_OUTPUT_FILE, DEFAULT_SPACING};
use mosaic_core::error::MosaicError;

#[test]
fn test_default_config() {
    let config = ComposeConfig::default();
    assert!(config.inputs.is_empty());
    assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
    assert_eq!(config.columns, None);
    assert_eq!(config.spacing, DEFAULT_SPACING);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config: ComposeConfig = toml::from_str(
        r#"
        inputs = ["a.png", "b.png", "c.png"]
        "#,
    )
    .unwrap();

    assert_eq!(config.inputs.len(), 3);
    assert_eq!(config.output, PathBuf::from("saved_image.jpg"));
    assert_eq!(config.spacing, 5);
    assert_eq!(config.resolve_columns(), 2);
}

#[test]
fn test_explicit_columns_win() {
    let config: ComposeConfig = toml::from_str(
        r#"
        inputs = ["a.png", "b.png", "c.png", "d.png"]
        columns = 4
        spacing = 0
        output = "grid.png"
        "#,
    )
    .unwrap();

    assert_eq!(config.resolve_columns(), 4);
    assert_eq!(config.spacing, 0);
    assert_eq!(config.output, PathBuf::from("grid.png"));
}

#[test]
fn test_default_config_serializes_to_toml() {
    let text = toml::to_string_pretty(&ComposeConfig::default()).unwrap();
    assert!(text.contains("spacing = 5"), "got: {text}");
    assert!(text.contains("saved_image.jpg"), "got: {text}");
}

#[test]
fn test_zero_columns_fails_validation() {
    let config = ComposeConfig {
        columns: Some(0),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(MosaicError::InvalidLayout(_))
    ));
}

#[test]
fn test_rebase_only_touches_relative_paths() {
    let absolute = std::env::temp_dir().join("abs.png");
    let mut config = ComposeConfig {
        inputs: vec![PathBuf::from("rel.png"), absolute.clone()],
        output: PathBuf::from("out.png"),
        ..Default::default()
    };

    config.rebase(Path::new("/jobs"));

    assert_eq!(config.inputs[0], Path::new("/jobs").join("rel.png"));
    assert_eq!(config.inputs[1], absolute);
    assert_eq!(config.output, Path::new("/jobs").join("out.png"));
}
