//! 설정 파일 로드/저장 테스트.
use std::fs;

use unit_converter_toolbox::config::{self, Config, ConfigError};
use unit_converter_toolbox::material::UnitSystem;
use unit_converter_toolbox::quantity::UnitCategory;

#[test]
fn default_config_round_trips_through_toml() {
    let cfg = Config::default();
    let text = cfg.to_toml_string().unwrap();
    assert!(text.contains("default_category = \"length\""));
    assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
}

#[test]
fn partial_config_fills_defaults() {
    let cfg = Config::from_toml_str(
        r#"
decimals = 4
unit_system = "SI"
default_category = "pressure"
"#,
    )
    .unwrap();
    assert_eq!(cfg.decimals, 4);
    assert_eq!(cfg.unit_system, UnitSystem::SI);
    assert_eq!(cfg.default_category, UnitCategory::Pressure);
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.locale_dir, None);
}

#[test]
fn malformed_config_is_an_error() {
    let err = Config::from_toml_str("decimals = \"many\"").unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
    assert!(Config::from_toml_str("default_category = \"speed\"").is_err());
}

#[test]
fn out_of_range_decimals_are_rejected() {
    assert_eq!(Config::from_toml_str("decimals = 10").unwrap().decimals, 10);
    let err = Config::from_toml_str("decimals = 400").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn missing_file_is_created_with_defaults() {
    let path = std::env::temp_dir().join(format!(
        "unit_converter_toolbox_cfg_{}.toml",
        std::process::id()
    ));
    let _ = fs::remove_file(&path);

    let cfg = config::load_or_default_at(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let mut changed = cfg.clone();
    changed.decimals = 3;
    changed.save_to(&path).unwrap();
    assert_eq!(config::load_or_default_at(&path).unwrap(), changed);

    fs::remove_file(&path).unwrap();
}
