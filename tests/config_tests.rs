use keytrail::config::Config;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.default_value, "NO_VALUE");
    assert_eq!(config.return_value, "all");
    assert_eq!(config.max_depth, 256);
    assert_eq!(config.output_format, "json");
    assert_eq!(config.indent_size, 2);
    assert!(!config.sort_search_results);
}

#[test]
fn test_custom_config() {
    let config = Config {
        default_value: "missing".to_string(),
        return_value: "first".to_string(),
        max_depth: 32,
        output_format: "yaml".to_string(),
        indent_size: 4,
        sort_search_results: true,
    };

    assert_eq!(config.default_value, "missing");
    assert_eq!(config.return_value, "first");
    assert_eq!(config.max_depth, 32);
    assert_eq!(config.output_format, "yaml");
    assert_eq!(config.indent_size, 4);
    assert!(config.sort_search_results);
}

#[test]
fn test_serialize_default_config() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).expect("Failed to serialize config");

    assert!(toml_str.contains("default_value = \"NO_VALUE\""));
    assert!(toml_str.contains("return_value = \"all\""));
    assert!(toml_str.contains("max_depth = 256"));
    assert!(toml_str.contains("output_format = \"json\""));
    assert!(toml_str.contains("indent_size = 2"));
    assert!(toml_str.contains("sort_search_results = false"));
}

#[test]
fn test_deserialize_partial_config() {
    // Only specify some fields; others should use defaults
    let toml_str = r#"
        return_value = "last"
        indent_size = 0
    "#;

    let config: Config = toml::from_str(toml_str).expect("Failed to deserialize config");

    // Custom values
    assert_eq!(config.return_value, "last");
    assert_eq!(config.indent_size, 0);

    // Default values
    assert_eq!(config.default_value, "NO_VALUE");
    assert_eq!(config.max_depth, 256);
    assert_eq!(config.output_format, "json");
    assert!(!config.sort_search_results);
}

#[test]
fn test_deserialize_empty_config() {
    // Empty TOML should use all defaults
    let config: Config = toml::from_str("").expect("Failed to deserialize config");
    assert_eq!(config, Config::default());
}

#[test]
fn test_roundtrip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let original = Config {
        default_value: "n/a".to_string(),
        return_value: "last".to_string(),
        max_depth: 8,
        output_format: "raw".to_string(),
        indent_size: 3,
        sort_search_results: true,
    };

    original.save_to(&path).expect("Failed to save config");
    let loaded = Config::load_from(&path);

    assert_eq!(original, loaded);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = Config::load_from(&dir.path().join("absent.toml"));
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_load_invalid_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "max_depth = \"deep\"\n").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_config_path_location() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/keytrail/config.toml"));
    }
}
