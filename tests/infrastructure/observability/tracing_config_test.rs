use scholia::infrastructure::observability::TracingConfig;
use scholia::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_copies_level_and_format() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert_eq!(config.environment, "prod");
    assert_eq!(config.level, "warn");
    assert!(config.json_format);
}

#[test]
fn given_level_when_building_directives_then_applies_to_http_layer_too() {
    let logging = LoggingSettings {
        level: "debug".to_string(),
        enable_json: false,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Local);

    assert_eq!(config.default_directives(), "debug,tower_http=debug");
}
