use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_log_level_from_str_is_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel(LevelFilter::Debug));
    assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel(LevelFilter::Warn));
    assert_eq!(LogLevel::from_str("off").unwrap(), LogLevel(LevelFilter::Off));
}

#[test]
fn test_log_level_unknown_value_defaults_to_info() {
    assert_eq!(LogLevel::from_str("loud").unwrap(), LogLevel(LevelFilter::Info));
}

#[test]
fn test_log_level_deserializes_from_toml() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let wrapper: Wrapper = toml::from_str("level = \"trace\"").unwrap();

    assert_eq!(LevelFilter::from(wrapper.level), LevelFilter::Trace);
}
