/*!
 * Tests for configuration loading and validation
 */

use anyhow::Result;
use scriptclip::app_config::{Config, LogLevel};
use scriptclip::errors::ConfigError;
use crate::common;

#[test]
fn test_default_config_shouldMatchBuiltInDefaults() {
    let config = Config::default();

    assert_eq!(config.clipboard.command, "pbcopy");
    assert!(config.clipboard.args.is_empty());
    assert_eq!(config.clipboard.locale, "en_US.UTF-8");
    assert_eq!(config.display.preview_chars, 30);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_fromFile_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "clipboard": { "command": "xclip", "args": ["-selection", "clipboard"] }, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.clipboard.command, "xclip");
    assert_eq!(config.clipboard.args, vec!["-selection", "clipboard"]);
    assert_eq!(config.clipboard.locale, "en_US.UTF-8");
    assert_eq!(config.display.preview_chars, 30);
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

#[test]
fn test_fromFile_withInvalidJson_shouldReturnParseError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(matches!(Config::from_file(&path), Err(ConfigError::Parse { .. })));
    Ok(())
}

#[test]
fn test_load_withMissingExplicitPath_shouldReturnReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("absent.json");

    assert!(matches!(Config::load(Some(path.as_path())), Err(ConfigError::Read { .. })));
    Ok(())
}

#[test]
fn test_validate_withZeroPreview_shouldFail() {
    let mut config = Config::default();
    config.display.preview_chars = 0;

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_withBlankCommand_shouldFail() {
    let mut config = Config::default();
    config.clipboard.command = "  ".to_string();

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_withEmptyLocale_shouldFail() {
    let mut config = Config::default();
    config.clipboard.locale.clear();

    assert!(config.validate().is_err());
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapEachVariant() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
