use super::*;
use crate::testing::TempDirFixture;

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, TerminalCapsDetectIntent::Auto);
    assert!(config.workdir.is_none());
    assert!(config.settings.is_none());
    assert!(!config.yes);
}

#[test]
fn test_merge_takes_non_default_values() {
    let base = AppConfig {
        settings: Some(PathBuf::from("/base/settings.toml")),
        log_level: 2,
        ..AppConfig::default()
    };
    let cli = AppConfig {
        workdir: Some(PathBuf::from("/proj")),
        log_format: LogFormat::Json,
        color: TerminalCapsDetectIntent::Never,
        yes: true,
        ..AppConfig::default()
    };

    let merged = base.merge_with(cli);

    assert_eq!(merged.workdir, Some(PathBuf::from("/proj")));
    assert_eq!(merged.settings, Some(PathBuf::from("/base/settings.toml")));
    assert_eq!(merged.log_level, 2);
    assert_eq!(merged.log_format, LogFormat::Json);
    assert_eq!(merged.color, TerminalCapsDetectIntent::Never);
    assert!(merged.yes);
}

#[test]
fn test_merge_keeps_base_when_other_is_default() {
    let base = AppConfig {
        color: TerminalCapsDetectIntent::Always,
        yes: true,
        ..AppConfig::default()
    };

    let merged = base.clone().merge_with(AppConfig::default());

    assert_eq!(merged, base);
}

#[test]
fn test_validate_fills_workdir() {
    let mut config = AppConfig::default();
    config.validate().unwrap();
    assert!(config.workdir.unwrap().is_absolute());
}

#[test]
fn test_validate_rejects_missing_workdir() {
    let fixture = TempDirFixture::new().unwrap();
    let mut config = AppConfig {
        workdir: Some(fixture.path().join("missing")),
        ..AppConfig::default()
    };

    let err = config.validate().unwrap_err();

    assert!(matches!(err, ConfigError::InvalidWorkDir { .. }));
}

#[test]
fn test_validate_accepts_existing_workdir() {
    let fixture = TempDirFixture::new().unwrap();
    let mut config = AppConfig {
        workdir: Some(fixture.path().to_path_buf()),
        ..AppConfig::default()
    };

    config.validate().unwrap();

    assert_eq!(config.workdir.as_deref(), Some(fixture.path()));
}

#[test]
fn test_deserialize_with_defaults() {
    let config: AppConfig = serde_json::from_str(r#"{ "log_level": 3, "yes": true }"#).unwrap();

    assert_eq!(config.log_level, 3);
    assert!(config.yes);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.color, TerminalCapsDetectIntent::Auto);
}

#[test]
fn test_logger_config_from_verbosity() {
    let config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };

    let logger = config.to_logger_config(&crate::terminal::TerminalCapabilities::minimal());

    assert_eq!(logger.level, LogLevel::Debug);
    assert_eq!(logger.format, LogFormat::Json);
    assert_eq!(logger.output, LogOutput::Stderr);
}
