use super::*;
use crate::primitives::TerminalCapsDetectIntent;
use crate::testing::TempDirFixture;

fn env(vars: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_vars(vars.iter().map(|(k, v)| (k.to_string(), v.to_string()))).unwrap()
}

#[test]
fn test_ci_implies_yes_and_no_color() {
    let config = AppConfig::load_layers(env(&[("CI", "true")]), AppConfig::default()).unwrap();

    assert!(config.yes);
    assert_eq!(config.color, TerminalCapsDetectIntent::Never);
    assert!(config.workdir.is_some());
}

#[test]
fn test_cli_color_beats_environment() {
    let cli = AppConfig {
        color: TerminalCapsDetectIntent::Always,
        ..AppConfig::default()
    };

    let config = AppConfig::load_layers(env(&[("NO_COLOR", "1")]), cli).unwrap();

    assert_eq!(config.color, TerminalCapsDetectIntent::Always);
}

#[test]
fn test_invalid_cli_workdir_fails() {
    let fixture = TempDirFixture::new().unwrap();
    let cli = AppConfig {
        workdir: Some(fixture.path().join("nope")),
        ..AppConfig::default()
    };

    assert!(AppConfig::load_layers(env(&[]), cli).is_err());
}

#[test]
fn test_missing_env_files_are_fine() {
    let fixture = TempDirFixture::new().unwrap();
    assert!(load_env_files(fixture.path()).is_ok());
}

#[test]
fn test_malformed_env_file_is_reported() {
    let fixture = TempDirFixture::new().unwrap();
    fixture.write_file(".env", "DEPVIEW_TEST_BROKEN='unterminated\n").unwrap();

    let err = load_env_files(fixture.path()).unwrap_err();

    assert!(matches!(err, ConfigError::EnvFileError { .. }));
}
