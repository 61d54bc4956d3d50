use depview_lib::application::CliConfig;
use depview_lib::application::config::AppConfig;
use depview_lib::application::Commands;
use depview_lib::primitives::TerminalCapsDetectIntent;
use std::path::PathBuf;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert!(!config.yes);
    assert_eq!(config.color, TerminalCapsDetectIntent::Auto);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        settings: Some(PathBuf::from("/etc/depview/settings.toml")),
        color: TerminalCapsDetectIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.settings, Some(PathBuf::from("/etc/depview/settings.toml")));
    assert_eq!(merged.color, TerminalCapsDetectIntent::Never);
    assert!(!merged.yes);
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = CliConfig::load_from(["depview", "locate", "src/index.ts", "--yes", "--color", "never"]).unwrap();

    assert!(cli.app_config.yes);
    assert_eq!(cli.app_config.color, TerminalCapsDetectIntent::Never);
    assert!(matches!(cli.command, Some(Commands::Locate { .. })));
}
