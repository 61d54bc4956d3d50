use super::*;
use crate::application::session_mocks::MockFileSystemProvider;
use crate::depview::rules::Rule;

fn parse(text: &str) -> Result<Settings, SettingsError> {
    Settings::from_toml_str(text, Path::new("/home/u/.config/depview/settings.toml"))
}

#[test]
fn test_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.analysis.tsconfig_pattern, "tsconfig.json");
    assert!(settings.analysis.enable_override_file);
    assert!(settings.analysis.auto_select_closest);
    assert_eq!(settings.analysis.locate_strategy, LocateStrategy::Glob);
    assert_eq!(settings.analysis.output_type, OutputType::Dot);
    assert_eq!(settings.graph.theme, ThemeName::Base);
    assert_eq!(settings.graph.direction, GraphDirection::LeftRight);
    assert!(settings.rules.is_enabled(Rule::NoCircular));
    assert!(!settings.rules.is_enabled(Rule::NoOrphans));
}

#[test]
fn test_full_file() {
    let settings = parse(
        r#"
[analysis]
tsconfig-pattern = "tsconfig*.json"
enable-override-file = false
auto-select-closest = false
locate-strategy = "ancestors"
tsconfig-names = "tsconfig.app.json, tsconfig.json"
output-type = "json"
include-only = "^src"
exclude = "\\.spec\\.ts$"
collapse-pattern = "node_modules/[^/]+"

[rules]
no-circular = false
no-orphans = true

[graph]
theme = "improved"
direction = "TB"
line-shape = "ortho"
"#,
    )
    .unwrap();

    assert_eq!(settings.analysis.tsconfig_pattern, "tsconfig*.json");
    assert!(!settings.analysis.enable_override_file);
    assert!(!settings.analysis.auto_select_closest);
    assert_eq!(settings.analysis.locate_strategy, LocateStrategy::Ancestors);
    assert_eq!(settings.analysis.output_type, OutputType::Json);
    assert_eq!(settings.analysis.include_only.as_deref(), Some("^src"));
    assert_eq!(settings.analysis.exclude.as_deref(), Some("\\.spec\\.ts$"));
    assert!(!settings.rules.is_enabled(Rule::NoCircular));
    assert!(settings.rules.is_enabled(Rule::NoOrphans));
    assert_eq!(settings.graph.theme, ThemeName::Improved);
    assert_eq!(settings.graph.direction, GraphDirection::TopBottom);
    assert_eq!(settings.graph.line_shape, Some(LineShape::Ortho));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let settings = parse("[graph]\ndirection = \"RL\"\n").unwrap();

    assert_eq!(settings.graph.direction, GraphDirection::RightLeft);
    assert_eq!(settings.graph.theme, ThemeName::Base);
    assert_eq!(settings.analysis, AnalysisSettings::default());
}

#[test]
fn test_unknown_theme_is_rejected_by_name() {
    let err = parse("[graph]\ntheme = \"neon\"\n").unwrap_err();

    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("neon"), "{err}");
}

#[test]
fn test_unknown_direction_is_rejected() {
    assert!(parse("[graph]\ndirection = \"diagonal\"\n").is_err());
}

#[test]
fn test_unknown_rule_toggle_is_ignored() {
    let settings = parse("[rules]\nno-such-rule = true\nno-orphans = true\n").unwrap();

    assert!(settings.rules.is_enabled(Rule::NoOrphans));
    assert!(settings.rules.is_enabled(Rule::NoCircular));
    assert_eq!(settings.rules.unknown_names(), vec!["no-such-rule"]);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let fs = MockFileSystemProvider::new();
    let settings = Settings::load(&fs, Some(Path::new("/cfg/settings.toml"))).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_reads_given_path() {
    let fs = MockFileSystemProvider::new().with_file("/cfg/settings.toml", "[graph]\ntheme = \"engineering\"\n");

    let settings = Settings::load(&fs, Some(Path::new("/cfg/settings.toml"))).unwrap();

    assert_eq!(settings.graph.theme, ThemeName::Engineering);
}

#[test]
fn test_load_malformed_file_is_an_error() {
    let fs = MockFileSystemProvider::new().with_file("/cfg/settings.toml", "[graph\n");

    let err = Settings::load(&fs, Some(Path::new("/cfg/settings.toml"))).unwrap_err();

    assert!(err.to_string().contains("/cfg/settings.toml"));
}

#[test]
fn test_overrides_win_over_file() {
    let settings = parse("[graph]\ntheme = \"engineering\"\n[rules]\nno-orphans = true\n").unwrap();
    let overrides = SettingsOverrides {
        theme: Some(ThemeName::Improved),
        output_type: Some(OutputType::Archi),
        no_override_file: true,
        include_only: Some("^lib".to_string()),
        enable_rules: vec!["not-to-unresolvable".to_string()],
        disable_rules: vec!["no-orphans".to_string(), "no-circular".to_string()],
        ..Default::default()
    };

    let settings = settings.apply_overrides(&overrides).unwrap();

    assert_eq!(settings.graph.theme, ThemeName::Improved);
    assert_eq!(settings.analysis.output_type, OutputType::Archi);
    assert!(!settings.analysis.enable_override_file);
    assert_eq!(settings.analysis.include_only.as_deref(), Some("^lib"));
    assert!(settings.rules.is_enabled(Rule::NotToUnresolvable));
    assert!(!settings.rules.is_enabled(Rule::NoOrphans));
    assert!(!settings.rules.is_enabled(Rule::NoCircular));
}

#[test]
fn test_override_with_unknown_rule_fails() {
    let overrides = SettingsOverrides {
        enable_rules: vec!["no-cycles".to_string()],
        ..Default::default()
    };

    let err = Settings::default().apply_overrides(&overrides).unwrap_err();

    assert!(matches!(err, SettingsError::Rule(RuleError::UnknownRule { .. })));
}

#[test]
fn test_empty_overrides_change_nothing() {
    let settings = Settings::default().apply_overrides(&SettingsOverrides::default()).unwrap();
    assert_eq!(settings, Settings::default());
}
