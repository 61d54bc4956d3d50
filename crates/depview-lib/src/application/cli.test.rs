use super::*;

fn parse(args: &[&str]) -> CliConfig {
    CliConfig::load_from(std::iter::once("depview").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_no_subcommand() {
    let cli = parse(&[]);
    assert!(cli.command.is_none());
    assert_eq!(cli.app_config, AppConfig::default());
}

#[test]
fn test_resolve_with_roots_and_settings() {
    let cli = parse(&[
        "resolve",
        "src/app/widget.ts",
        "--root",
        "/ws/a",
        "--root",
        "/ws/b",
        "--theme",
        "improved",
        "--direction",
        "TD",
        "--rule",
        "no-orphans",
        "--no-rule",
        "no-circular",
        "--no-override-file",
    ]);

    let Some(Commands::Resolve { target, settings, out }) = cli.command else {
        panic!("expected resolve");
    };
    assert_eq!(target.file, PathBuf::from("src/app/widget.ts"));
    assert_eq!(target.roots, vec![PathBuf::from("/ws/a"), PathBuf::from("/ws/b")]);
    assert_eq!(target.typed_override(), None);
    assert_eq!(settings.theme, Some(ThemeName::Improved));
    assert_eq!(settings.direction, Some(GraphDirection::TopBottom));
    assert_eq!(out, None);

    let overrides = settings.to_overrides();
    assert!(overrides.no_override_file);
    assert_eq!(overrides.enable_rules, vec!["no-orphans".to_string()]);
    assert_eq!(overrides.disable_rules, vec!["no-circular".to_string()]);
}

#[test]
fn test_typed_flags_conflict() {
    let result = CliConfig::load_from(["depview", "resolve", "a.js", "--typed", "--untyped"]);
    assert!(result.is_err());
}

#[test]
fn test_typed_override() {
    let Some(Commands::Locate { target, .. }) = parse(&["locate", "a.js", "--typed"]).command else {
        panic!("expected locate");
    };
    assert_eq!(target.typed_override(), Some(true));
}

#[test]
fn test_unknown_theme_is_rejected() {
    assert!(CliConfig::load_from(["depview", "rules", "--theme", "neon"]).is_err());
}

#[test]
fn test_graph_defaults_to_svg() {
    let Some(Commands::Graph { format, out, .. }) = parse(&["graph", "a.ts", "-o", "g.svg"]).command else {
        panic!("expected graph");
    };
    assert_eq!(format, GraphFormat::Svg);
    assert_eq!(out, Some(PathBuf::from("g.svg")));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&["rules", "--log-level", "3", "--yes", "--color", "never"]);

    assert_eq!(cli.app_config.log_level, 3);
    assert!(cli.app_config.yes);
    assert_eq!(cli.app_config.color, crate::primitives::TerminalCapsDetectIntent::Never);
    assert_eq!(cli.command.map(|c| c.name()), Some("rules"));
}
