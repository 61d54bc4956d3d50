use super::*;
use crate::application::session_mocks::{MockFileSystemProvider, MockInteractiveProvider};
use crate::depview::rules::Rule;
use serde_json::json;

const ROOT: &str = "/proj";
const TARGET: &str = "/proj/src/app/widget.ts";
const OVERRIDE: &str = "/proj/.dependency-cruiser.json";

fn typed() -> ResolveFlags {
    ResolveFlags { typed: true }
}

fn resolve_with(
    fs: &MockFileSystemProvider,
    interactive: &MockInteractiveProvider,
    settings: &Settings,
    flags: ResolveFlags,
) -> ResolvedOptions {
    ConfigResolver::new(fs, interactive)
        .resolve(Path::new(TARGET), Path::new(ROOT), settings, flags)
        .unwrap()
}

fn two_configs() -> MockFileSystemProvider {
    MockFileSystemProvider::new()
        .with_file("/proj/tsconfig.json", "{}")
        .with_file("/proj/src/tsconfig.json", "{}")
        .with_file(TARGET, "export {}")
}

#[test]
fn test_end_to_end_closest_config_and_default_rules() {
    let fs = two_configs();
    let interactive = MockInteractiveProvider::new();

    let resolved = resolve_with(&fs, &interactive, &Settings::default(), typed());

    assert!(interactive.get_pick_calls().is_empty());
    assert_eq!(resolved.provenance.ts_config, Some(PathBuf::from("/proj/src/tsconfig.json")));
    assert_eq!(resolved.options["tsConfig"], json!({ "fileName": "src/tsconfig.json" }));
    assert_eq!(resolved.rule_set.get("forbidden").unwrap().as_array().unwrap().len(), 1);
    assert!(resolved.validate());
    assert_eq!(resolved.to_value()["validate"], true);
}

#[test]
fn test_override_options_only() {
    let override_options = json!({ "outputType": "json", "doNotFollow": { "path": "node_modules" } });
    let fs = two_configs().with_file(OVERRIDE, json!({ "options": override_options }).to_string());
    let interactive = MockInteractiveProvider::new();

    let resolved = resolve_with(&fs, &interactive, &Settings::default(), typed());

    assert_eq!(resolved.options, override_options);
    assert_eq!(
        resolved.rule_set,
        RuleSet::from_definitions(rules::build(&Settings::default().rules))
    );
    assert_eq!(resolved.validate(), resolved.rule_set.rule_count() > 0);
    assert_eq!(resolved.provenance.options, PayloadSource::Override);
    assert_eq!(resolved.provenance.rule_set, PayloadSource::Builtin);
    // built-in options path skipped entirely
    assert_eq!(resolved.provenance.ts_config, None);
    assert!(resolved.options.get("tsConfig").is_none());
}

#[test]
fn test_override_empty_forbidden_only() {
    let fs = two_configs().with_file(OVERRIDE, r#"{ "forbidden": [] }"#);
    let interactive = MockInteractiveProvider::new();

    let resolved = resolve_with(&fs, &interactive, &Settings::default(), typed());

    assert_eq!(resolved.rule_set.to_value(), json!({ "forbidden": [] }));
    assert!(!resolved.validate());
    assert_eq!(resolved.to_value()["ruleSet"], json!({ "forbidden": [] }));
    assert_eq!(resolved.provenance.options, PayloadSource::Builtin);
    assert_eq!(resolved.provenance.rule_set, PayloadSource::Override);
    assert!(resolved.options.get("tsConfig").is_some());
}

#[test]
fn test_override_both_payloads() {
    let fs = two_configs().with_file(
        OVERRIDE,
        r#"{ "options": { "outputType": "err" }, "allowed": [{ "from": {}, "to": {} }], "allowedSeverity": "warn" }"#,
    );
    let interactive = MockInteractiveProvider::new();

    let resolved = resolve_with(&fs, &interactive, &Settings::default(), typed());

    assert_eq!(resolved.output_type(), Some("err"));
    assert_eq!(resolved.rule_set.as_map().len(), 2);
    assert!(resolved.validate());
    assert!(resolved.provenance.uses_override());
    assert_eq!(resolved.provenance.override_file, Some(PathBuf::from(OVERRIDE)));
}

#[test]
fn test_override_cannot_set_derived_keys() {
    let fs = two_configs().with_file(
        OVERRIDE,
        r#"{ "options": { "outputType": "dot", "validate": false, "ruleSet": { "forbidden": [] } } }"#,
    );
    let interactive = MockInteractiveProvider::new();

    let resolved = resolve_with(&fs, &interactive, &Settings::default(), typed());
    let value = resolved.to_value();

    assert_eq!(value["validate"], true);
    assert_eq!(value["ruleSet"]["forbidden"][0]["name"], "no-circular");
    assert!(resolved.options.get("validate").is_none());
}

#[test]
fn test_absent_disabled_and_unreadable_override_are_identical() {
    let interactive = MockInteractiveProvider::new();
    let settings = Settings::default();

    let absent = resolve_with(&two_configs(), &interactive, &settings, typed());

    let override_fs = two_configs().with_file(OVERRIDE, r#"{ "forbidden": [] }"#);
    let mut disabled_settings = settings.clone();
    disabled_settings.analysis.enable_override_file = false;
    let disabled = resolve_with(&override_fs, &interactive, &disabled_settings, typed());

    let broken_fs = two_configs().with_file(OVERRIDE, "{ \"forbidden\": [");
    let unreadable = resolve_with(&broken_fs, &interactive, &settings, typed());

    let not_a_file = two_configs().with_directory(OVERRIDE);
    let directory = resolve_with(&not_a_file, &interactive, &settings, typed());

    let denied_fs = two_configs().with_read_error(OVERRIDE);
    let denied = resolve_with(&denied_fs, &interactive, &settings, typed());

    assert_eq!(absent, disabled);
    assert_eq!(absent, unreadable);
    assert_eq!(absent, directory);
    assert_eq!(absent, denied);
    assert_eq!(denied_fs.read_count(Path::new(OVERRIDE)), 1);
    assert_eq!(override_fs.read_count(Path::new(OVERRIDE)), 0);
}

#[test]
fn test_non_object_options_kept_beside_override_rules() {
    let fs = two_configs().with_file(OVERRIDE, r#"{ "options": "bad", "forbidden": [] }"#);
    let interactive = MockInteractiveProvider::new();

    let resolved = resolve_with(&fs, &interactive, &Settings::default(), typed());

    assert_eq!(resolved.options, json!("bad"));
    assert!(!resolved.options_well_formed());
    assert_eq!(resolved.rule_set.to_value(), json!({ "forbidden": [] }));
    assert!(!resolved.validate());
    assert_eq!(resolved.provenance.options, PayloadSource::Override);
    assert_eq!(resolved.provenance.rule_set, PayloadSource::Override);
    assert_eq!(resolved.provenance.override_file, Some(PathBuf::from(OVERRIDE)));
    assert_eq!(resolved.provenance.ts_config, None);
    assert_eq!(resolved.to_value(), json!("bad"));
}

#[test]
fn test_resolve_is_idempotent() {
    let fs = two_configs().with_file(OVERRIDE, r#"{ "required": [] }"#);
    let interactive = MockInteractiveProvider::new();
    let settings = Settings::default();

    let first = resolve_with(&fs, &interactive, &settings, typed());
    let second = resolve_with(&fs, &interactive, &settings, typed());

    assert_eq!(first, second);
    assert_eq!(first.to_value(), second.to_value());
    assert_eq!(fs.read_count(Path::new(OVERRIDE)), 2);
}

#[test]
fn test_untyped_skips_type_configuration_discovery() {
    let fs = MockFileSystemProvider::new()
        .with_file("/proj/a/tsconfig.json", "{}")
        .with_file("/proj/b/tsconfig.json", "{}");
    let interactive = MockInteractiveProvider::new();

    let resolved = resolve_with(&fs, &interactive, &Settings::default(), ResolveFlags::default());

    assert!(interactive.get_pick_calls().is_empty());
    assert!(resolved.options.get("tsConfig").is_none());
    assert!(resolved.options.get("parser").is_none());
}

#[test]
fn test_cancelled_prompt_still_resolves() {
    let fs = MockFileSystemProvider::new()
        .with_file("/proj/a/tsconfig.json", "{}")
        .with_file("/proj/b/tsconfig.json", "{}");
    let interactive = MockInteractiveProvider::new().with_pick(None);

    let resolved = resolve_with(&fs, &interactive, &Settings::default(), typed());

    assert_eq!(interactive.get_pick_calls().len(), 1);
    assert_eq!(resolved.provenance.ts_config, None);
    assert!(resolved.options.get("tsConfig").is_none());
    assert_eq!(resolved.options["parser"], "tsc");
}

#[test]
fn test_no_rules_enabled_is_not_an_error() {
    let mut settings = Settings::default();
    settings.rules = rules::RuleToggles::all_disabled();
    let interactive = MockInteractiveProvider::new();

    let resolved = resolve_with(&two_configs(), &interactive, &settings, typed());

    assert!(!resolved.validate());
    assert_eq!(resolved.rule_set.to_value(), json!({ "forbidden": [] }));
}

#[test]
fn test_rule_toggles_flow_into_rule_set() {
    let mut settings = Settings::default();
    settings.rules = settings.rules.with(Rule::NoOrphans, true);
    let interactive = MockInteractiveProvider::new();

    let resolved = resolve_with(&two_configs(), &interactive, &settings, typed());

    let names: Vec<&str> = resolved.rule_set.get("forbidden").unwrap().as_array().unwrap()
        .iter()
        .filter_map(|rule| rule["name"].as_str())
        .collect();
    assert_eq!(names, vec!["no-circular", "no-orphans"]);
}

#[test]
fn test_ancestor_strategy() {
    let fs = two_configs().with_file("/proj/src/app/tsconfig.app.json", "{}");
    let mut settings = Settings::default();
    settings.analysis.locate_strategy = LocateStrategy::Ancestors;
    settings.analysis.tsconfig_names = "tsconfig.app.json,tsconfig.json".to_string();
    let interactive = MockInteractiveProvider::new();

    let resolved = resolve_with(&fs, &interactive, &settings, typed());

    assert_eq!(resolved.options["tsConfig"]["fileName"], "src/app/tsconfig.app.json");
    assert!(interactive.get_pick_calls().is_empty());
}

#[test]
fn test_unreadable_workspace_means_no_type_configuration() {
    let fs = MockFileSystemProvider::new();
    let interactive = MockInteractiveProvider::new();

    let resolved = resolve_with(&fs, &interactive, &Settings::default(), typed());

    assert_eq!(resolved.provenance.ts_config, None);
}

#[test]
fn test_invalid_pattern_propagates() {
    let mut settings = Settings::default();
    settings.analysis.tsconfig_pattern = "tsconfig[".to_string();
    let fs = two_configs();
    let interactive = MockInteractiveProvider::new();

    let err = ConfigResolver::new(&fs, &interactive)
        .resolve(Path::new(TARGET), Path::new(ROOT), &settings, typed())
        .unwrap_err();

    assert!(matches!(err, ResolveError::Locate(LocateError::InvalidPattern { .. })));
}

#[test]
fn test_filesystem_root_as_workspace_gives_relative_type_configuration() {
    let fs = MockFileSystemProvider::new()
        .with_file("/a/tsconfig.json", "{}")
        .with_file("/a/b.ts", "export {}");
    let interactive = MockInteractiveProvider::new();

    let resolved = ConfigResolver::new(&fs, &interactive)
        .resolve(Path::new("/a/b.ts"), Path::new("/"), &Settings::default(), typed())
        .unwrap();

    assert_eq!(resolved.options["tsConfig"]["fileName"], "a/tsconfig.json");
}
