use super::*;
use crate::primitives::{GraphDirection, OutputType};

#[test]
fn test_untyped_defaults() {
    let options = default_options(&Settings::default(), Path::new("/proj"), false, None);

    assert_eq!(options["outputType"], "dot");
    assert_eq!(options["moduleSystems"], json!(["es6", "cjs"]));
    assert!(!options.contains_key("tsPreCompilationDeps"));
    assert!(!options.contains_key("tsConfig"));
    assert!(!options.contains_key("includeOnly"));
    assert_eq!(options["reporterOptions"]["dot"]["theme"]["graph"]["rankdir"], "LR");
    assert!(options["reporterOptions"]["dot"].get("collapsePattern").is_none());
}

#[test]
fn test_typed_with_located_config() {
    let options = default_options(
        &Settings::default(),
        Path::new("/proj"),
        true,
        Some(Path::new("/proj/src/tsconfig.json")),
    );

    assert_eq!(options["tsPreCompilationDeps"], true);
    assert_eq!(options["parser"], "tsc");
    assert_eq!(options["tsConfig"], json!({ "fileName": "src/tsconfig.json" }));
}

#[test]
fn test_typed_without_config_has_no_reference() {
    let options = default_options(&Settings::default(), Path::new("/proj"), true, None);

    assert_eq!(options["parser"], "tsc");
    assert!(!options.contains_key("tsConfig"));
}

#[test]
fn test_config_outside_root_stays_absolute() {
    let options = default_options(
        &Settings::default(),
        Path::new("/proj"),
        true,
        Some(Path::new("/shared/tsconfig.json")),
    );

    assert_eq!(options["tsConfig"]["fileName"], "/shared/tsconfig.json");
}

#[test]
fn test_filters_and_reporter_hints() {
    let mut settings = Settings::default();
    settings.analysis.include_only = Some("^src".to_string());
    settings.analysis.exclude = Some("\\.spec\\.ts$".to_string());
    settings.analysis.collapse_pattern = Some("node_modules/[^/]+".to_string());
    settings.analysis.output_type = OutputType::Archi;
    settings.graph.direction = GraphDirection::BottomTop;

    let options = default_options(&settings, Path::new("/proj"), false, None);

    assert_eq!(options["includeOnly"], "^src");
    assert_eq!(options["exclude"], json!({ "path": "\\.spec\\.ts$" }));
    let archi = &options["reporterOptions"]["archi"];
    assert_eq!(archi["collapsePattern"], "node_modules/[^/]+");
    assert_eq!(archi["theme"]["graph"]["rankdir"], "BT");
}

#[test]
fn test_non_graph_reporter_has_no_theme() {
    let mut settings = Settings::default();
    settings.analysis.output_type = OutputType::Json;

    let options = default_options(&settings, Path::new("/proj"), false, None);

    assert_eq!(options["outputType"], "json");
    assert!(!options.contains_key("reporterOptions"));
}
