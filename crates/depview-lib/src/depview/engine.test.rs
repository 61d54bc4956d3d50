use super::*;
use crate::application::session::FileSystemProvider;
use crate::application::session_mocks::{MockCommandSession, MockFileSystemProvider, MockProcessProvider};
use crate::depview::resolver::{PayloadSource, Provenance};
use crate::depview::rules::{self, RuleSet, RuleToggles};
use serde_json::json;

fn resolved(rule_set: RuleSet, rule_source: PayloadSource) -> ResolvedOptions {
    let mut options = Map::new();
    options.insert("outputType".into(), json!("dot"));
    ResolvedOptions {
        options: Value::Object(options),
        rule_set,
        provenance: Provenance {
            options: PayloadSource::Builtin,
            rule_set: rule_source,
            override_file: (rule_source == PayloadSource::Override)
                .then(|| PathBuf::from("/proj/.dependency-cruiser.json")),
            ts_config: None,
        },
    }
}

fn builtin() -> ResolvedOptions {
    resolved(
        RuleSet::from_definitions(rules::build(&RuleToggles::new())),
        PayloadSource::Builtin,
    )
}

fn session(process: MockProcessProvider) -> MockCommandSession {
    MockCommandSession::new()
        .with_filesystem(MockFileSystemProvider::new().with_directory("/tmp/scratch"))
        .with_process(process)
}

#[test]
fn test_engine_config_includes_rules_when_validating() {
    let config = engine_config(&builtin());

    assert_eq!(config["forbidden"][0]["name"], "no-circular");
    assert_eq!(config["options"]["outputType"], "dot");
    assert!(config["options"].get("ruleSet").is_none());
}

#[test]
fn test_engine_config_omits_empty_rule_set() {
    let empty = resolved(
        RuleSet::from_definitions(Vec::new()),
        PayloadSource::Builtin,
    );

    let config = engine_config(&empty);

    assert!(config.get("forbidden").is_none());
    assert!(config.get("options").is_some());
}

#[test]
fn test_run_analysis_invocation() {
    let session = session(MockProcessProvider::new().with_stdout(ANALYZER, "digraph \"deps\" {}"));

    let output = run_analysis(
        &session,
        &builtin(),
        Path::new("/proj"),
        "src/app/widget.ts",
        Path::new("/tmp/scratch"),
    )
    .unwrap();

    assert_eq!(output, "digraph \"deps\" {}");
    let calls = session.process_provider.get_calls_for_command(ANALYZER);
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].args,
        vec![
            "--config",
            "/tmp/scratch/depview.config.json",
            "--output-type",
            "dot",
            "src/app/widget.ts"
        ]
    );
    assert_eq!(calls[0].working_dir, PathBuf::from("/proj"));

    let written = session
        .filesystem_provider
        .read_to_string(Path::new("/tmp/scratch/depview.config.json"))
        .unwrap();
    let written: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(written, engine_config(&builtin()));
}

#[test]
fn test_missing_analyzer_is_unavailable() {
    let session = session(MockProcessProvider::new().with_unavailable(ANALYZER));

    let err = run_analysis(&session, &builtin(), Path::new("/proj"), "a.ts", Path::new("/tmp/scratch"))
        .unwrap_err();

    assert!(matches!(err, EngineError::Unavailable { ref program } if program == ANALYZER));
    assert!(session.process_provider.get_calls().is_empty());
}

#[test]
fn test_failure_with_builtin_payloads_is_analysis_failure() {
    let session = session(MockProcessProvider::new().with_failure(ANALYZER, "ERROR: cannot parse a.ts"));

    let err = run_analysis(&session, &builtin(), Path::new("/proj"), "a.ts", Path::new("/tmp/scratch"))
        .unwrap_err();

    assert!(matches!(err, EngineError::AnalysisFailed { .. }));
    assert!(err.to_string().contains("cannot parse"));
}

#[test]
fn test_failure_with_override_payload_points_at_override_file() {
    let document = json!({ "forbidden": [{ "bogus": true }] });
    let from_override = resolved(
        RuleSet::from_document(document.as_object().unwrap()).unwrap(),
        PayloadSource::Override,
    );
    let session = session(MockProcessProvider::new().with_failure(ANALYZER, "invalid rule"));

    let err = run_analysis(&session, &from_override, Path::new("/proj"), "a.ts", Path::new("/tmp/scratch"))
        .unwrap_err();

    assert!(matches!(err, EngineError::MalformedOverride { .. }));
    assert!(err.to_string().contains(".dependency-cruiser.json"));
    assert!(err.to_string().contains("invalid rule"));
}

#[test]
fn test_malformed_override_options_reach_the_engine() {
    let mut from_override = resolved(
        RuleSet::from_document(json!({ "forbidden": [] }).as_object().unwrap()).unwrap(),
        PayloadSource::Override,
    );
    from_override.options = json!("bad");
    from_override.provenance.options = PayloadSource::Override;

    let config = engine_config(&from_override);
    assert_eq!(config, json!({ "options": "bad" }));

    let session = session(MockProcessProvider::new().with_failure(ANALYZER, "options should be an object"));
    let err = run_analysis(&session, &from_override, Path::new("/proj"), "a.ts", Path::new("/tmp/scratch"))
        .unwrap_err();

    assert!(matches!(err, EngineError::MalformedOverride { .. }));
    assert_eq!(session.process_provider.get_calls()[0].args[3], "dot");
}

#[test]
fn test_render_svg_uses_renderer_stdout() {
    let session = session(MockProcessProvider::new().with_stdout(RENDERER, "<svg/>"));

    let svg = render_svg(&session, "digraph {}", Path::new("/tmp/scratch")).unwrap();

    assert_eq!(svg, "<svg/>");
    let calls = session.process_provider.get_calls_for_command(RENDERER);
    assert_eq!(calls[0].args, vec!["-Tsvg", "/tmp/scratch/graph.dot"]);
    assert_eq!(
        session
            .filesystem_provider
            .read_to_string(Path::new("/tmp/scratch/graph.dot"))
            .unwrap(),
        "digraph {}"
    );
}

#[test]
fn test_render_failure() {
    let session = session(MockProcessProvider::new().with_failure(RENDERER, "syntax error in line 1"));

    let err = render_svg(&session, "digraph {", Path::new("/tmp/scratch")).unwrap_err();

    assert!(matches!(err, EngineError::RenderFailed { .. }));
}

#[test]
fn test_missing_renderer_is_unavailable() {
    let session = session(MockProcessProvider::new().with_unavailable(RENDERER));

    let err = render_svg(&session, "digraph {}", Path::new("/tmp/scratch")).unwrap_err();

    assert!(matches!(err, EngineError::Unavailable { .. }));
}
