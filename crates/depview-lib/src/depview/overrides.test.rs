use super::*;
use crate::application::session_mocks::MockFileSystemProvider;
use serde_json::json;

fn parse(text: &str) -> Result<Option<OverrideConfig>, OverrideError> {
    OverrideConfig::parse(Path::new("/proj/.dependency-cruiser.json"), text)
}

#[test]
fn test_options_only() {
    let config = parse(r#"{ "options": { "outputType": "json" } }"#).unwrap().unwrap();

    assert_eq!(config.options.unwrap()["outputType"], "json");
    assert!(config.rule_set.is_none());
}

#[test]
fn test_rule_keys_only() {
    let config = parse(r#"{ "forbidden": [] }"#).unwrap().unwrap();

    assert!(config.options.is_none());
    assert_eq!(config.rule_set.unwrap().to_value(), json!({ "forbidden": [] }));
}

#[test]
fn test_both_payloads_and_extra_keys() {
    let config = parse(
        r#"{ "$schema": "x", "extends": "y", "options": {}, "required": [{ "name": "r" }], "allowedSeverity": "warn" }"#,
    )
    .unwrap()
    .unwrap();

    assert_eq!(config.options, Some(json!({})));
    let rule_set = config.rule_set.unwrap();
    assert_eq!(rule_set.as_map().len(), 2);
    assert_eq!(rule_set.rule_count(), 1);
}

#[test]
fn test_empty_object_is_absent() {
    assert!(parse("{}").unwrap().is_none());
    assert!(parse(r#"{ "extends": "base" }"#).unwrap().is_none());
}

#[test]
fn test_invalid_documents_are_errors() {
    assert!(matches!(parse("{ not json"), Err(OverrideError::Parse { .. })));
    assert!(matches!(parse("[1, 2]"), Err(OverrideError::NotAnObject { .. })));
}

#[test]
fn test_non_object_options_kept_with_rule_keys() {
    let config = parse(r#"{ "options": "dot", "forbidden": [] }"#).unwrap().unwrap();

    assert_eq!(config.options, Some(json!("dot")));
    assert_eq!(config.rule_set.unwrap().to_value(), json!({ "forbidden": [] }));
}

#[test]
fn test_read_override_missing_file_is_absent() {
    let fs = MockFileSystemProvider::new().with_directory("/proj");
    assert!(read_override(&fs, Path::new("/proj")).is_none());
}

#[test]
fn test_read_override_swallows_parse_failures() {
    let fs = MockFileSystemProvider::new().with_file("/proj/.dependency-cruiser.json", "{ oops");
    assert!(read_override(&fs, Path::new("/proj")).is_none());
}

#[test]
fn test_read_override_swallows_read_failures() {
    let fs = MockFileSystemProvider::new().with_read_error("/proj/.dependency-cruiser.json");
    let path = Path::new("/proj/.dependency-cruiser.json");

    assert!(fs.is_file(path));
    assert!(read_override(&fs, Path::new("/proj")).is_none());
    assert_eq!(fs.read_count(path), 1);
}

#[test]
fn test_read_override_returns_parsed_payloads() {
    let fs = MockFileSystemProvider::new().with_file(
        "/proj/.dependency-cruiser.json",
        r#"{ "options": { "includeOnly": "^lib" } }"#,
    );

    let config = read_override(&fs, Path::new("/proj")).unwrap();

    assert_eq!(config.path, PathBuf::from("/proj/.dependency-cruiser.json"));
    assert_eq!(config.options.unwrap()["includeOnly"], "^lib");
}

#[test]
fn test_read_override_reads_fresh_each_time() {
    let fs = MockFileSystemProvider::new().with_file("/proj/.dependency-cruiser.json", r#"{ "forbidden": [] }"#);
    let path = Path::new("/proj/.dependency-cruiser.json");

    assert!(read_override(&fs, Path::new("/proj")).is_some());
    fs.write_file(path, "{}").unwrap();
    assert!(read_override(&fs, Path::new("/proj")).is_none());
    assert_eq!(fs.read_count(path), 2);
}
