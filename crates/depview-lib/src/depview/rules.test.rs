use super::*;

#[test]
fn test_all_toggles_off_builds_nothing() {
    assert!(build(&RuleToggles::all_disabled()).is_empty());
}

#[test]
fn test_only_no_circular_builds_one_matching_definition() {
    let toggles = RuleToggles::all_disabled().with(Rule::NoCircular, true);

    let rules = build(&toggles);

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0], Rule::NoCircular.definition());
    assert_eq!(rules[0].name, "no-circular");
    assert_eq!(rules[0].to, json!({ "circular": true }));
}

#[test]
fn test_defaults_enable_only_no_circular() {
    let names: Vec<String> = build(&RuleToggles::new()).into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["no-circular".to_string()]);
}

#[test]
fn test_build_follows_declaration_order() {
    let toggles = RuleToggles::new()
        .with(Rule::NoDuplicateDepTypes, true)
        .with(Rule::NotToUnresolvable, true)
        .with(Rule::NoCircular, true);

    let names: Vec<String> = build(&toggles).into_iter().map(|r| r.name).collect();

    assert_eq!(
        names,
        vec!["no-circular", "not-to-unresolvable", "no-duplicate-dep-types"]
    );
}

#[test]
fn test_unknown_toggles_contribute_nothing() {
    let toggles: RuleToggles =
        toml::from_str("no-such-rule = true\nno-orphans = true\nno-circular = false").unwrap();

    let names: Vec<String> = build(&toggles).into_iter().map(|r| r.name).collect();

    assert_eq!(names, vec!["no-orphans".to_string()]);
    assert_eq!(toggles.unknown_names(), vec!["no-such-rule"]);
}

#[test]
fn test_set_rejects_unknown_names() {
    let mut toggles = RuleToggles::new();

    let err = toggles.set("no-cycles", true).unwrap_err();

    assert!(err.to_string().contains("no-cycles"));
    assert!(err.to_string().contains("no-circular"));
    assert!(toggles.set("no-orphans", true).is_ok());
    assert!(toggles.is_enabled(Rule::NoOrphans));
}

#[test]
fn test_registry_names_round_trip() {
    for rule in Rule::all() {
        assert_eq!(Rule::from_name(rule.name()), Some(*rule));
    }
    assert_eq!(Rule::from_name("NO-CIRCULAR"), None);
}

#[test]
fn test_definition_serializes_in_engine_shape() {
    let value = serde_json::to_value(Rule::NotToUnresolvable.definition()).unwrap();

    assert_eq!(value["name"], "not-to-unresolvable");
    assert_eq!(value["severity"], "error");
    assert_eq!(value["from"], json!({}));
    assert_eq!(value["to"], json!({ "couldNotResolve": true }));
}

#[test]
fn test_rule_count_spans_rule_arrays_only() {
    let document = json!({
        "forbidden": [{ "name": "a" }],
        "allowed": [{ "from": {}, "to": {} }, { "from": {}, "to": {} }],
        "allowedSeverity": "warn",
        "options": { "outputType": "dot" }
    });

    let rule_set = RuleSet::from_document(document.as_object().unwrap()).unwrap();

    assert_eq!(rule_set.rule_count(), 3);
    assert!(rule_set.get("options").is_none());
    assert_eq!(rule_set.get("allowedSeverity"), Some(&json!("warn")));
}

#[test]
fn test_empty_forbidden_is_present_but_empty() {
    let document = json!({ "forbidden": [] });

    let rule_set = RuleSet::from_document(document.as_object().unwrap()).unwrap();

    assert!(rule_set.is_empty());
    assert_eq!(rule_set.to_value(), json!({ "forbidden": [] }));
}

#[test]
fn test_non_array_payload_counts_as_zero() {
    let document = json!({ "forbidden": { "name": "odd" }, "allowedSeverity": "info" });

    let rule_set = RuleSet::from_document(document.as_object().unwrap()).unwrap();

    assert_eq!(rule_set.rule_count(), 0);
    assert_eq!(rule_set.get("forbidden"), Some(&json!({ "name": "odd" })));
}

#[test]
fn test_document_without_rule_keys_has_no_rule_set() {
    let document = json!({ "options": {} });
    assert!(RuleSet::from_document(document.as_object().unwrap()).is_none());
}

#[test]
fn test_builtin_rule_set_wraps_forbidden() {
    let rule_set = RuleSet::from_definitions(build(&RuleToggles::new()));

    assert_eq!(rule_set.rule_count(), 1);
    assert_eq!(rule_set.as_map().len(), 1);
    assert_eq!(rule_set.get("forbidden").unwrap()[0]["name"], "no-circular");
}
