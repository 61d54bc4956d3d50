use super::*;

#[test]
fn test_normalize_converts_backslashes() {
    assert_eq!(normalize_separators(r"C:\proj\src\tsconfig.json"), "C:/proj/src/tsconfig.json");
    assert_eq!(normalize_separators("/proj/src/"), "/proj/src");
    assert_eq!(normalize_separators("/"), "/");
}

#[test]
fn test_segment_count_ignores_empty_segments() {
    assert_eq!(segment_count("/proj/src/app/widget.ts"), 4);
    assert_eq!(segment_count("src/app"), 2);
    assert_eq!(segment_count(""), 0);
}

#[test]
fn test_file_name() {
    assert_eq!(file_name("/proj/src/tsconfig.build.json"), "tsconfig.build.json");
    assert_eq!(file_name("tsconfig.json"), "tsconfig.json");
}

#[test]
fn test_is_ancestor_respects_segment_boundaries() {
    assert!(is_ancestor("/proj/src", "/proj/src/app/widget.ts"));
    assert!(!is_ancestor("/proj/src", "/proj/srcx/widget.ts"));
    assert!(!is_ancestor("/proj/src", "/proj/src"));
    assert!(is_ancestor("", "/proj/a.ts"));
    assert!(!is_ancestor("", "relative/a.ts"));
}

#[test]
fn test_slash_root_contains_every_absolute_path() {
    assert!(is_ancestor("/", "/proj/a.ts"));
    assert!(!is_ancestor("/", "/"));
    assert!(!is_ancestor("/", "relative/a.ts"));
    assert_eq!(relative_to("/proj/a.ts", "/"), Some("proj/a.ts".to_string()));
    assert_eq!(relative_to("/a/tsconfig.json", "/"), Some("a/tsconfig.json".to_string()));
}

#[test]
fn test_relative_to() {
    assert_eq!(
        relative_to("/proj/src/app/widget.ts", "/proj"),
        Some("src/app/widget.ts".to_string())
    );
    assert_eq!(relative_to("/other/widget.ts", "/proj"), None);
    assert_eq!(relative_to("/a.ts", ""), Some("a.ts".to_string()));
}
