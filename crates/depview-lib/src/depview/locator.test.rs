use super::*;
use crate::application::session_mocks::{MockFileSystemProvider, MockInteractiveProvider};

fn workspace(files: &[&str]) -> MockFileSystemProvider {
    files
        .iter()
        .fold(MockFileSystemProvider::new(), |fs, path| fs.with_file(*path, "{}"))
}

fn locate(
    fs: &MockFileSystemProvider,
    interactive: &MockInteractiveProvider,
    target: &str,
    pattern: &str,
) -> Result<Option<PathBuf>, LocateError> {
    ConfigFileLocator::new(fs, interactive).locate(Path::new(target), Path::new("/proj"), pattern)
}

#[test]
fn test_no_candidates_yields_none() {
    let fs = workspace(&["/proj/src/a.ts"]);
    let interactive = MockInteractiveProvider::new();

    let result = locate(&fs, &interactive, "/proj/src/a.ts", "tsconfig.json").unwrap();

    assert_eq!(result, None);
    assert!(interactive.get_pick_calls().is_empty());
}

#[test]
fn test_single_candidate_returned_without_ranking() {
    let fs = workspace(&["/proj/packages/other/tsconfig.json", "/proj/src/a.ts"]);
    let interactive = MockInteractiveProvider::new();

    let result = locate(&fs, &interactive, "/proj/src/a.ts", "tsconfig.json").unwrap();

    assert_eq!(result, Some(PathBuf::from("/proj/packages/other/tsconfig.json")));
    assert!(interactive.get_pick_calls().is_empty());
}

#[test]
fn test_closest_candidate_is_auto_selected() {
    let fs = workspace(&["/proj/tsconfig.json", "/proj/src/tsconfig.json"]);
    let interactive = MockInteractiveProvider::new();

    let result = locate(&fs, &interactive, "/proj/src/app/a.ts", "tsconfig.json").unwrap();

    assert_eq!(result, Some(PathBuf::from("/proj/src/tsconfig.json")));
    assert!(interactive.get_pick_calls().is_empty());
}

#[test]
fn test_tie_prompts_with_shorter_name_first() {
    let fs = workspace(&["/proj/src/tsconfig.build.json", "/proj/src/tsconfig.json"]);
    let interactive = MockInteractiveProvider::new().with_pick(Some(1));

    let result = locate(&fs, &interactive, "/proj/src/a.ts", "tsconfig*.json").unwrap();

    assert_eq!(result, Some(PathBuf::from("/proj/src/tsconfig.build.json")));

    let calls = interactive.get_pick_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, PICK_TITLE);
    let labels: Vec<&str> = calls[0].1.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, vec!["tsconfig.json", "tsconfig.build.json"]);
    assert_eq!(calls[0].1[0].detail, "/proj/src/tsconfig.json");
}

#[test]
fn test_auto_select_disabled_always_prompts_in_rank_order() {
    let fs = workspace(&["/proj/tsconfig.json", "/proj/src/tsconfig.json"]);
    let interactive = MockInteractiveProvider::new().with_pick(Some(0));

    let result = ConfigFileLocator::new(&fs, &interactive)
        .with_auto_select(false)
        .locate(Path::new("/proj/src/a.ts"), Path::new("/proj"), "tsconfig.json")
        .unwrap();

    assert_eq!(result, Some(PathBuf::from("/proj/src/tsconfig.json")));
    let details: Vec<String> = interactive.get_pick_calls()[0]
        .1
        .iter()
        .map(|item| item.detail.clone())
        .collect();
    assert_eq!(details, vec!["/proj/src/tsconfig.json", "/proj/tsconfig.json"]);
}

#[test]
fn test_cancelled_prompt_yields_none() {
    let fs = workspace(&["/proj/a/tsconfig.json", "/proj/b/tsconfig.json"]);
    let interactive = MockInteractiveProvider::new().with_pick(None);

    let result = locate(&fs, &interactive, "/proj/c/x.ts", "tsconfig.json").unwrap();

    assert_eq!(result, None);
    assert_eq!(interactive.get_pick_calls().len(), 1);
}

#[test]
fn test_out_of_range_selection_is_an_error() {
    let fs = workspace(&["/proj/a/tsconfig.json", "/proj/b/tsconfig.json"]);
    let interactive = MockInteractiveProvider::new().with_pick(Some(7));

    let err = locate(&fs, &interactive, "/proj/c/x.ts", "tsconfig.json").unwrap_err();

    assert!(matches!(err, LocateError::SelectionOutOfRange { index: 7, count: 2 }));
}

#[test]
fn test_prompt_failure_is_reported() {
    let fs = workspace(&["/proj/a/tsconfig.json", "/proj/b/tsconfig.json"]);
    let interactive = MockInteractiveProvider::new().with_pick_error("no terminal");

    let err = locate(&fs, &interactive, "/proj/c/x.ts", "tsconfig.json").unwrap_err();

    assert!(matches!(err, LocateError::Prompt { .. }));
    assert!(err.to_string().contains("no terminal"));
}

#[test]
fn test_dependency_directories_are_never_candidates() {
    let fs = workspace(&[
        "/proj/node_modules/lib/tsconfig.json",
        "/proj/src/node_modules/x/tsconfig.json",
        "/proj/tsconfig.json",
    ]);
    let interactive = MockInteractiveProvider::new();

    let result = locate(&fs, &interactive, "/proj/src/a.ts", "tsconfig.json").unwrap();

    assert_eq!(result, Some(PathBuf::from("/proj/tsconfig.json")));
}

#[test]
fn test_pattern_matches_whole_file_name() {
    let fs = workspace(&["/proj/src/my-tsconfig.json", "/proj/tsconfig.json"]);
    let interactive = MockInteractiveProvider::new();

    let found = ConfigFileLocator::new(&fs, &interactive)
        .find_candidates(Path::new("/proj"), "tsconfig.json")
        .unwrap();

    assert_eq!(found, vec![PathBuf::from("/proj/tsconfig.json")]);
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let fs = workspace(&["/proj/tsconfig.json"]);
    let interactive = MockInteractiveProvider::new();

    let err = locate(&fs, &interactive, "/proj/a.ts", "tsconfig[.json").unwrap_err();

    assert!(matches!(err, LocateError::InvalidPattern { .. }));
}

#[test]
fn test_enumeration_failure_is_reported() {
    let fs = MockFileSystemProvider::new();
    let interactive = MockInteractiveProvider::new();

    let err = locate(&fs, &interactive, "/proj/a.ts", "tsconfig.json").unwrap_err();

    assert!(matches!(err, LocateError::Enumeration { .. }));
}

#[test]
fn test_rank_candidates_puts_unrelated_last() {
    let ranked = rank_candidates(
        vec![
            PathBuf::from("elsewhere/tsconfig.json"),
            PathBuf::from("proj/tsconfig.json"),
            PathBuf::from("proj/src/tsconfig.json"),
        ],
        Path::new("proj/src/app/a.ts"),
    );

    let order: Vec<&str> = ranked.iter().map(|c| c.normalized.as_str()).collect();
    assert_eq!(
        order,
        vec!["proj/src/tsconfig.json", "proj/tsconfig.json", "elsewhere/tsconfig.json"]
    );
    assert!(!ranked[2].is_related());
}

#[test]
fn test_rank_candidates_normalizes_backslashes() {
    let ranked = rank_candidates(
        vec![PathBuf::from(r"C:\proj\src\tsconfig.json")],
        Path::new(r"C:\proj\src\app\widget.ts"),
    );

    assert_eq!(ranked[0].normalized, "C:/proj/src/tsconfig.json");
    assert_eq!(ranked[0].score, -2);
}

#[test]
fn test_ancestor_walk_prefers_nearest_directory() {
    let fs = workspace(&["/proj/src/tsconfig.json", "/proj/tsconfig.build.json"]);
    let interactive = MockInteractiveProvider::new();
    let names = parse_name_list("tsconfig.build.json, tsconfig.json");

    let found = ConfigFileLocator::new(&fs, &interactive).locate_in_ancestors(
        Path::new("/proj/src/app/a.ts"),
        Path::new("/proj"),
        &names,
    );

    assert_eq!(found, Some(PathBuf::from("/proj/src/tsconfig.json")));
}

#[test]
fn test_ancestor_walk_stops_at_root() {
    let fs = workspace(&["/tsconfig.json"]);
    let interactive = MockInteractiveProvider::new();

    let found = ConfigFileLocator::new(&fs, &interactive).locate_in_ancestors(
        Path::new("/proj/src/a.ts"),
        Path::new("/proj"),
        &["tsconfig.json".to_string()],
    );

    assert_eq!(found, None);
}

#[test]
fn test_parse_name_list_drops_blanks() {
    assert_eq!(
        parse_name_list(" tsconfig.json,, jsconfig.json ,"),
        vec!["tsconfig.json".to_string(), "jsconfig.json".to_string()]
    );
}
