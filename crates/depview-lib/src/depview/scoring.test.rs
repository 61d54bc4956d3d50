use super::*;

const TARGET: &str = "/proj/src/app/widget.ts";

#[test]
fn test_same_directory_scores_minus_one() {
    assert_eq!(score("/proj/src/app/tsconfig.json", TARGET), -1);
}

#[test]
fn test_closer_ancestor_scores_higher() {
    let near = score("/proj/src/tsconfig.json", TARGET);
    let far = score("/proj/tsconfig.json", TARGET);

    assert_eq!(near, -2);
    assert_eq!(far, -3);
    assert!(near > far);
}

#[test]
fn test_two_versus_four_segments_from_target() {
    let target = "/w/a/b/c/d/file.ts";
    let a = score("/w/a/b/c/tsconfig.json", target);
    let b = score("/w/a/tsconfig.json", target);

    assert_eq!(a, -2);
    assert_eq!(b, -4);
    assert!(a > b);
    assert_eq!(
        compare((a, 13, "/w/a/b/c/tsconfig.json"), (b, 13, "/w/a/tsconfig.json")),
        Ordering::Less
    );
}

#[test]
fn test_sibling_subtree_meets_at_common_ancestor() {
    // packages/lib is not an ancestor; the walk continues up to /proj
    assert_eq!(score("/proj/packages/lib/tsconfig.json", TARGET), -3);
}

#[test]
fn test_prefix_must_end_on_segment_boundary() {
    assert_eq!(score("/proj/srcx/tsconfig.json", "/proj/src/a.ts"), -2);
    assert_eq!(score("/proj/src/tsconfig.json", "/proj/src/a.ts"), -1);
}

#[test]
fn test_unrelated_relative_paths_score_zero() {
    assert_eq!(score("tsconfig.json", "other/file.ts"), UNRELATED);
}

#[test]
fn test_backslash_paths_score_like_forward_slash_paths() {
    assert_eq!(
        score(r"C:\proj\src\tsconfig.json", "C:/proj/src/app/widget.ts"),
        score("C:/proj/src/tsconfig.json", "C:/proj/src/app/widget.ts")
    );
    assert_eq!(score(r"C:\proj\src\tsconfig.json", r"C:\proj\src\app\widget.ts"), -2);
}

#[test]
fn test_name_length() {
    assert_eq!(name_length("/proj/tsconfig.json"), 13);
    assert_eq!(name_length("/proj/tsconfig.build.json"), 19);
    assert_eq!(name_length(r"C:\proj\tsconfig.json"), 13);
}

#[test]
fn test_shorter_name_wins_equal_closeness() {
    let canonical = (-2, name_length("/proj/src/tsconfig.json"), "/proj/src/tsconfig.json");
    let decorated = (
        -2,
        name_length("/proj/src/tsconfig.build.json"),
        "/proj/src/tsconfig.build.json",
    );

    assert_eq!(compare(canonical, decorated), Ordering::Less);
    assert_eq!(compare(decorated, canonical), Ordering::Greater);
}

#[test]
fn test_unrelated_sorts_after_any_related_candidate() {
    assert_eq!(compare((-9, 30, "/a"), (UNRELATED, 1, "/b")), Ordering::Less);
    assert_eq!(compare((UNRELATED, 1, "/b"), (-9, 30, "/a")), Ordering::Greater);
}

#[test]
fn test_full_path_breaks_remaining_ties() {
    assert_eq!(compare((-2, 13, "/a/x"), (-2, 13, "/b/x")), Ordering::Less);
    assert_eq!(compare((-2, 13, "/a/x"), (-2, 13, "/a/x")), Ordering::Equal);
}
