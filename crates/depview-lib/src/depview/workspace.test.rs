use super::*;
use crate::application::session_mocks::MockFileSystemProvider;

#[test]
fn test_absolutize_joins_and_folds() {
    assert_eq!(
        absolutize(Path::new("src/../lib/./a.ts"), Path::new("/proj")),
        PathBuf::from("/proj/lib/a.ts")
    );
    assert_eq!(absolutize(Path::new("/abs/a.ts"), Path::new("/proj")), PathBuf::from("/abs/a.ts"));
}

#[test]
fn test_deepest_explicit_root_wins() {
    let fs = MockFileSystemProvider::new();
    let roots = vec![PathBuf::from("/ws"), PathBuf::from("/ws/packages/app"), PathBuf::from("/other")];

    let folder = workspace_folder_for(&fs, Path::new("/ws/packages/app/src/a.ts"), &roots);

    assert_eq!(folder, PathBuf::from("/ws/packages/app"));
}

#[test]
fn test_root_prefix_must_be_segment_aligned() {
    let fs = MockFileSystemProvider::new().with_file("/ws/package.json", "{}");
    let roots = vec![PathBuf::from("/ws/app")];

    let folder = workspace_folder_for(&fs, Path::new("/ws/application/a.ts"), &roots);

    assert_eq!(folder, PathBuf::from("/ws"));
}

#[test]
fn test_package_json_beats_git() {
    let fs = MockFileSystemProvider::new()
        .with_directory("/repo/.git")
        .with_file("/repo/packages/web/package.json", "{}");

    let folder = workspace_folder_for(&fs, Path::new("/repo/packages/web/src/a.ts"), &[]);

    assert_eq!(folder, PathBuf::from("/repo/packages/web"));
}

#[test]
fn test_git_marker_when_no_package_json() {
    let fs = MockFileSystemProvider::new().with_directory("/repo/.git");

    let folder = workspace_folder_for(&fs, Path::new("/repo/src/deep/a.ts"), &[]);

    assert_eq!(folder, PathBuf::from("/repo"));
}

#[test]
fn test_falls_back_to_parent_directory() {
    let fs = MockFileSystemProvider::new();
    assert_eq!(
        workspace_folder_for(&fs, Path::new("/loose/a.js"), &[]),
        PathBuf::from("/loose")
    );
}

#[test]
fn test_relative_target() {
    assert_eq!(relative_target(Path::new("/proj/src/app/widget.ts"), Path::new("/proj")), "src/app/widget.ts");
    assert_eq!(relative_target(Path::new("/else/a.ts"), Path::new("/proj")), "/else/a.ts");
}

#[test]
fn test_typed_extensions() {
    assert!(is_typed_source(Path::new("a.ts")));
    assert!(is_typed_source(Path::new("a.TSX")));
    assert!(is_typed_source(Path::new("a.mts")));
    assert!(!is_typed_source(Path::new("a.js")));
    assert!(!is_typed_source(Path::new("Makefile")));
}
