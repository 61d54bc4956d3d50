use super::*;
use crate::testing::TempDirFixture;

#[test]
fn test_live_list_files_skips_dependency_dirs() {
    let fixture = TempDirFixture::new().unwrap();
    fixture.write_file("tsconfig.json", "{}").unwrap();
    fixture.write_file("src/tsconfig.json", "{}").unwrap();
    fixture
        .write_file("node_modules/some-lib/tsconfig.json", "{}")
        .unwrap();
    fixture
        .write_file("packages/a/bower_components/x/tsconfig.json", "{}")
        .unwrap();

    let files = LiveFileSystemProvider.list_files(fixture.path()).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files.contains(&fixture.path().join("tsconfig.json")));
    assert!(files.contains(&fixture.path().join("src").join("tsconfig.json")));
}

#[test]
fn test_live_list_files_missing_root_errors() {
    let fixture = TempDirFixture::new().unwrap();
    let missing = fixture.path().join("does-not-exist");

    assert!(LiveFileSystemProvider.list_files(&missing).is_err());
}

#[test]
fn test_live_filesystem_round_trip() {
    let fixture = TempDirFixture::new().unwrap();
    let provider = LiveFileSystemProvider;
    let path = fixture.path().join("out").join("options.json");

    provider.create_dir_all(path.parent().unwrap()).unwrap();
    provider.write_file(&path, "{\"validate\":true}").unwrap();

    assert!(provider.exists(&path));
    assert!(provider.is_file(&path));
    assert!(provider.is_directory(path.parent().unwrap()));
    assert_eq!(provider.read_to_string(&path).unwrap(), "{\"validate\":true}");
}

#[cfg(unix)]
#[test]
fn test_process_availability_uses_custom_path() {
    let fixture = TempDirFixture::new().unwrap();
    fixture.write_file("bin/depcruise", "#!/bin/sh\nexit 0\n").unwrap();
    let bin = fixture.path().join("bin").to_string_lossy().to_string();

    let provider = LiveProcessProvider::with_custom_path(bin);

    assert!(provider.is_available("depcruise"));
    assert!(!provider.is_available("definitely-not-installed-anywhere"));
}

#[test]
fn test_yes_mode_picks_first_item() {
    let provider = LiveInteractiveProvider::new(true);
    let items = vec![
        PickItem {
            label: "tsconfig.json".to_string(),
            detail: "/proj/src/tsconfig.json".to_string(),
        },
        PickItem {
            label: "tsconfig.json".to_string(),
            detail: "/proj/tsconfig.json".to_string(),
        },
    ];

    assert_eq!(provider.pick("Select a tsconfig file", &items).unwrap(), Some(0));
}

#[test]
fn test_pick_with_no_items_is_no_selection() {
    let provider = LiveInteractiveProvider::new(true);
    assert_eq!(provider.pick("Select a tsconfig file", &[]).unwrap(), None);
}
