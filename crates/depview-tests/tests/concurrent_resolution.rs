//! Independent resolutions sharing one immutable settings value

use anyhow::Result;
use depview_lib::application::session::LiveFileSystemProvider;
use depview_lib::application::session_mocks::MockInteractiveProvider;
use depview_lib::depview::{ConfigResolver, ResolveFlags, Settings};
use depview_tests::TestWorkspace;
use std::thread;

#[test]
fn resolutions_for_different_targets_run_in_parallel() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    workspace.write("tsconfig.json", "{}")?;
    for package in ["alpha", "beta", "gamma", "delta"] {
        workspace.write(&format!("packages/{package}/tsconfig.json"), "{}")?;
        workspace.write(&format!("packages/{package}/src/index.ts"), "export {};\n")?;
    }
    let settings = Settings::default();

    let results = thread::scope(|scope| {
        let handles: Vec<_> = ["alpha", "beta", "gamma", "delta"]
            .into_iter()
            .map(|package| {
                let settings = &settings;
                let workspace = &workspace;
                scope.spawn(move || {
                    let fs = LiveFileSystemProvider;
                    let interactive = MockInteractiveProvider::new();
                    let target = workspace.path(&format!("packages/{package}/src/index.ts"));
                    let resolved = ConfigResolver::new(&fs, &interactive).resolve(
                        &target,
                        workspace.root(),
                        settings,
                        ResolveFlags { typed: true },
                    );
                    (package, resolved, interactive.get_pick_calls().len())
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("resolver thread panicked"))
            .collect::<Vec<_>>()
    });

    for (package, resolved, picks) in results {
        let resolved = resolved?;
        assert_eq!(picks, 0, "{package} should auto-select");
        assert_eq!(
            resolved.to_value()["tsConfig"]["fileName"],
            format!("packages/{package}/tsconfig.json")
        );
        assert!(resolved.validate());
    }
    Ok(())
}
