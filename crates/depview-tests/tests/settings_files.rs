//! User settings files read from disk

use anyhow::Result;
use depview_lib::application::cli::{Commands, SettingsArgs};
use depview_lib::application::commands::execute_command_with_session;
use depview_lib::application::session::LiveFileSystemProvider;
use depview_lib::depview::{Rule, Settings};
use depview_tests::{HermeticSessionBuilder, TestWorkspace};

#[test]
fn unknown_theme_in_settings_is_a_load_error_naming_the_theme() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    workspace.write_settings("[graph]\ntheme = \"neon\"\n")?;

    let error = Settings::load(&LiveFileSystemProvider, Some(&workspace.settings_path()))
        .expect_err("unknown theme should not load");

    assert!(error.to_string().contains("neon"), "unexpected error: {error}");
    Ok(())
}

#[test]
fn missing_settings_file_yields_defaults() -> Result<()> {
    let workspace = TestWorkspace::new()?;

    let settings = Settings::load(&LiveFileSystemProvider, Some(&workspace.settings_path()))?;

    assert_eq!(settings, Settings::default());
    Ok(())
}

#[tokio::test]
async fn unknown_rule_toggles_are_ignored_and_others_honoured() -> Result<()> {
    let (session, handles) = HermeticSessionBuilder::new()?
        .with_settings("[rules]\nno-circular = false\nno-orphans = true\nno-such-rule = true\n")?
        .build();

    execute_command_with_session(
        Commands::Rules {
            settings: SettingsArgs::default(),
        },
        &session,
    )
    .await?;

    let lines = handles.display.emitted();
    assert_eq!(lines.len(), 6);
    let state_of = |name: &str| {
        lines
            .iter()
            .find(|line| line.starts_with(name))
            .and_then(|line| line.split_whitespace().last())
            .map(str::to_string)
    };
    assert_eq!(state_of(Rule::NoCircular.name()).as_deref(), Some("off"));
    assert_eq!(state_of(Rule::NoOrphans.name()).as_deref(), Some("on"));
    assert_eq!(handles.display.count_calls("warning"), 1);
    Ok(())
}
