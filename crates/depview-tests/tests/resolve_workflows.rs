//! End-to-end resolution against real temporary workspaces

use anyhow::Result;
use depview_lib::application::cli::{Commands, SettingsArgs, TargetArgs};
use depview_lib::application::commands::execute_command_with_session;
use depview_lib::application::session::LiveFileSystemProvider;
use depview_lib::application::session_mocks::MockInteractiveProvider;
use depview_lib::depview::{ConfigResolver, PayloadSource, ResolveFlags, Settings};
use depview_tests::HermeticSessionBuilder;
use serde_json::{Value, json};
use std::path::PathBuf;

fn target(file: &str) -> TargetArgs {
    TargetArgs {
        file: PathBuf::from(file),
        roots: Vec::new(),
        typed: false,
        untyped: false,
    }
}

fn resolve_command(file: &str) -> Commands {
    Commands::Resolve {
        target: target(file),
        settings: SettingsArgs::default(),
        out: None,
    }
}

fn widget_project() -> Result<HermeticSessionBuilder> {
    HermeticSessionBuilder::new()?
        .with_file("tsconfig.json", "{}")?
        .with_file("src/tsconfig.json", "{}")?
        .with_file("src/app/widget.ts", "export const widget = 1;\n")
}

fn emitted_json(display: &depview_lib::display::MockDisplayProvider) -> Value {
    let emitted = display.emitted();
    assert_eq!(emitted.len(), 1, "expected a single payload, got {emitted:?}");
    serde_json::from_str(&emitted[0]).expect("payload should be JSON")
}

#[tokio::test]
async fn closest_type_configuration_is_selected_without_prompting() -> Result<()> {
    let (session, handles) = widget_project()?.build();

    execute_command_with_session(resolve_command("src/app/widget.ts"), &session).await?;

    let options = emitted_json(&handles.display);
    assert_eq!(options["tsConfig"]["fileName"], "src/tsconfig.json");
    assert_eq!(options["validate"], true);
    assert_eq!(options["ruleSet"]["forbidden"].as_array().map(Vec::len), Some(1));
    assert_eq!(options["ruleSet"]["forbidden"][0]["name"], "no-circular");
    assert!(handles.interactive.get_pick_calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn equally_close_candidates_prompt_and_honour_the_choice() -> Result<()> {
    let (session, handles) = HermeticSessionBuilder::new()?
        .with_file("src/tsconfig.json", "{}")?
        .with_file("src/tsconfig.build.json", "{}")?
        .with_file("src/app/widget.ts", "export {};\n")?
        .with_settings("[analysis]\ntsconfig-pattern = \"tsconfig*.json\"\n")?
        .with_interactive(MockInteractiveProvider::new().with_pick(Some(1)))
        .build();

    execute_command_with_session(resolve_command("src/app/widget.ts"), &session).await?;

    let picks = handles.interactive.get_pick_calls();
    assert_eq!(picks.len(), 1);
    let labels: Vec<&str> = picks[0].1.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, ["tsconfig.json", "tsconfig.build.json"]);

    let options = emitted_json(&handles.display);
    assert_eq!(options["tsConfig"]["fileName"], "src/tsconfig.build.json");
    Ok(())
}

#[tokio::test]
async fn cancelled_prompt_resolves_without_type_configuration() -> Result<()> {
    let (session, handles) = widget_project()?
        .with_settings("[analysis]\nauto-select-closest = false\n")?
        .with_interactive(MockInteractiveProvider::new().with_pick(None))
        .build();

    execute_command_with_session(resolve_command("src/app/widget.ts"), &session).await?;

    assert_eq!(handles.interactive.get_pick_calls().len(), 1);
    let options = emitted_json(&handles.display);
    assert!(options.get("tsConfig").is_none());
    assert_eq!(options["parser"], "tsc");
    Ok(())
}

#[tokio::test]
async fn dependency_directories_never_yield_candidates() -> Result<()> {
    let (session, handles) = HermeticSessionBuilder::new()?
        .with_file("node_modules/lib/tsconfig.json", "{}")?
        .with_file("packages/ui/node_modules/tsconfig.json", "{}")?
        .with_file("src/index.ts", "export {};\n")?
        .build();

    execute_command_with_session(
        Commands::Locate {
            target: target("src/index.ts"),
            settings: SettingsArgs::default(),
        },
        &session,
    )
    .await?;

    assert!(handles.display.emitted().is_empty());
    assert!(handles.interactive.get_pick_calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn override_options_are_used_verbatim_with_builtin_rules() -> Result<()> {
    let override_options = json!({
        "outputType": "archi",
        "doNotFollow": { "path": "node_modules" },
        "validate": false
    });
    let (session, handles) = widget_project()?
        .with_override(json!({ "options": override_options }))?
        .build();

    execute_command_with_session(resolve_command("src/app/widget.ts"), &session).await?;

    let options = emitted_json(&handles.display);
    assert_eq!(options["outputType"], "archi");
    assert_eq!(options["doNotFollow"], json!({ "path": "node_modules" }));
    assert!(options.get("tsConfig").is_none());
    assert!(options.get("moduleSystems").is_none());
    assert_eq!(options["validate"], true);
    assert_eq!(options["ruleSet"]["forbidden"][0]["name"], "no-circular");
    Ok(())
}

#[tokio::test]
async fn override_empty_forbidden_replaces_builtin_rules() -> Result<()> {
    let (session, handles) = widget_project()?
        .with_override(json!({ "forbidden": [] }))?
        .build();

    execute_command_with_session(resolve_command("src/app/widget.ts"), &session).await?;

    let options = emitted_json(&handles.display);
    assert_eq!(options["ruleSet"], json!({ "forbidden": [] }));
    assert_eq!(options["validate"], false);
    assert_eq!(options["tsConfig"]["fileName"], "src/tsconfig.json");
    Ok(())
}

#[tokio::test]
async fn non_object_override_options_keep_the_override_rules() -> Result<()> {
    let (session, handles) = widget_project()?
        .with_override(json!({ "options": "not an object", "forbidden": [] }))?
        .build();

    execute_command_with_session(resolve_command("src/app/widget.ts"), &session).await?;

    assert_eq!(emitted_json(&handles.display), json!("not an object"));
    assert_eq!(handles.display.count_calls("warning"), 1);

    let fs = LiveFileSystemProvider;
    let interactive = MockInteractiveProvider::new();
    let workspace = &handles.workspace;
    let resolved = ConfigResolver::new(&fs, &interactive).resolve(
        &workspace.path("src/app/widget.ts"),
        workspace.root(),
        &Settings::default(),
        ResolveFlags { typed: true },
    )?;
    assert_eq!(resolved.rule_set.to_value(), json!({ "forbidden": [] }));
    assert!(!resolved.validate());
    assert_eq!(resolved.provenance.rule_set, PayloadSource::Override);
    Ok(())
}

#[test]
fn missing_disabled_and_unreadable_overrides_behave_alike() -> Result<()> {
    let builder = widget_project()?;
    let (_, handles) = builder.build();
    let workspace = handles.workspace;
    let fs = LiveFileSystemProvider;
    let interactive = MockInteractiveProvider::new();
    let resolver = ConfigResolver::new(&fs, &interactive);
    let target = workspace.path("src/app/widget.ts");
    let flags = ResolveFlags { typed: true };
    let settings = Settings::default();

    let missing = resolver.resolve(&target, workspace.root(), &settings, flags)?;

    workspace.write(".dependency-cruiser.json", "{ not json")?;
    let unparsable = resolver.resolve(&target, workspace.root(), &settings, flags)?;

    std::fs::write(workspace.path(".dependency-cruiser.json"), [0xff, 0xfe, b'{', b'}'])?;
    let unreadable = resolver.resolve(&target, workspace.root(), &settings, flags)?;

    workspace.write_override(&json!({ "options": { "outputType": "json" } }))?;
    let mut disabled_settings = Settings::default();
    disabled_settings.analysis.enable_override_file = false;
    let disabled = resolver.resolve(&target, workspace.root(), &disabled_settings, flags)?;

    assert_eq!(missing.to_value(), unparsable.to_value());
    assert_eq!(missing, unreadable);
    assert_eq!(missing.to_value(), disabled.to_value());
    assert_eq!(missing.provenance.options, PayloadSource::Builtin);
    assert_eq!(disabled.provenance.options, PayloadSource::Builtin);
    Ok(())
}

#[test]
fn resolving_twice_yields_identical_output() -> Result<()> {
    let (_, handles) = widget_project()?
        .with_override(json!({ "forbidden": [{ "name": "custom", "from": {}, "to": {} }] }))?
        .build();
    let workspace = handles.workspace;
    let fs = LiveFileSystemProvider;
    let interactive = MockInteractiveProvider::new();
    let resolver = ConfigResolver::new(&fs, &interactive);
    let target = workspace.path("src/app/widget.ts");
    let settings = Settings::default();

    let first = resolver.resolve(&target, workspace.root(), &settings, ResolveFlags { typed: true })?;
    let second = resolver.resolve(&target, workspace.root(), &settings, ResolveFlags { typed: true })?;

    assert_eq!(first, second);
    assert_eq!(first.provenance.rule_set, PayloadSource::Override);
    Ok(())
}

#[test]
fn override_changes_are_seen_on_the_next_resolution() -> Result<()> {
    let (_, handles) = widget_project()?.build();
    let workspace = handles.workspace;
    let fs = LiveFileSystemProvider;
    let interactive = MockInteractiveProvider::new();
    let resolver = ConfigResolver::new(&fs, &interactive);
    let target = workspace.path("src/app/widget.ts");
    let settings = Settings::default();

    let before = resolver.resolve(&target, workspace.root(), &settings, ResolveFlags { typed: true })?;
    workspace.write_override(&json!({ "options": { "outputType": "json" } }))?;
    let after = resolver.resolve(&target, workspace.root(), &settings, ResolveFlags { typed: true })?;

    assert_eq!(before.provenance.options, PayloadSource::Builtin);
    assert_eq!(after.provenance.options, PayloadSource::Override);
    assert_eq!(after.output_type(), Some("json"));
    Ok(())
}
