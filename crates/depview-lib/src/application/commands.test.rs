use super::*;
use crate::application::config::AppConfig;
use crate::application::session::FileSystemProvider;
use crate::application::session_mocks::*;
use crate::display::DisplayCall;
use serde_json::Value;

fn app_config() -> AppConfig {
    AppConfig {
        workdir: Some(PathBuf::from("/proj")),
        settings: Some(PathBuf::from("/cfg/settings.toml")),
        ..AppConfig::default()
    }
}

fn workspace() -> MockFileSystemProvider {
    MockFileSystemProvider::new()
        .with_current_dir(PathBuf::from("/proj"))
        .with_file("/proj/package.json", "{}")
        .with_file("/proj/tsconfig.json", "{}")
        .with_file("/proj/src/tsconfig.json", "{}")
        .with_file("/proj/src/app/widget.ts", "export const widget = 1;")
}

fn session_with(fs: MockFileSystemProvider) -> MockCommandSession {
    MockCommandSession::new()
        .with_app_config(app_config())
        .with_filesystem(fs)
}

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

fn graph_command(format: GraphFormat) -> Commands {
    Commands::Graph {
        target: target("src/app/widget.ts"),
        settings: SettingsArgs::default(),
        format,
        out: None,
    }
}

mod handle_resolve_tests {
    use super::*;

    #[tokio::test]
    async fn it_prints_resolved_options() {
        let session = session_with(workspace());

        execute_command_with_session(resolve_command("src/app/widget.ts"), &session)
            .await
            .unwrap();

        let emitted = session.display_provider.emitted();
        assert_eq!(emitted.len(), 1);
        let options: Value = serde_json::from_str(&emitted[0]).unwrap();
        assert_eq!(options["validate"], true);
        assert_eq!(options["tsConfig"]["fileName"], "src/tsconfig.json");
        assert_eq!(options["ruleSet"]["forbidden"][0]["name"], "no-circular");
        assert!(session.interactive_provider.get_pick_calls().is_empty());
    }

    #[tokio::test]
    async fn it_warns_about_non_object_override_options() {
        let fs = workspace().with_file("/proj/.dependency-cruiser.json", r#"{ "options": 3, "forbidden": [] }"#);
        let session = session_with(fs);

        execute_command_with_session(resolve_command("src/app/widget.ts"), &session)
            .await
            .unwrap();

        assert_eq!(session.display_provider.emitted(), vec!["3".to_string()]);
        assert_eq!(session.display_provider.count_calls("warning"), 1);
    }

    #[tokio::test]
    async fn it_writes_options_to_a_file() {
        let session = session_with(workspace());
        let command = Commands::Resolve {
            target: target("/proj/src/app/widget.ts"),
            settings: SettingsArgs::default(),
            out: Some(PathBuf::from("out/options.json")),
        };

        execute_command_with_session(command, &session).await.unwrap();

        let written = session
            .filesystem_provider
            .read_to_string(Path::new("/proj/out/options.json"))
            .unwrap();
        assert!(written.contains("\"validate\": true"));
        assert!(session.display_provider.emitted().is_empty());
        assert_eq!(session.display_provider.count_calls("success"), 1);
    }

    #[tokio::test]
    async fn it_honours_untyped_flag() {
        let session = session_with(workspace());
        let mut target = target("src/app/widget.ts");
        target.untyped = true;
        let command = Commands::Resolve {
            target,
            settings: SettingsArgs::default(),
            out: None,
        };

        execute_command_with_session(command, &session).await.unwrap();

        let options: Value = serde_json::from_str(&session.display_provider.emitted()[0]).unwrap();
        assert!(options.get("tsConfig").is_none());
        assert!(options.get("parser").is_none());
    }

    #[tokio::test]
    async fn it_fails_for_missing_target() {
        let session = session_with(workspace());

        let err = execute_command_with_session(resolve_command("src/missing.ts"), &session)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Target file not found"));
    }

    #[tokio::test]
    async fn it_fails_for_malformed_settings() {
        let session = session_with(workspace().with_file("/cfg/settings.toml", "[graph]\ntheme = \"neon\"\n"));

        let err = execute_command_with_session(resolve_command("src/app/widget.ts"), &session)
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains("neon"));
    }
}

mod handle_locate_tests {
    use super::*;

    #[tokio::test]
    async fn it_prints_the_selected_path() {
        let session = session_with(workspace());
        let command = Commands::Locate {
            target: target("src/app/widget.ts"),
            settings: SettingsArgs::default(),
        };

        execute_command_with_session(command, &session).await.unwrap();

        assert_eq!(session.display_provider.emitted(), vec!["/proj/src/tsconfig.json".to_string()]);
    }

    #[tokio::test]
    async fn it_reports_when_nothing_is_found() {
        let fs = MockFileSystemProvider::new()
            .with_file("/proj/package.json", "{}")
            .with_file("/proj/index.js", "");
        let session = session_with(fs);
        let command = Commands::Locate {
            target: target("index.js"),
            settings: SettingsArgs::default(),
        };

        execute_command_with_session(command, &session).await.unwrap();

        assert!(session.display_provider.emitted().is_empty());
        assert!(session.display_provider.has_call(&DisplayCall::Info {
            message: "No type configuration found for index.js".to_string()
        }));
    }
}

mod handle_rules_tests {
    use super::*;

    #[tokio::test]
    async fn it_lists_every_rule_in_order() {
        let session = session_with(workspace());
        let settings = SettingsArgs {
            enable_rules: vec!["no-orphans".to_string()],
            ..SettingsArgs::default()
        };

        execute_command_with_session(Commands::Rules { settings }, &session)
            .await
            .unwrap();

        let lines = session.display_provider.emitted();
        assert_eq!(lines.len(), ALL_RULES.len());
        assert!(lines[0].starts_with("no-circular"));
        assert!(lines[0].ends_with("on"));
        assert!(lines[1].starts_with("no-orphans"));
        assert!(lines[1].ends_with("on"));
        assert!(lines[2].ends_with("off"));
    }

    #[tokio::test]
    async fn it_warns_about_unknown_toggles_in_settings() {
        let session = session_with(workspace().with_file("/cfg/settings.toml", "[rules]\nno-cycles = true\n"));

        execute_command_with_session(Commands::Rules { settings: SettingsArgs::default() }, &session)
            .await
            .unwrap();

        assert_eq!(session.display_provider.count_calls("warning"), 1);
    }

    #[tokio::test]
    async fn it_rejects_unknown_rules_on_the_command_line() {
        let session = session_with(workspace());
        let settings = SettingsArgs {
            disable_rules: vec!["no-cycles".to_string()],
            ..SettingsArgs::default()
        };

        let err = execute_command_with_session(Commands::Rules { settings }, &session)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("no-cycles"));
    }
}

mod handle_graph_tests {
    use super::*;

    fn engines() -> MockProcessProvider {
        MockProcessProvider::new()
            .with_stdout(engine::ANALYZER, "digraph \"dependency-cruiser output\" {}")
            .with_stdout(engine::RENDERER, "<svg></svg>")
    }

    #[tokio::test]
    async fn it_renders_svg() {
        let session = session_with(workspace()).with_process(engines());

        execute_command_with_session(graph_command(GraphFormat::Svg), &session)
            .await
            .unwrap();

        assert_eq!(session.display_provider.emitted(), vec!["<svg></svg>".to_string()]);
        assert!(session.display_provider.has_call(&DisplayCall::SpinnerStart {
            message: "Computing dependency graph for \"src/app/widget.ts\"...".to_string()
        }));
        assert_eq!(session.display_provider.count_calls("spinner_clear"), 1);

        let analysis = session.process_provider.get_calls_for_command(engine::ANALYZER);
        assert_eq!(analysis[0].working_dir, PathBuf::from("/proj"));
        assert_eq!(analysis[0].args.last().map(String::as_str), Some("src/app/widget.ts"));
        assert_eq!(session.process_provider.get_calls_for_command(engine::RENDERER).len(), 1);
    }

    #[tokio::test]
    async fn it_emits_dot_source_without_rendering() {
        let session = session_with(workspace()).with_process(engines());

        execute_command_with_session(graph_command(GraphFormat::Dot), &session)
            .await
            .unwrap();

        assert_eq!(
            session.display_provider.emitted(),
            vec!["digraph \"dependency-cruiser output\" {}".to_string()]
        );
        assert!(session.process_provider.get_calls_for_command(engine::RENDERER).is_empty());
    }

    #[tokio::test]
    async fn it_passes_non_graph_reporters_through() {
        let session = session_with(workspace()).with_process(
            MockProcessProvider::new().with_stdout(engine::ANALYZER, "{\"modules\":[]}"),
        );
        let command = Commands::Graph {
            target: target("src/app/widget.ts"),
            settings: SettingsArgs {
                output_type: Some(OutputType::Json),
                ..SettingsArgs::default()
            },
            format: GraphFormat::Svg,
            out: None,
        };

        execute_command_with_session(command, &session).await.unwrap();

        assert_eq!(session.display_provider.emitted(), vec!["{\"modules\":[]}".to_string()]);
        assert_eq!(session.display_provider.count_calls("warning"), 1);
        assert!(session.process_provider.get_calls_for_command(engine::RENDERER).is_empty());
    }

    #[tokio::test]
    async fn it_blames_the_override_file_when_the_engine_rejects_it() {
        let fs = workspace().with_file("/proj/.dependency-cruiser.json", r#"{ "options": { "outputType": "dot", "bogus": 1 } }"#);
        let session = session_with(fs).with_process(
            MockProcessProvider::new().with_failure(engine::ANALYZER, "ERROR: unknown option 'bogus'"),
        );

        let err = execute_command_with_session(graph_command(GraphFormat::Svg), &session)
            .await
            .unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains(".dependency-cruiser.json"), "{message}");
        assert!(message.contains("bogus"));
        assert_eq!(session.display_provider.count_calls("spinner_abandon"), 1);
    }

    #[tokio::test]
    async fn it_blames_the_override_file_for_non_object_options() {
        let fs = workspace().with_file("/proj/.dependency-cruiser.json", r#"{ "options": "dot", "forbidden": [] }"#);
        let session = session_with(fs).with_process(
            MockProcessProvider::new().with_failure(engine::ANALYZER, "ERROR: options must be an object"),
        );

        let err = execute_command_with_session(graph_command(GraphFormat::Svg), &session)
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains(".dependency-cruiser.json"));
        let written = session
            .filesystem_provider
            .files
            .lock()
            .unwrap()
            .iter()
            .find(|(path, _)| path.ends_with(engine::CONFIG_FILE_NAME))
            .map(|(_, content)| content.clone())
            .unwrap();
        let written: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(written, serde_json::json!({ "options": "dot" }));
    }

    #[tokio::test]
    async fn it_reports_missing_renderer() {
        let session = session_with(workspace()).with_process(engines().with_unavailable(engine::RENDERER));

        let err = execute_command_with_session(graph_command(GraphFormat::Svg), &session)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("graphviz"));
    }
}
