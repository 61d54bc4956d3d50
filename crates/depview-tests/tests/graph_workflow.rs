//! Graph command against a real workspace with mocked engine executables

use anyhow::Result;
use depview_lib::application::cli::{Commands, SettingsArgs, TargetArgs};
use depview_lib::application::commands::execute_command_with_session;
use depview_lib::application::session::ProcessOutput;
use depview_lib::application::session_mocks::MockProcessProvider;
use depview_lib::display::DisplayCall;
use depview_lib::primitives::GraphFormat;
use depview_tests::HermeticSessionBuilder;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

const DOT: &str = "digraph \"dependency-cruiser output\" { \"src/app/widget.ts\" }";
const SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>";

fn graph(format: GraphFormat, out: Option<PathBuf>) -> Commands {
    Commands::Graph {
        target: TargetArgs {
            file: PathBuf::from("src/app/widget.ts"),
            roots: Vec::new(),
            typed: false,
            untyped: false,
        },
        settings: SettingsArgs::default(),
        format,
        out,
    }
}

fn engines() -> MockProcessProvider {
    MockProcessProvider::new()
        .with_stdout("depcruise", DOT)
        .with_stdout("dot", SVG)
}

fn builder() -> Result<HermeticSessionBuilder> {
    HermeticSessionBuilder::new()?
        .with_file("src/tsconfig.json", "{}")?
        .with_file("src/app/widget.ts", "export const widget = 1;\n")
}

#[tokio::test]
async fn graph_runs_analysis_then_renders_svg() -> Result<()> {
    let (session, handles) = builder()?.with_process(engines()).build();

    execute_command_with_session(graph(GraphFormat::Svg, None), &session).await?;

    assert_eq!(handles.display.emitted(), vec![SVG.to_string()]);

    let analysis = handles.process.get_calls_for_command("depcruise");
    assert_eq!(analysis.len(), 1);
    assert_eq!(analysis[0].working_dir, handles.workspace.root());
    assert_eq!(analysis[0].args[0], "--config");
    assert!(analysis[0].args[1].ends_with("depview.config.json"));
    assert_eq!(&analysis[0].args[2..], ["--output-type", "dot", "src/app/widget.ts"]);

    let render = handles.process.get_calls_for_command("dot");
    assert_eq!(render.len(), 1);
    assert_eq!(render[0].args[0], "-Tsvg");
    assert!(render[0].args[1].ends_with("graph.dot"));

    assert!(handles.display.has_call(&DisplayCall::SpinnerStart {
        message: "Computing dependency graph for \"src/app/widget.ts\"...".to_string(),
    }));
    assert!(handles.display.has_call(&DisplayCall::SpinnerClear));
    Ok(())
}

#[tokio::test]
async fn dot_format_skips_the_renderer() -> Result<()> {
    let (session, handles) = builder()?.with_process(engines()).build();

    execute_command_with_session(graph(GraphFormat::Dot, None), &session).await?;

    assert_eq!(handles.display.emitted(), vec![DOT.to_string()]);
    assert!(handles.process.get_calls_for_command("dot").is_empty());
    Ok(())
}

#[tokio::test]
async fn graph_writes_to_out_file() -> Result<()> {
    let (session, handles) = builder()?.with_process(engines()).build();

    execute_command_with_session(graph(GraphFormat::Svg, Some(PathBuf::from("out/widget.svg"))), &session)
        .await?;

    assert!(handles.display.emitted().is_empty());
    assert_eq!(fs::read_to_string(handles.workspace.path("out/widget.svg"))?, SVG);
    Ok(())
}

#[tokio::test]
async fn missing_analyzer_names_the_install_hint() -> Result<()> {
    let (session, handles) = builder()?
        .with_process(engines().with_unavailable("depcruise"))
        .build();

    let error = execute_command_with_session(graph(GraphFormat::Svg, None), &session)
        .await
        .expect_err("graph should fail without the analyzer");

    assert!(format!("{error:#}").contains("dependency-cruiser"));
    assert!(handles.process.get_calls().is_empty());
    assert!(handles.display.has_call(&DisplayCall::SpinnerAbandon {
        message: "Dependency graph failed".to_string(),
    }));
    Ok(())
}

#[tokio::test]
async fn engine_failure_with_override_options_blames_the_override_file() -> Result<()> {
    let (session, handles) = builder()?
        .with_override(json!({ "options": { "outputType": "dot", "bogus": true } }))?
        .with_process(MockProcessProvider::new().with_failure("depcruise", "ERROR: unknown option 'bogus'"))
        .build();

    let error = execute_command_with_session(graph(GraphFormat::Svg, None), &session)
        .await
        .expect_err("graph should fail");

    let message = format!("{error:#}");
    assert!(message.contains("override file"), "unexpected error: {message}");
    assert!(message.contains("unknown option 'bogus'"));
    assert!(handles.process.get_calls_for_command("dot").is_empty());
    Ok(())
}

#[tokio::test]
async fn engine_failure_with_builtin_options_reports_analysis_failure() -> Result<()> {
    let (session, _handles) = builder()?
        .with_process(MockProcessProvider::new().with_failure("depcruise", "parse error"))
        .build();

    let error = execute_command_with_session(graph(GraphFormat::Svg, None), &session)
        .await
        .expect_err("graph should fail");

    let message = format!("{error:#}");
    assert!(message.contains("Dependency analysis failed"));
    assert!(!message.contains("override file"));
    Ok(())
}

#[tokio::test]
async fn non_graph_reporter_output_is_passed_through() -> Result<()> {
    let report = "{\"summary\":{\"violations\":[]}}";
    let (session, handles) = builder()?
        .with_settings("[analysis]\noutput-type = \"json\"\n")?
        .with_process(MockProcessProvider::new().with_result(
            "depcruise",
            &["--config"],
            Ok(ProcessOutput {
                stdout: report.to_string(),
                stderr: String::new(),
                success: true,
            }),
        ))
        .build();

    execute_command_with_session(graph(GraphFormat::Svg, None), &session).await?;

    assert_eq!(handles.display.emitted(), vec![report.to_string()]);
    assert!(handles.process.get_calls_for_command("dot").is_empty());
    assert_eq!(handles.display.count_calls("warning"), 1);
    Ok(())
}
