//! Command execution handlers
//!
//! Session-based command execution: every handler talks to the outside
//! world only through the providers of the `Session` it is given.

use crate::application::cli::{SettingsArgs, TargetArgs};
use crate::application::session::{CommandSession, Session};
use crate::application::{CliConfig, Commands};
use crate::depview::engine::{self, EngineError};
use crate::depview::paths::to_slash;
use crate::depview::resolver::{ConfigResolver, PayloadSource, ResolveFlags, ResolvedOptions};
use crate::depview::rules::{ALL_RULES, Rule};
use crate::depview::settings::Settings;
use crate::depview::workspace::{absolutize, is_typed_source, relative_target, workspace_folder_for};
use crate::primitives::{GraphFormat, OutputType};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Execute CLI commands using the session-based architecture
pub async fn execute_command(config: CliConfig) -> Result<()> {
    // Create command session (owns all ephemeral state)
    let session = CommandSession::new(config.app_config);

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            session
                .display()
                .status()
                .message("depview - dependency graphs for a single source file");
            session
                .display()
                .status()
                .subtle("Run 'depview --help' for usage information");
            return Ok(());
        }
    };

    // Dispatch to session-aware command handlers
    execute_command_with_session(command, &session).await
}

/// Execute a specific command with a provided session (for testing)
pub async fn execute_command_with_session(command: Commands, session: &dyn Session) -> Result<()> {
    tracing::debug!(command = command.name(), "Executing command");

    match command {
        Commands::Resolve {
            target,
            settings,
            out,
        } => handle_resolve(session, &target, &settings, out).await,
        Commands::Locate { target, settings } => handle_locate(session, &target, &settings).await,
        Commands::Rules { settings } => handle_rules(session, &settings).await,
        Commands::Graph {
            target,
            settings,
            format,
            out,
        } => handle_graph(session, &target, &settings, format, out).await,
    }
}

/// Target, workspace folder, and settings for one command
struct Invocation {
    target: PathBuf,
    root: PathBuf,
    settings: Settings,
    typed: bool,
}

impl Invocation {
    fn relative_target(&self) -> String {
        relative_target(&self.target, &self.root)
    }
}

fn load_settings(session: &dyn Session, args: &SettingsArgs) -> Result<Settings> {
    let path = session.config().app_config().settings.clone();
    let settings = Settings::load(session.filesystem(), path.as_deref())?;
    Ok(settings.apply_overrides(&args.to_overrides())?)
}

fn prepare(session: &dyn Session, target: &TargetArgs, args: &SettingsArgs) -> Result<Invocation> {
    let workdir = session.workdir().context("Failed to determine working directory")?;
    let file = absolutize(&target.file, &workdir);

    if !session.filesystem().is_file(&file) {
        anyhow::bail!("Target file not found: {}", file.display());
    }

    let roots: Vec<PathBuf> = target.roots.iter().map(|root| absolutize(root, &workdir)).collect();
    let root = workspace_folder_for(session.filesystem(), &file, &roots);
    let typed = target.typed_override().unwrap_or_else(|| is_typed_source(&file));

    tracing::debug!(target = %file.display(), root = %root.display(), typed, "Prepared invocation");

    Ok(Invocation {
        target: file,
        root,
        settings: load_settings(session, args)?,
        typed,
    })
}

fn resolve(session: &dyn Session, invocation: &Invocation) -> Result<ResolvedOptions> {
    let resolved = ConfigResolver::from_session(session).resolve(
        &invocation.target,
        &invocation.root,
        &invocation.settings,
        ResolveFlags {
            typed: invocation.typed,
        },
    )?;
    Ok(resolved)
}

/// Send a payload to `out`, or to stdout when no path is given
fn deliver(session: &dyn Session, payload: &str, out: Option<PathBuf>, what: &str) -> Result<()> {
    match out {
        Some(path) => {
            let path = absolutize(&path, &session.workdir()?);
            if let Some(parent) = path.parent() {
                session.filesystem().create_dir_all(parent)?;
            }
            session
                .filesystem()
                .write_file(&path, payload)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            session.display().status().success(what, &to_slash(&path));
        }
        None => session.display().emit(payload),
    }
    Ok(())
}

fn describe_source(source: PayloadSource) -> &'static str {
    match source {
        PayloadSource::Builtin => "built-in",
        PayloadSource::Override => "override file",
    }
}

async fn handle_resolve(
    session: &dyn Session,
    target: &TargetArgs,
    args: &SettingsArgs,
    out: Option<PathBuf>,
) -> Result<()> {
    let invocation = prepare(session, target, args)?;
    let resolved = resolve(session, &invocation)?;

    let provenance = &resolved.provenance;
    let status = session.display().status();
    status.subtle(&format!(
        "options: {}, rules: {}",
        describe_source(provenance.options),
        describe_source(provenance.rule_set)
    ));
    if let Some(ts_config) = &provenance.ts_config {
        status.subtle(&format!("type configuration: {}", to_slash(ts_config)));
    }
    if let Some(path) = provenance.override_file.as_ref().filter(|_| !resolved.options_well_formed()) {
        status.warning(&format!(
            "'options' in {} is not a JSON object; the analysis engine will reject it",
            to_slash(path)
        ));
    }

    let payload = serde_json::to_string_pretty(&resolved.to_value()).context("Failed to serialize options")?;
    deliver(session, &payload, out, "options written")
}

async fn handle_locate(session: &dyn Session, target: &TargetArgs, args: &SettingsArgs) -> Result<()> {
    let invocation = prepare(session, target, args)?;

    let located = ConfigResolver::from_session(session).locate_ts_config(
        &invocation.target,
        &invocation.root,
        &invocation.settings,
    )?;

    match located {
        Some(path) => session.display().emit(&to_slash(&path)),
        None => session
            .display()
            .status()
            .info(&format!("No type configuration found for {}", invocation.relative_target())),
    }
    Ok(())
}

fn rule_line(rule: Rule, enabled: bool) -> String {
    format!(
        "{:<32} {:<6} {}",
        rule.name(),
        rule.severity().as_str(),
        if enabled { "on" } else { "off" }
    )
}

async fn handle_rules(session: &dyn Session, args: &SettingsArgs) -> Result<()> {
    let settings = load_settings(session, args)?;

    for rule in ALL_RULES {
        session
            .display()
            .emit(&rule_line(*rule, settings.rules.is_enabled(*rule)));
    }

    let unknown = settings.rules.unknown_names();
    if !unknown.is_empty() {
        session
            .display()
            .status()
            .warning(&format!("Ignored unknown rule toggles: {}", unknown.join(", ")));
    }
    Ok(())
}

fn analysis_error(error: EngineError) -> anyhow::Error {
    let hint = match &error {
        EngineError::Unavailable { program } if program == engine::ANALYZER => {
            Some("install dependency-cruiser (npm i -g dependency-cruiser)")
        }
        EngineError::Unavailable { .. } => Some("install graphviz"),
        _ => None,
    };

    let error = anyhow::Error::new(error);
    match hint {
        Some(hint) => error.context(format!("Missing tool: {hint}")),
        None => error,
    }
}

fn run_graph(
    session: &dyn Session,
    invocation: &Invocation,
    resolved: &ResolvedOptions,
    format: GraphFormat,
    scratch: &Path,
) -> Result<String> {
    let output = engine::run_analysis(
        session,
        resolved,
        &invocation.root,
        &invocation.relative_target(),
        scratch,
    )
    .map_err(analysis_error)?;

    if format == GraphFormat::Dot {
        return Ok(output);
    }

    let graph_reporter = resolved
        .output_type()
        .and_then(|name| name.parse::<OutputType>().ok())
        .is_some_and(|output_type| output_type.is_graph_reporter());
    if !graph_reporter {
        session.display().status().warning(&format!(
            "Reporter '{}' does not produce a graph; writing its output as-is",
            resolved.output_type().unwrap_or("unknown")
        ));
        return Ok(output);
    }

    engine::render_svg(session, &output, scratch).map_err(analysis_error)
}

async fn handle_graph(
    session: &dyn Session,
    target: &TargetArgs,
    args: &SettingsArgs,
    format: GraphFormat,
    out: Option<PathBuf>,
) -> Result<()> {
    let invocation = prepare(session, target, args)?;
    let resolved = resolve(session, &invocation)?;
    let scratch = tempfile::tempdir().context("Failed to create scratch directory")?;

    let spinner = session.display().progress().spinner(&format!(
        "Computing dependency graph for \"{}\"...",
        invocation.relative_target()
    ));

    match run_graph(session, &invocation, &resolved, format, scratch.path()) {
        Ok(graph) => {
            spinner.finish_clear();
            deliver(session, &graph, out, "graph written")
        }
        Err(e) => {
            spinner.abandon("Dependency graph failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
