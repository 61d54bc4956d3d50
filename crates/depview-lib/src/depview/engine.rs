//! Boundary to the external analysis and rendering engines.
//!
//! Both run as child processes through the session's [`ProcessProvider`];
//! nothing here knows how a graph is built or laid out.
//!
//! [`ProcessProvider`]: crate::application::session::ProcessProvider

use super::resolver::ResolvedOptions;
use crate::application::session::{ProcessOutput, Session};
use crate::primitives::OutputType;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Analysis engine executable
pub const ANALYZER: &str = "depcruise";

/// Graph renderer executable
pub const RENDERER: &str = "dot";

pub const CONFIG_FILE_NAME: &str = "depview.config.json";
pub const DOT_FILE_NAME: &str = "graph.dot";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("'{program}' was not found on PATH")]
    Unavailable { program: String },

    #[error("The analysis engine rejected the configuration from {path}; check the override file\n{stderr}")]
    MalformedOverride { path: String, stderr: String },

    #[error("Dependency analysis failed\n{stderr}")]
    AnalysisFailed { stderr: String },

    #[error("Graph rendering failed\n{stderr}")]
    RenderFailed { stderr: String },

    #[error("{action}: {reason}")]
    Io { action: String, reason: String },
}

/// Engine configuration document: rule keys (when validating) plus `options`
pub fn engine_config(resolved: &ResolvedOptions) -> Value {
    let mut config = Map::new();
    if resolved.validate() {
        for (key, value) in resolved.rule_set.as_map() {
            config.insert(key.clone(), value.clone());
        }
    }
    config.insert("options".into(), resolved.options.clone());
    Value::Object(config)
}

fn io_error(action: impl Into<String>) -> impl FnOnce(anyhow::Error) -> EngineError {
    let action = action.into();
    move |e| EngineError::Io {
        action,
        reason: format!("{e:#}"),
    }
}

fn require(session: &dyn Session, program: &str) -> Result<(), EngineError> {
    if session.process().is_available(program) {
        Ok(())
    } else {
        Err(EngineError::Unavailable {
            program: program.to_string(),
        })
    }
}

fn failure_text(output: &ProcessOutput) -> String {
    let stderr = output.stderr.trim();
    if stderr.is_empty() {
        output.stdout.trim().to_string()
    } else {
        stderr.to_string()
    }
}

/// Run the analysis engine for `relative_target` inside `root`.
///
/// The engine config is written under `scratch`. Returns the reporter output.
pub fn run_analysis(
    session: &dyn Session,
    resolved: &ResolvedOptions,
    root: &Path,
    relative_target: &str,
    scratch: &Path,
) -> Result<String, EngineError> {
    require(session, ANALYZER)?;

    let config_path = scratch.join(CONFIG_FILE_NAME);
    let config = serde_json::to_string_pretty(&engine_config(resolved)).map_err(|e| EngineError::Io {
        action: "Failed to serialize engine configuration".to_string(),
        reason: e.to_string(),
    })?;
    session
        .filesystem()
        .write_file(&config_path, &config)
        .map_err(io_error(format!("Failed to write {}", config_path.display())))?;

    let output_type = resolved
        .output_type()
        .unwrap_or(OutputType::default().as_str())
        .to_string();
    let config_arg = config_path.to_string_lossy().to_string();
    let args = [
        "--config",
        config_arg.as_str(),
        "--output-type",
        output_type.as_str(),
        relative_target,
    ];

    tracing::debug!(?args, cwd = %root.display(), "Running analysis engine");
    let output = session
        .process()
        .execute(ANALYZER, &args, root)
        .map_err(io_error(format!("Failed to run {ANALYZER}")))?;

    if output.success {
        return Ok(output.stdout);
    }

    let stderr = failure_text(&output);
    match &resolved.provenance.override_file {
        Some(path) if resolved.provenance.uses_override() => Err(EngineError::MalformedOverride {
            path: path.display().to_string(),
            stderr,
        }),
        _ => Err(EngineError::AnalysisFailed { stderr }),
    }
}

/// Render graphviz source to SVG
pub fn render_svg(session: &dyn Session, dot_source: &str, scratch: &Path) -> Result<String, EngineError> {
    require(session, RENDERER)?;

    let dot_path: PathBuf = scratch.join(DOT_FILE_NAME);
    session
        .filesystem()
        .write_file(&dot_path, dot_source)
        .map_err(io_error(format!("Failed to write {}", dot_path.display())))?;

    let dot_arg = dot_path.to_string_lossy().to_string();
    let output = session
        .process()
        .execute(RENDERER, &["-Tsvg", dot_arg.as_str()], scratch)
        .map_err(io_error(format!("Failed to run {RENDERER}")))?;

    if output.success {
        Ok(output.stdout)
    } else {
        Err(EngineError::RenderFailed {
            stderr: failure_text(&output),
        })
    }
}

#[cfg(test)]
mod tests {
    include!("engine.test.rs");
}
