//! Built-in engine options assembled from settings.

use super::paths::{relative_to, to_slash};
use super::settings::Settings;
use super::themes::theme_payload;
use serde_json::{Map, Value, json};
use std::path::Path;

/// Module systems the engine follows
pub const MODULE_SYSTEMS: [&str; 2] = ["es6", "cjs"];

/// Parser used for typed sources
pub const TYPED_PARSER: &str = "tsc";

/// Options object used when the override file supplies none
///
/// `ts_config` is the located type-configuration file, referenced relative
/// to `root` when it lives inside it.
pub fn default_options(
    settings: &Settings,
    root: &Path,
    typed: bool,
    ts_config: Option<&Path>,
) -> Map<String, Value> {
    let analysis = &settings.analysis;
    let output_type = analysis.output_type;
    let mut options = Map::new();

    options.insert("outputType".into(), json!(output_type.as_str()));
    options.insert("moduleSystems".into(), json!(MODULE_SYSTEMS));

    if typed {
        options.insert("tsPreCompilationDeps".into(), json!(true));
        options.insert("parser".into(), json!(TYPED_PARSER));
        if let Some(file) = ts_config {
            let file = to_slash(file);
            let file_name = relative_to(&file, &to_slash(root)).unwrap_or(file);
            options.insert("tsConfig".into(), json!({ "fileName": file_name }));
        }
    }

    if let Some(include_only) = &analysis.include_only {
        options.insert("includeOnly".into(), json!(include_only));
    }
    if let Some(exclude) = &analysis.exclude {
        options.insert("exclude".into(), json!({ "path": exclude }));
    }

    if output_type.is_graph_reporter() {
        let mut reporter = Map::new();
        reporter.insert(
            "theme".into(),
            theme_payload(settings.graph.theme, settings.graph.direction, settings.graph.line_shape),
        );
        if let Some(collapse) = &analysis.collapse_pattern {
            reporter.insert("collapsePattern".into(), json!(collapse));
        }
        let mut reporter_options = Map::new();
        reporter_options.insert(output_type.as_str().into(), Value::Object(reporter));
        options.insert("reporterOptions".into(), Value::Object(reporter_options));
    }

    options
}

#[cfg(test)]
mod tests {
    include!("options.test.rs");
}
