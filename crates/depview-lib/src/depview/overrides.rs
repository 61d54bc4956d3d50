//! Project-level override file.
//!
//! A JSON document at the workspace root may carry a full engine `options`
//! object, rule-set keys, both, or neither. Each payload is optional on its
//! own and is selected by key presence alone. Reading is best-effort: a file
//! that cannot be read or parsed counts as absent. A malformed `options`
//! payload is still handed on so the engine reports it against this file.

use super::rules::RuleSet;
use crate::application::session::FileSystemProvider;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed file name looked up at the workspace root
pub const OVERRIDE_FILE_NAME: &str = ".dependency-cruiser.json";

#[derive(Debug, Error)]
pub enum OverrideError {
    #[error("Failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("{path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} must contain a JSON object at the top level")]
    NotAnObject { path: String },
}

/// Parsed override file with its two independent payloads
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideConfig {
    pub path: PathBuf,
    /// Engine options, used verbatim as the base options even when not an object
    pub options: Option<Value>,
    /// Rule-set keys, used verbatim as the rule set
    pub rule_set: Option<RuleSet>,
}

impl OverrideConfig {
    /// Parse override text. `Ok(None)` when the document carries neither payload.
    pub fn parse(path: &Path, text: &str) -> Result<Option<Self>, OverrideError> {
        let display = path.display().to_string();

        let document: Value = serde_json::from_str(text).map_err(|source| OverrideError::Parse {
            path: display.clone(),
            source,
        })?;
        let Value::Object(document) = document else {
            return Err(OverrideError::NotAnObject { path: display });
        };

        let options = document.get("options").cloned();
        if options.as_ref().is_some_and(|options| !options.is_object()) {
            tracing::warn!(path = %path.display(), "'options' in the override file is not a JSON object");
        }
        let rule_set = RuleSet::from_document(&document);

        if options.is_none() && rule_set.is_none() {
            return Ok(None);
        }

        Ok(Some(Self {
            path: path.to_path_buf(),
            options,
            rule_set,
        }))
    }
}

/// Location of the override file for a workspace folder
pub fn override_path(root: &Path) -> PathBuf {
    root.join(OVERRIDE_FILE_NAME)
}

/// Read the override file under `root`, treating every failure as absence
pub fn read_override(filesystem: &dyn FileSystemProvider, root: &Path) -> Option<OverrideConfig> {
    let path = override_path(root);

    if !filesystem.is_file(&path) {
        tracing::debug!(path = %path.display(), "No override file");
        return None;
    }

    let parsed = filesystem
        .read_to_string(&path)
        .map_err(|e| OverrideError::Read {
            path: path.display().to_string(),
            reason: format!("{e:#}"),
        })
        .and_then(|text| OverrideConfig::parse(&path, &text));

    match parsed {
        Ok(Some(config)) => {
            tracing::debug!(
                path = %path.display(),
                options = config.options.is_some(),
                rule_set = config.rule_set.is_some(),
                "Loaded override file"
            );
            Some(config)
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "Override file has no options or rule-set keys");
            None
        }
        Err(e) => {
            tracing::warn!("Ignoring override file: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    include!("overrides.test.rs");
}
