//! ConfigResolver: merges defaults, user settings, and the project override
//! file into the options handed to the analysis engine.
//!
//! The options payload and the rule-set payload are chosen independently:
//! each comes either verbatim from the override file or from the built-in
//! construction path, never a mix. `validate` is derived from the final rule
//! set and cannot be set by any layer. Override options that are not a JSON
//! object are kept verbatim for the engine to reject.

use super::locator::{ConfigFileLocator, LocateError, parse_name_list};
use super::options::default_options;
use super::overrides::{OverrideConfig, read_override};
use super::rules::{self, RuleSet};
use super::settings::Settings;
use crate::application::session::{FileSystemProvider, InteractiveProvider, Session};
use crate::primitives::LocateStrategy;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Keys the resolver owns inside the final options object
const DERIVED_KEYS: [&str; 2] = ["validate", "ruleSet"];

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to locate the type configuration: {0}")]
    Locate(#[from] LocateError),
}

/// Caller-provided switches for one resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveFlags {
    /// Whether the target is handled as a typed source
    pub typed: bool,
}

/// Where a payload of the final options came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadSource {
    Builtin,
    Override,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provenance {
    pub options: PayloadSource,
    pub rule_set: PayloadSource,
    pub override_file: Option<PathBuf>,
    pub ts_config: Option<PathBuf>,
}

impl Provenance {
    /// True when any payload was taken from the override file
    pub fn uses_override(&self) -> bool {
        self.options == PayloadSource::Override || self.rule_set == PayloadSource::Override
    }
}

/// Final configuration for one target
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    /// Options without the derived keys. Only an override file can make this
    /// something other than an object.
    pub options: Value,
    pub rule_set: RuleSet,
    pub provenance: Provenance,
}

impl ResolvedOptions {
    pub fn validate(&self) -> bool {
        !self.rule_set.is_empty()
    }

    /// False when the override file supplied options that are not an object
    pub fn options_well_formed(&self) -> bool {
        self.options.is_object()
    }

    /// Options object with `validate` and `ruleSet` attached.
    ///
    /// Malformed options are returned untouched.
    pub fn to_value(&self) -> Value {
        let mut value = self.options.clone();
        if let Value::Object(options) = &mut value {
            options.insert("validate".into(), Value::Bool(self.validate()));
            options.insert("ruleSet".into(), self.rule_set.to_value());
        }
        value
    }

    /// Reporter named by the options, if any
    pub fn output_type(&self) -> Option<&str> {
        self.options.get("outputType").and_then(Value::as_str)
    }
}

fn without_derived_keys(mut options: Value) -> Value {
    if let Value::Object(map) = &mut options {
        for key in DERIVED_KEYS {
            map.remove(key);
        }
    }
    options
}

pub struct ConfigResolver<'a> {
    filesystem: &'a dyn FileSystemProvider,
    interactive: &'a dyn InteractiveProvider,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(filesystem: &'a dyn FileSystemProvider, interactive: &'a dyn InteractiveProvider) -> Self {
        Self {
            filesystem,
            interactive,
        }
    }

    pub fn from_session(session: &'a dyn Session) -> Self {
        Self::new(session.filesystem(), session.interactive())
    }

    /// Find the type-configuration file for `target` using the configured strategy.
    ///
    /// An unreadable workspace counts as "nothing found".
    pub fn locate_ts_config(
        &self,
        target: &Path,
        root: &Path,
        settings: &Settings,
    ) -> Result<Option<PathBuf>, LocateError> {
        let locator = ConfigFileLocator::new(self.filesystem, self.interactive)
            .with_auto_select(settings.analysis.auto_select_closest);

        match settings.analysis.locate_strategy {
            LocateStrategy::Ancestors => {
                let names = parse_name_list(&settings.analysis.tsconfig_names);
                Ok(locator.locate_in_ancestors(target, root, &names))
            }
            LocateStrategy::Glob => {
                match locator.locate(target, root, &settings.analysis.tsconfig_pattern) {
                    Err(LocateError::Enumeration { root, reason }) => {
                        tracing::warn!(%root, %reason, "Workspace enumeration failed, continuing without type configuration");
                        Ok(None)
                    }
                    other => other,
                }
            }
        }
    }

    pub fn resolve(
        &self,
        target: &Path,
        root: &Path,
        settings: &Settings,
        flags: ResolveFlags,
    ) -> Result<ResolvedOptions, ResolveError> {
        let override_config = if settings.analysis.enable_override_file {
            read_override(self.filesystem, root)
        } else {
            tracing::debug!("Override file disabled in settings");
            None
        };

        let (override_options, override_rules, override_file) = match override_config {
            Some(OverrideConfig {
                path,
                options,
                rule_set,
            }) => (options, rule_set, Some(path)),
            None => (None, None, None),
        };

        let mut ts_config = None;
        let (options, options_source) = match override_options {
            Some(options) => (options, PayloadSource::Override),
            None => {
                if flags.typed {
                    ts_config = self.locate_ts_config(target, root, settings)?;
                }
                (
                    Value::Object(default_options(settings, root, flags.typed, ts_config.as_deref())),
                    PayloadSource::Builtin,
                )
            }
        };

        let (rule_set, rule_set_source) = match override_rules {
            Some(rule_set) => (rule_set, PayloadSource::Override),
            None => (
                RuleSet::from_definitions(rules::build(&settings.rules)),
                PayloadSource::Builtin,
            ),
        };

        let resolved = ResolvedOptions {
            options: without_derived_keys(options),
            rule_set,
            provenance: Provenance {
                options: options_source,
                rule_set: rule_set_source,
                override_file,
                ts_config,
            },
        };

        tracing::info!(
            target = %target.display(),
            options = ?resolved.provenance.options,
            rule_set = ?resolved.provenance.rule_set,
            rules = resolved.rule_set.rule_count(),
            validate = resolved.validate(),
            "Resolved analysis options"
        );

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    include!("resolver.test.rs");
}
