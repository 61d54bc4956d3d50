//! Configuration resolution for the dependency-graph engine.
//!
//! Leaves first: [`paths`] and [`scoring`] are pure, [`locator`] finds the
//! type-configuration file, [`rules`] builds the rule set, and [`resolver`]
//! merges everything. [`engine`] hands the result to the external tools.

pub mod engine;
pub mod locator;
pub mod merge;
pub mod options;
pub mod overrides;
pub mod paths;
pub mod resolver;
pub mod rules;
pub mod scoring;
pub mod settings;
pub mod themes;
pub mod workspace;

pub use engine::EngineError;
pub use locator::{CandidateFile, ConfigFileLocator, LocateError};
pub use overrides::{OVERRIDE_FILE_NAME, OverrideConfig};
pub use resolver::{ConfigResolver, PayloadSource, Provenance, ResolveError, ResolveFlags, ResolvedOptions};
pub use rules::{Rule, RuleDefinition, RuleSet, RuleToggles};
pub use settings::{Settings, SettingsError, SettingsOverrides};
