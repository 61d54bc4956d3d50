//! Built-in forbidden-dependency rules and the rule-set payload.
//!
//! The catalogue is a fixed registry: settings name rules by their string
//! name, and `Rule::from_name` is the only way in. Declaration order is the
//! order rules appear in a built rule set.

use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Top-level keys that make up a rule set, in engine order
pub const RULE_SET_KEYS: [&str; 4] = ["forbidden", "allowed", "allowedSeverity", "required"];

/// Keys whose arrays hold rules (`allowedSeverity` is a scalar)
const RULE_ARRAY_KEYS: [&str; 3] = ["forbidden", "allowed", "required"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("Unknown rule '{name}' (known rules: {known})")]
    UnknownRule { name: String, known: String },
}

/// Severity reported by the engine when a rule is violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
    Info,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultStatus {
    Enabled,
    #[default]
    Disabled,
}

/// One rule in the engine's `forbidden` shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleDefinition {
    pub name: String,
    pub severity: Severity,
    pub comment: String,
    pub from: Value,
    pub to: Value,
}

macro_rules! declare_rules {
    (
        $(
            $variant:ident => {
                name: $name:literal,
                severity: $severity:ident,
                default: $default:ident,
                comment: $comment:literal,
                from: $from:tt,
                to: $to:tt,
            }
        ),* $(,)?
    ) => {
        /// Every built-in rule
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Rule {
            $($variant),*
        }

        impl Rule {
            /// Get the rule's string name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }

            pub const fn severity(self) -> Severity {
                match self {
                    $(Self::$variant => Severity::$severity),*
                }
            }

            pub const fn default_status(self) -> DefaultStatus {
                match self {
                    $(Self::$variant => DefaultStatus::$default),*
                }
            }

            pub const fn comment(self) -> &'static str {
                match self {
                    $(Self::$variant => $comment),*
                }
            }

            /// Concrete definition handed to the engine
            pub fn definition(self) -> RuleDefinition {
                let (from, to) = match self {
                    $(Self::$variant => (json!($from), json!($to))),*
                };
                RuleDefinition {
                    name: self.name().to_string(),
                    severity: self.severity(),
                    comment: self.comment().to_string(),
                    from,
                    to,
                }
            }

            /// Parse a rule from its string name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            pub const fn is_enabled_by_default(self) -> bool {
                matches!(self.default_status(), DefaultStatus::Enabled)
            }

            pub const fn all() -> &'static [Rule] {
                ALL_RULES
            }
        }

        impl fmt::Display for Rule {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        /// All rules in declaration order
        pub const ALL_RULES: &[Rule] = &[
            $(Rule::$variant),*
        ];
    };
}

declare_rules! {
    NoCircular => {
        name: "no-circular",
        severity: Warn,
        default: Enabled,
        comment: "This dependency is part of a circular relationship. Revise the solution so the modules no longer depend on each other.",
        from: {},
        to: { "circular": true },
    },
    NoOrphans => {
        name: "no-orphans",
        severity: Warn,
        default: Disabled,
        comment: "This is an orphan module: nothing imports it and it imports nothing. Remove it or wire it in.",
        from: {
            "orphan": true,
            "pathNot": [
                "(^|/)[.][^/]+[.](?:js|cjs|mjs|ts|cts|mts|json)$",
                "[.]d[.]ts$",
                "(^|/)tsconfig[.]json$"
            ]
        },
        to: {},
    },
    NoDeprecatedCore => {
        name: "no-deprecated-core",
        severity: Warn,
        default: Disabled,
        comment: "A module depends on a node core module that has been deprecated. Find an alternative.",
        from: {},
        to: {
            "dependencyTypes": ["core"],
            "path": ["^(punycode|domain|constants|sys|_linklist|_stream_wrap)$"]
        },
    },
    NotToUnresolvable => {
        name: "not-to-unresolvable",
        severity: Error,
        default: Disabled,
        comment: "This module depends on a module that cannot be found. Add it to your package.json or fix the import path.",
        from: {},
        to: { "couldNotResolve": true },
    },
    NoDevDependencyUsedInProd => {
        name: "no-dev-dependency-used-in-prod",
        severity: Error,
        default: Disabled,
        comment: "Production code depends on a devDependency, which will be missing at runtime. Move it to dependencies.",
        from: {
            "path": "^(src)",
            "pathNot": "[.](?:spec|test)[.](?:js|mjs|cjs|jsx|ts|mts|cts|tsx)$"
        },
        to: {
            "dependencyTypes": ["npm-dev"],
            "dependencyTypesNot": ["type-only"],
            "pathNot": ["node_modules/@types/"]
        },
    },
    NoDuplicateDepTypes => {
        name: "no-duplicate-dep-types",
        severity: Warn,
        default: Disabled,
        comment: "The package appears in more than one dependency section of package.json. Keep it in one.",
        from: {},
        to: {
            "moreThanOneDependencyType": true,
            "dependencyTypesNot": ["type-only"]
        },
    },
}

fn known_rule_names() -> String {
    ALL_RULES
        .iter()
        .map(|rule| rule.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Per-rule enable flags, keyed by rule name
///
/// A rule without an entry falls back to its default status. Entries that
/// name no known rule are kept so they can be reported, but never build.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct RuleToggles(BTreeMap<String, bool>);

impl RuleToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every rule switched off explicitly
    pub fn all_disabled() -> Self {
        Self(ALL_RULES.iter().map(|rule| (rule.name().to_string(), false)).collect())
    }

    pub fn is_enabled(&self, rule: Rule) -> bool {
        self.0
            .get(rule.name())
            .copied()
            .unwrap_or_else(|| rule.is_enabled_by_default())
    }

    /// Set a toggle by name, rejecting names outside the catalogue
    pub fn set(&mut self, name: &str, enabled: bool) -> Result<(), RuleError> {
        let rule = Rule::from_name(name).ok_or_else(|| RuleError::UnknownRule {
            name: name.to_string(),
            known: known_rule_names(),
        })?;
        self.0.insert(rule.name().to_string(), enabled);
        Ok(())
    }

    pub fn with(mut self, rule: Rule, enabled: bool) -> Self {
        self.0.insert(rule.name().to_string(), enabled);
        self
    }

    /// Toggle names that match no built-in rule
    pub fn unknown_names(&self) -> Vec<&str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|name| Rule::from_name(name).is_none())
            .collect()
    }
}

/// Definitions for every enabled rule, in declaration order
pub fn build(toggles: &RuleToggles) -> Vec<RuleDefinition> {
    ALL_RULES
        .iter()
        .filter(|rule| toggles.is_enabled(**rule))
        .map(|rule| rule.definition())
        .collect()
}

/// The `ruleSet` object handed to the engine
///
/// Holds only the rule-set keys. Payload values are carried verbatim, so a
/// non-array `forbidden` from a hand-written file stays as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleSet(Map<String, Value>);

impl RuleSet {
    /// Rule set of built definitions under `forbidden`
    pub fn from_definitions(definitions: Vec<RuleDefinition>) -> Self {
        let forbidden = definitions
            .into_iter()
            .map(|definition| serde_json::to_value(definition).unwrap_or(Value::Null))
            .collect();
        let mut map = Map::new();
        map.insert("forbidden".to_string(), Value::Array(forbidden));
        Self(map)
    }

    /// Pick the rule-set keys out of a parsed document, `None` if it has none
    pub fn from_document(document: &Map<String, Value>) -> Option<Self> {
        let map: Map<String, Value> = RULE_SET_KEYS
            .iter()
            .filter_map(|key| document.get(*key).map(|value| (key.to_string(), value.clone())))
            .collect();

        if map.is_empty() { None } else { Some(Self(map)) }
    }

    /// Number of rules across the rule arrays
    pub fn rule_count(&self) -> usize {
        RULE_ARRAY_KEYS
            .iter()
            .filter_map(|key| self.0.get(*key))
            .filter_map(Value::as_array)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    include!("rules.test.rs");
}
