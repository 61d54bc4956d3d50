use super::shared::impl_fromstr_for_value_enum;
use clap::ValueEnum;
use std::str::FromStr;

/// Runtime color detection intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalCapsDetectIntent {
    /// Let the terminal module detect
    #[value(alias = "automatic", alias = "detect")]
    Auto,

    /// Explicitly enable (useful in non-interactive runs)
    #[value(alias = "force", alias = "on")]
    Always,

    /// Explicitly disable
    #[value(alias = "off")]
    Never,
}

/// Terminal color capability levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TerminalColorCaps {
    None,
    Ansi16,
    Ansi256,
    TrueColor,
}

/// Terminal unicode capability levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalUnicodeCaps {
    Ascii,
    Unicode,
}

impl_fromstr_for_value_enum!(TerminalCapsDetectIntent, "invalid color intent");
