//! Analysis vocabulary shared by the CLI, the settings file, and the resolver.
//!
//! Every name a user can type (theme, direction, reporter) maps onto a closed
//! enumeration here. Unknown spellings fail at parse time with the offending
//! value in the error instead of surfacing later as a missing lookup.

use super::shared::{impl_fromstr_for_value_enum, impl_tryfrom_string_for_value_enum};
use clap::ValueEnum;
use clap::builder::PossibleValue;
use std::fmt;
use std::str::FromStr;

/// Directories owned by package managers; never searched for configuration files
pub const DEPENDENCY_DIRS: &[&str] = &["node_modules", "bower_components", "jspm_packages"];

/// Source extensions that switch type-system handling on by default
pub const TYPED_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts"];

/// Graph layout direction (graphviz `rankdir`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum GraphDirection {
    #[default]
    LeftRight,
    TopBottom,
    RightLeft,
    BottomTop,
}

impl GraphDirection {
    pub fn as_rankdir(&self) -> &'static str {
        match self {
            Self::LeftRight => "LR",
            Self::TopBottom => "TB",
            Self::RightLeft => "RL",
            Self::BottomTop => "BT",
        }
    }
}

impl ValueEnum for GraphDirection {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::LeftRight,
            Self::TopBottom,
            Self::RightLeft,
            Self::BottomTop,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::LeftRight => Some(PossibleValue::new("LR").alias("left-right")),
            Self::TopBottom => Some(
                PossibleValue::new("TB")
                    .alias("TD")
                    .alias("top-bottom"),
            ),
            Self::RightLeft => Some(PossibleValue::new("RL").alias("right-left")),
            Self::BottomTop => Some(PossibleValue::new("BT").alias("bottom-top")),
        }
    }
}

/// Edge routing (graphviz `splines`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(try_from = "String")]
pub enum LineShape {
    #[value(alias = "splines", alias = "curvy")]
    Spline,
    #[value(alias = "orthogonal")]
    Ortho,
    Polyline,
    #[value(alias = "straight")]
    Line,
    Curved,
}

impl LineShape {
    pub fn as_splines(&self) -> &'static str {
        match self {
            Self::Spline => "spline",
            Self::Ortho => "ortho",
            Self::Polyline => "polyline",
            Self::Line => "line",
            Self::Curved => "curved",
        }
    }
}

/// Reporter the analysis engine renders its result with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, clap::ValueEnum)]
#[serde(try_from = "String")]
pub enum OutputType {
    #[default]
    Dot,
    Ddot,
    Archi,
    Flat,
    Mermaid,
    Json,
    Err,
    ErrLong,
    Text,
    Html,
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Ddot => "ddot",
            Self::Archi => "archi",
            Self::Flat => "flat",
            Self::Mermaid => "mermaid",
            Self::Json => "json",
            Self::Err => "err",
            Self::ErrLong => "err-long",
            Self::Text => "text",
            Self::Html => "html",
        }
    }

    /// Reporters emitting graphviz source; only these accept a theme
    pub fn is_graph_reporter(&self) -> bool {
        matches!(self, Self::Dot | Self::Ddot | Self::Archi | Self::Flat)
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in graph theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, clap::ValueEnum)]
#[serde(try_from = "String")]
pub enum ThemeName {
    #[default]
    Base,
    Engineering,
    Improved,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Engineering => "engineering",
            Self::Improved => "improved",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the type-configuration file is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, clap::ValueEnum)]
#[serde(try_from = "String")]
pub enum LocateStrategy {
    /// Glob the whole workspace, rank by closeness, ask when ambiguous
    #[default]
    #[value(alias = "search")]
    Glob,
    /// Probe fixed names in each ancestor directory of the target
    #[value(alias = "ancestor", alias = "walk")]
    Ancestors,
}

/// Final artifact produced by the `graph` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GraphFormat {
    /// Rendered through graphviz
    #[default]
    Svg,
    /// Reporter output as-is
    #[value(alias = "raw")]
    Dot,
}

impl_fromstr_for_value_enum!(GraphDirection, "unknown graph direction");
impl_fromstr_for_value_enum!(LineShape, "unknown line shape");
impl_fromstr_for_value_enum!(OutputType, "unknown output type");
impl_fromstr_for_value_enum!(ThemeName, "unknown theme");
impl_fromstr_for_value_enum!(LocateStrategy, "unknown locate strategy");
impl_fromstr_for_value_enum!(GraphFormat, "unknown graph format");

impl_tryfrom_string_for_value_enum!(GraphDirection);
impl_tryfrom_string_for_value_enum!(LineShape);
impl_tryfrom_string_for_value_enum!(OutputType);
impl_tryfrom_string_for_value_enum!(ThemeName);
impl_tryfrom_string_for_value_enum!(LocateStrategy);

#[cfg(test)]
mod tests {
    include!("depview.test.rs");
}
