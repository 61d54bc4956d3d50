//! Graph theme presets for graph reporters.
//!
//! Presets are plain data keyed by [`ThemeName`]; the only logic is the
//! overlay of direction and line shape from settings.

use super::merge::deep_merge;
use crate::primitives::{GraphDirection, LineShape, ThemeName};
use serde_json::{Value, json};

/// Preset attributes for a theme
pub fn preset(name: ThemeName) -> Value {
    match name {
        ThemeName::Base => json!({
            "graph": {
                "splines": "ortho",
                "ordering": "out",
                "fontname": "Helvetica-bold",
                "fontsize": "9",
                "style": "rounded,bold,filled",
                "fillcolor": "#ffffff",
                "compound": "true"
            },
            "node": {
                "shape": "box",
                "style": "rounded, filled",
                "height": "0.2",
                "color": "black",
                "fillcolor": "#ffffcc",
                "fontcolor": "black",
                "fontname": "Helvetica",
                "fontsize": "9"
            },
            "edge": {
                "arrowhead": "normal",
                "arrowsize": "0.6",
                "penwidth": "2.0",
                "color": "#00000033",
                "fontname": "Helvetica",
                "fontsize": "9"
            }
        }),
        ThemeName::Engineering => json!({
            "graph": {
                "splines": "ortho",
                "bgcolor": "white",
                "fontname": "Helvetica",
                "fontsize": "10",
                "style": "filled",
                "fillcolor": "#f5f5f5"
            },
            "node": {
                "shape": "box",
                "style": "filled",
                "color": "#4d4d4d",
                "fillcolor": "#ffffff",
                "fontname": "Helvetica",
                "fontsize": "9"
            },
            "edge": {
                "arrowhead": "vee",
                "arrowsize": "0.5",
                "penwidth": "1.0",
                "color": "#4d4d4d"
            }
        }),
        ThemeName::Improved => json!({
            "graph": {
                "bgcolor": "#eee",
                "color": "#80808040",
                "fontcolor": "black",
                "style": "rounded",
                "nodesep": 0.25,
                "ranksep": 0.25
            },
            "edge": {
                "arrowhead": "normal",
                "arrowsize": "1.0",
                "penwidth": "1.0",
                "color": "#28317873"
            }
        }),
    }
}

/// Theme payload with `rankdir` and optional `splines` laid over the preset
pub fn theme_payload(name: ThemeName, direction: GraphDirection, line_shape: Option<LineShape>) -> Value {
    let mut graph = json!({ "rankdir": direction.as_rankdir() });
    if let Some(shape) = line_shape {
        graph["splines"] = json!(shape.as_splines());
    }

    deep_merge(preset(name), json!({ "graph": graph }))
}

#[cfg(test)]
mod tests {
    include!("themes.test.rs");
}
