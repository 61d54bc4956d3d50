//! Status display for user feedback
//!
//! Everything here is written to stderr. Stdout belongs to command payloads
//! (resolved options, located paths) so they can be piped.

use super::styling::StyleManager;

/// Status display manager for semantic user feedback
pub struct StatusDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StatusDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    /// Example: `Display::status().success("tsconfig", "src/tsconfig.json")`
    /// Output: `✓ tsconfig: src/tsconfig.json`
    pub fn success(&self, item: &str, details: &str) {
        eprintln!("{}", self.styling.format_success(&join_detail(item, details)));
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.styling.format_warning(message));
    }

    pub fn info(&self, message: &str) {
        eprintln!("{}", self.styling.format_info(message));
    }

    /// Plain message without status symbols
    pub fn message(&self, text: &str) {
        eprintln!("{}", text);
    }

    pub fn subtle(&self, text: &str) {
        eprintln!("{}", self.styling.style_subtle(text));
    }
}

pub(crate) fn join_detail(item: &str, details: &str) -> String {
    if details.is_empty() {
        item.to_string()
    } else {
        format!("{}: {}", item, details)
    }
}

#[cfg(test)]
mod tests {
    include!("status.test.rs");
}
