//! Terminal-aware styling
//!
//! Semantic color and symbol choices on top of `console::Style`, degraded to
//! plain ASCII when the terminal lacks unicode or color.

use crate::terminal::TerminalCapabilities;
use console::Style;

/// Status symbols for one unicode capability level
#[derive(Debug, Clone, Copy)]
struct Symbols {
    success: &'static str,
    failure: &'static str,
    warning: &'static str,
    info: &'static str,
}

const UNICODE_SYMBOLS: Symbols = Symbols {
    success: "✓",
    failure: "✗",
    warning: "⚠",
    info: "ℹ",
};

const ASCII_SYMBOLS: Symbols = Symbols {
    success: "+",
    failure: "x",
    warning: "!",
    info: "i",
};

pub struct StyleManager {
    symbols: Symbols,
    unicode: bool,
    success: Style,
    failure: Style,
    warning: Style,
    info: Style,
    subtle: Style,
}

impl StyleManager {
    pub fn new(capabilities: &TerminalCapabilities) -> Self {
        let unicode = capabilities.supports_unicode();
        let colors = capabilities.supports_color();
        let styled = |style: Style| style.force_styling(colors);

        Self {
            symbols: if unicode { UNICODE_SYMBOLS } else { ASCII_SYMBOLS },
            unicode,
            success: styled(Style::new().green()),
            failure: styled(Style::new().red()),
            warning: styled(Style::new().yellow()),
            info: styled(Style::new().cyan()),
            subtle: styled(Style::new().dim()),
        }
    }

    pub fn is_unicode(&self) -> bool {
        self.unicode
    }

    pub fn style_subtle(&self, text: &str) -> String {
        self.subtle.apply_to(text).to_string()
    }

    pub fn format_success(&self, message: &str) -> String {
        prefixed(&self.success, self.symbols.success, message)
    }

    pub fn format_error(&self, message: &str) -> String {
        prefixed(&self.failure, self.symbols.failure, message)
    }

    pub fn format_warning(&self, message: &str) -> String {
        prefixed(&self.warning, self.symbols.warning, message)
    }

    pub fn format_info(&self, message: &str) -> String {
        prefixed(&self.info, self.symbols.info, message)
    }
}

fn prefixed(style: &Style, symbol: &str, message: &str) -> String {
    format!("{} {}", style.apply_to(symbol), message)
}
