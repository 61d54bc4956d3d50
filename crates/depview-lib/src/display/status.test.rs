use super::*;
use crate::terminal::TerminalCapabilities;

#[test]
fn test_join_detail_omits_empty_details() {
    assert_eq!(join_detail("tsconfig", ""), "tsconfig");
    assert_eq!(join_detail("tsconfig", "src/tsconfig.json"), "tsconfig: src/tsconfig.json");
}

#[test]
fn test_plain_terminal_uses_ascii_symbols() {
    let styling = StyleManager::new(&TerminalCapabilities::minimal());

    assert_eq!(styling.format_success("done"), "+ done");
    assert_eq!(styling.format_error("failed"), "x failed");
}

#[test]
fn test_status_methods_do_not_panic() {
    let styling = StyleManager::new(&TerminalCapabilities::minimal());
    let status = StatusDisplay::new(&styling);

    status.success("tsconfig", "tsconfig.json");
    status.warning("override file ignored");
    status.info("using defaults");
    status.message("depview");
    status.subtle("hint");
}
