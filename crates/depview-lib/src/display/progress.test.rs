use super::*;
use crate::terminal::TerminalCapabilities;

#[test]
fn test_spinner_hidden_outside_terminal() {
    let styling = StyleManager::new(&TerminalCapabilities::minimal());
    let progress = ProgressDisplay::new(&styling, false);

    let spinner = progress.spinner("Computing dependency graph for \"widget.ts\"...");
    assert!(spinner.is_hidden());

    spinner.finish_clear();
}

#[test]
fn test_spinner_abandon_and_clear() {
    let styling = StyleManager::new(&TerminalCapabilities::minimal());
    let progress = ProgressDisplay::new(&styling, false);

    progress.spinner("first").abandon("engine failed");
    progress.spinner("second").finish_clear();
}
