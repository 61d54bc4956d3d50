use super::*;

fn env_with(term: Option<&str>, colorterm: Option<&str>, lang: Option<&str>) -> TerminalEnvConfig {
    TerminalEnvConfig {
        term: term.map(str::to_string),
        colorterm: colorterm.map(str::to_string),
        lang: lang.map(str::to_string),
        lc_all: None,
        lc_ctype: None,
    }
}

#[test]
fn test_truecolor_detection() {
    let env = env_with(Some("xterm-256color"), Some("truecolor"), Some("en_US.UTF-8"));
    let caps = TerminalCapabilities::from_env(&env, TerminalCapsDetectIntent::Auto, true, true);

    assert_eq!(caps.color, TerminalColorCaps::TrueColor);
    assert_eq!(caps.unicode, TerminalUnicodeCaps::Unicode);
    assert!(caps.is_tty);
}

#[test]
fn test_256_color_from_term() {
    let env = env_with(Some("screen-256color"), None, None);
    let caps = TerminalCapabilities::from_env(&env, TerminalCapsDetectIntent::Auto, true, true);

    assert_eq!(caps.color, TerminalColorCaps::Ansi256);
}

#[test]
fn test_never_intent_disables_color() {
    let env = env_with(Some("xterm-256color"), Some("truecolor"), None);
    let caps = TerminalCapabilities::from_env(&env, TerminalCapsDetectIntent::Never, true, true);

    assert!(!caps.supports_color());
}

#[test]
fn test_always_intent_forces_color_without_tty() {
    let env = env_with(None, None, None);
    let caps = TerminalCapabilities::from_env(&env, TerminalCapsDetectIntent::Always, false, false);

    assert_eq!(caps.color, TerminalColorCaps::Ansi16);
    assert!(!caps.is_tty);
}

#[test]
fn test_dumb_terminal_has_no_color() {
    let env = env_with(Some("dumb"), None, None);
    let caps = TerminalCapabilities::from_env(&env, TerminalCapsDetectIntent::Auto, true, true);

    assert_eq!(caps.color, TerminalColorCaps::None);
}

#[test]
fn test_lc_all_overrides_lang() {
    let mut env = env_with(None, None, Some("en_US.UTF-8"));
    env.lc_all = Some("C".to_string());

    let caps = TerminalCapabilities::from_env(&env, TerminalCapsDetectIntent::Auto, false, false);
    assert_eq!(caps.unicode, TerminalUnicodeCaps::Ascii);
}

#[test]
fn test_minimal_capabilities() {
    let caps = TerminalCapabilities::minimal();
    assert!(!caps.supports_color());
    assert!(!caps.supports_unicode());
}
