use super::*;

#[test]
fn test_default_filter_uses_level_for_own_crates() {
    let filter = default_filter(LogLevel::Debug);
    assert!(filter.starts_with("depview=debug,depview_lib=debug"));
    assert!(filter.contains("walkdir=warn"));
    assert!(filter.ends_with(",debug"));
}

#[test]
fn test_default_filter_parses() {
    for verbosity in 0..=4 {
        let filter = default_filter(LogLevel::from_verbosity(verbosity));
        assert!(EnvFilter::try_new(&filter).is_ok(), "filter should parse: {filter}");
    }
}

#[test]
fn test_second_init_is_rejected() {
    let config = LoggerConfig {
        level: LogLevel::Warning,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        terminal_caps: crate::terminal::TerminalCapabilities::minimal(),
    };

    // A session built by another test may already have installed the logger
    if let Ok(logger) = Logger::init(config.clone()) {
        assert_eq!(logger.config().level, LogLevel::Warning);
    }
    assert!(Logger::init(config).is_err());
}
