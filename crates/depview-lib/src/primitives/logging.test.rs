use super::*;

#[test]
fn test_log_level_from_verbosity() {
    let levels: Vec<_> = (0..=5).map(LogLevel::from_verbosity).collect();

    assert_eq!(
        levels,
        vec![
            LogLevel::Error,
            LogLevel::Warning,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
            LogLevel::Trace,
        ]
    );
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Trace);
}

#[test]
fn test_log_level_spellings() {
    assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!("verbose".parse::<LogLevel>().unwrap(), LogLevel::Trace);
    assert_eq!(LogLevel::Warning.as_filter_directive(), "warn");
}

#[test]
fn test_log_format_spellings() {
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert!("yaml".parse::<LogFormat>().is_err());
}

#[test]
fn test_log_output_parse() {
    assert_eq!("stdout".parse::<LogOutput>().unwrap(), LogOutput::Stdout);
    assert!("stdin".parse::<LogOutput>().is_err());
}

#[test]
fn test_invalid_value_reports_input() {
    let err = "loud".parse::<LogLevel>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "loud");
            assert_eq!(reason, "invalid log level");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
