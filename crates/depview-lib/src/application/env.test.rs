use super::*;

fn env(vars: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_vars(
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .unwrap()
}

#[test]
fn test_no_color_environment_variable() {
    let color = env(&[("NO_COLOR", "1")]).apply_color_config(TerminalCapsDetectIntent::Auto);
    assert_eq!(color, TerminalCapsDetectIntent::Never);
}

#[test]
fn test_force_color_environment_variable() {
    let color = env(&[("FORCE_COLOR", "1")]).apply_color_config(TerminalCapsDetectIntent::Auto);
    assert_eq!(color, TerminalCapsDetectIntent::Always);
}

#[test]
fn test_environment_variable_precedence() {
    let env_config = env(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);

    // FORCE_COLOR=1 wins over NO_COLOR and CLICOLOR
    assert_eq!(
        env_config.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Always
    );
}

#[test]
fn test_ci_environment_variable() {
    let env_config = env(&[("CI", "true"), ("FORCE_COLOR", "1")]);

    assert!(env_config.is_ci());
    assert_eq!(
        env_config.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Never
    );
}

#[test]
fn test_ci_false_is_not_ci() {
    assert!(!env(&[("CI", "false")]).is_ci());
    assert!(!env(&[("CI", "0")]).is_ci());
    assert!(!env(&[]).is_ci());
}

#[test]
fn test_empty_no_color_is_ignored() {
    let color = env(&[("NO_COLOR", "")]).apply_color_config(TerminalCapsDetectIntent::Auto);
    assert_eq!(color, TerminalCapsDetectIntent::Auto);
}

#[test]
fn test_invalid_force_color_is_ignored() {
    let color = env(&[("FORCE_COLOR", "maybe")]).apply_color_config(TerminalCapsDetectIntent::Never);
    assert_eq!(color, TerminalCapsDetectIntent::Never);
}
