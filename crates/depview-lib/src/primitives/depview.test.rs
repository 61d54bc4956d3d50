use super::*;

#[test]
fn test_direction_accepts_rankdir_spellings() {
    assert_eq!("LR".parse::<GraphDirection>().unwrap(), GraphDirection::LeftRight);
    assert_eq!("lr".parse::<GraphDirection>().unwrap(), GraphDirection::LeftRight);
    assert_eq!("TD".parse::<GraphDirection>().unwrap(), GraphDirection::TopBottom);
    assert_eq!("bottom-top".parse::<GraphDirection>().unwrap(), GraphDirection::BottomTop);
    assert_eq!(GraphDirection::RightLeft.as_rankdir(), "RL");
    assert_eq!(GraphDirection::default().as_rankdir(), "LR");
}

#[test]
fn test_unknown_theme_names_value() {
    let err = "solarized".parse::<ThemeName>().unwrap_err();
    assert!(err.to_string().contains("solarized"));
    assert!(err.to_string().contains("unknown theme"));
}

#[test]
fn test_theme_names_round_trip_through_display() {
    for theme in ThemeName::value_variants() {
        assert_eq!(theme.to_string().parse::<ThemeName>().unwrap(), *theme);
    }
}

#[test]
fn test_output_type_graph_reporters() {
    assert!(OutputType::Dot.is_graph_reporter());
    assert!(OutputType::Archi.is_graph_reporter());
    assert!(!OutputType::Json.is_graph_reporter());
    assert!(!OutputType::ErrLong.is_graph_reporter());
    assert_eq!("err-long".parse::<OutputType>().unwrap(), OutputType::ErrLong);
}

#[test]
fn test_line_shape_splines_value() {
    assert_eq!("orthogonal".parse::<LineShape>().unwrap().as_splines(), "ortho");
    assert_eq!(LineShape::Spline.as_splines(), "spline");
}

#[test]
fn test_settings_enums_deserialize_through_fromstr() {
    #[derive(Debug, serde::Deserialize)]
    struct Fields {
        theme: ThemeName,
        direction: GraphDirection,
    }

    let fields: Fields = toml::from_str("theme = \"engineering\"\ndirection = \"TB\"").unwrap();
    assert_eq!(fields.theme, ThemeName::Engineering);
    assert_eq!(fields.direction, GraphDirection::TopBottom);

    let err = toml::from_str::<Fields>("theme = \"neon\"\ndirection = \"LR\"").unwrap_err();
    assert!(err.to_string().contains("neon"));
}
