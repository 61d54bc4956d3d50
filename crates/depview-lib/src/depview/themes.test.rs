use super::*;

#[test]
fn test_direction_is_always_set() {
    for name in [ThemeName::Base, ThemeName::Engineering, ThemeName::Improved] {
        let payload = theme_payload(name, GraphDirection::TopBottom, None);
        assert_eq!(payload["graph"]["rankdir"], "TB", "theme {name}");
    }
}

#[test]
fn test_line_shape_overrides_preset_splines() {
    let payload = theme_payload(ThemeName::Base, GraphDirection::default(), Some(LineShape::Curved));

    assert_eq!(payload["graph"]["splines"], "curved");
    assert_eq!(payload["graph"]["rankdir"], "LR");
    assert_eq!(payload["node"]["fillcolor"], "#ffffcc");
}

#[test]
fn test_without_line_shape_preset_splines_survive() {
    let payload = theme_payload(ThemeName::Engineering, GraphDirection::RightLeft, None);
    assert_eq!(payload["graph"]["splines"], "ortho");
}

#[test]
fn test_improved_preset_values() {
    let payload = theme_payload(ThemeName::Improved, GraphDirection::LeftRight, None);

    assert_eq!(payload["graph"]["bgcolor"], "#eee");
    assert_eq!(payload["graph"]["nodesep"], 0.25);
    assert_eq!(payload["edge"]["color"], "#28317873");
    assert!(payload["graph"].get("splines").is_none());
}
