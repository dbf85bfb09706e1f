use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.theme, Theme::Default);
}

#[test]
fn theme_keys_round_trip_through_from_key() {
    for theme in Theme::all() {
        assert_eq!(Theme::from_key(theme.key()), Some(*theme));
    }
    assert_eq!(Theme::from_key("neon"), None);
}

#[test]
fn theme_toggle_flips_between_default_and_alternate() {
    assert_eq!(Theme::Default.toggled(Theme::Healthcare), Theme::Healthcare);
    assert_eq!(Theme::Healthcare.toggled(Theme::Healthcare), Theme::Default);
    assert_eq!(Theme::Finance.toggled(Theme::Healthcare), Theme::Default);
}

#[test]
fn only_default_theme_has_no_body_class() {
    for theme in Theme::all() {
        let class = theme.config().class_name;
        assert_eq!(class.is_empty(), *theme == Theme::Default);
    }
}
