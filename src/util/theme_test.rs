use super::*;
use crate::state::branding::branding_for;
use crate::util::storage::MemoryStorage;

#[test]
fn read_theme_defaults_when_missing_or_unknown() {
    let store = MemoryStorage::new();
    assert_eq!(read_theme(&store), Theme::Default);
    store.set_item(THEME_STORAGE_KEY, "neon");
    assert_eq!(read_theme(&store), Theme::Default);
}

#[test]
fn set_theme_persists_key() {
    let store = MemoryStorage::new();
    set_theme(&store, Theme::Finance);
    assert_eq!(store.get_item(THEME_STORAGE_KEY).as_deref(), Some("finance"));
    assert_eq!(read_theme(&store), Theme::Finance);
}

#[test]
fn toggle_dark_mode_flips_and_persists() {
    let store = MemoryStorage::new();
    assert_eq!(read_dark_mode(&store), None);
    assert!(toggle_dark_mode(&store, false));
    assert_eq!(read_dark_mode(&store), Some(true));
    assert!(!toggle_dark_mode(&store, true));
    assert_eq!(store.get_item(DARK_MODE_STORAGE_KEY).as_deref(), Some("false"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn initial_dark_mode_falls_back_to_light_outside_browser() {
    let store = MemoryStorage::new();
    assert!(!initial_dark_mode(&store));
    store.set_item(DARK_MODE_STORAGE_KEY, "true");
    assert!(initial_dark_mode(&store));
}

#[test]
fn brand_color_vars_use_tenant_palette() {
    let brand = branding_for("royal-palace").unwrap();
    let vars = brand_color_vars(brand);
    assert_eq!(vars[0], (PRIMARY_COLOR_VAR, "#7B1FA2"));
    assert_eq!(vars[1], ("--brand-background", "#F3E5F5"));
}

#[test]
fn document_appliers_are_callable_natively() {
    apply_theme_class(Theme::Startup);
    apply_dark_mode(true);
    apply_branding(branding_for("ocean-breeze"));
    apply_branding(None);
}
