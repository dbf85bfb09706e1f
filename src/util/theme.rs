//! Theme, dark mode and tenant colour application.
//!
//! Reads preferences from `localStorage` and applies them to the document:
//! the theme as a class on `<body>`, dark mode as a `data-theme` attribute on
//! `<html>`, and tenant colours as CSS custom properties. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native paths
//! no-op so tests stay deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::KeyValueStore;
use crate::state::branding::Branding;
use crate::state::ui::Theme;

pub const THEME_STORAGE_KEY: &str = "portal_theme";
pub const DARK_MODE_STORAGE_KEY: &str = "portal_dark_mode";
pub const PRIMARY_COLOR_VAR: &str = "--color-primary-500";
const BRAND_VARS: [&str; 3] = [PRIMARY_COLOR_VAR, "--brand-background", "--brand-text"];

/// Saved theme, or the default when nothing valid is stored.
pub fn read_theme(store: &impl KeyValueStore) -> Theme {
    store
        .get_item(THEME_STORAGE_KEY)
        .and_then(|key| Theme::from_key(&key))
        .unwrap_or_default()
}

/// Saved dark mode preference; `None` when the user never chose.
pub fn read_dark_mode(store: &impl KeyValueStore) -> Option<bool> {
    store.get_item(DARK_MODE_STORAGE_KEY).map(|val| val == "true")
}

/// Apply `theme` to the document and persist it.
pub fn set_theme(store: &impl KeyValueStore, theme: Theme) {
    apply_theme_class(theme);
    store.set_item(THEME_STORAGE_KEY, theme.key());
}

/// Toggle dark mode, apply it and persist the new preference.
pub fn toggle_dark_mode(store: &impl KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply_dark_mode(next);
    store.set_item(DARK_MODE_STORAGE_KEY, if next { "true" } else { "false" });
    next
}

/// Initial dark mode: stored preference, else the system preference.
pub fn initial_dark_mode(store: &impl KeyValueStore) -> bool {
    read_dark_mode(store).unwrap_or_else(system_prefers_dark)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Swap the theme class on `<body>`, removing every other theme's class.
pub fn apply_theme_class(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let classes = body.class_list();
        for other in Theme::all() {
            let class = other.config().class_name;
            if !class.is_empty() {
                let _ = classes.remove_1(class);
            }
        }
        let class = theme.config().class_name;
        if !class.is_empty() {
            let _ = classes.add_1(class);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Set the `data-theme` attribute on `<html>`.
pub fn apply_dark_mode(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// CSS custom properties carrying a tenant's colours.
#[must_use]
pub fn brand_color_vars(branding: &Branding) -> [(&'static str, &'static str); 3] {
    let [primary, background, text] = BRAND_VARS;
    [
        (primary, branding.primary_color),
        (background, branding.background_color),
        (text, branding.text_color),
    ]
}

/// Override theme colours with the tenant's, or reset them when `None`.
pub fn apply_branding(branding: Option<&Branding>) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let style = root.style();
        match branding {
            Some(branding) => {
                for (name, value) in brand_color_vars(branding) {
                    let _ = style.set_property(name, value);
                }
            }
            None => {
                for name in BRAND_VARS {
                    let _ = style.remove_property(name);
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = branding;
    }
}
