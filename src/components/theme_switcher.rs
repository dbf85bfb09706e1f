//! Theme picker, quick theme toggle and dark-mode toggle.

#[cfg(test)]
#[path = "theme_switcher_test.rs"]
mod theme_switcher_test;

use leptos::prelude::*;

use crate::state::ui::{Theme, UiState};
use crate::util::storage::BrowserStorage;
use crate::util::theme;

/// Theme the quick toggle flips to from the default.
const QUICK_ALTERNATE: Theme = Theme::Corporate;

pub(crate) fn quick_toggle_title(current: Theme, alternate: Theme) -> String {
    format!("Switch to {} theme", current.toggled(alternate).config().display_name)
}

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let select_theme = move |next: Theme| {
        theme::set_theme(&BrowserStorage, next);
        ui.update(|u| u.theme = next);
    };

    let on_theme_change = move |ev: leptos::ev::Event| {
        if let Some(next) = Theme::from_key(&event_target_value(&ev)) {
            select_theme(next);
        }
    };

    view! {
        <div class="theme-switcher">
            <select
                class="theme-switcher__select"
                title="Theme"
                prop:value=move || ui.get().theme.key()
                on:change=on_theme_change
            >
                {Theme::all()
                    .iter()
                    .map(|t| {
                        let config = t.config();
                        view! {
                            <option value=config.key title=config.description>
                                {config.display_name}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button
                class="btn theme-switcher__quick"
                on:click=move |_| select_theme(ui.get_untracked().theme.toggled(QUICK_ALTERNATE))
                title=move || quick_toggle_title(ui.get().theme, QUICK_ALTERNATE)
            >
                "◐"
            </button>
            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let next = theme::toggle_dark_mode(&BrowserStorage, ui.get_untracked().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </div>
    }
}
