//! Top bar with the signed-in user, theme controls, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the client dashboard and the employee console. Logout always
//! ends the local session; a failed remote logout is only reported as a
//! warning toast.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use leptos::prelude::*;

use crate::components::theme_switcher::ThemeSwitcher;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Display name and initials for the toolbar badge.
pub(crate) fn self_identity(session: &SessionState) -> (String, String) {
    session
        .current()
        .map(|user| (user.full_name.clone(), user.initials()))
        .unwrap_or_else(|| ("Guest".to_owned(), "?".to_owned()))
}

#[component]
pub fn Toolbar(#[prop(into)] title: Signal<String>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::state::toast::Severity;
            use crate::util::toast::notify;

            let config = expect_context::<crate::config::PortalConfig>();
            let gateway = crate::app::portal_gateway(session, &config);
            leptos::task::spawn_local(async move {
                match gateway.logout().await {
                    Ok(()) => notify(toasts, "You have been signed out.", Severity::Info),
                    Err(e) => notify(toasts, format!("Signed out locally: {e}"), Severity::Warning),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = toasts;
        }
    };

    view! {
        <div class="toolbar">
            <span class="toolbar__title">{move || title.get()}</span>
            <span class="toolbar__divider"></span>
            <span class="toolbar__spacer"></span>

            <ThemeSwitcher/>

            <span class="toolbar__self">
                <span class="toolbar__avatar">{move || session.with(self_identity).1}</span>
                {move || session.with(self_identity).0}
            </span>

            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </div>
    }
}
