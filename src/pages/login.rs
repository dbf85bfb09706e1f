//! Login page for clients and employees.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guest-only entry route. A role toggle picks which portal the user is
//! signing into; the server's answer must agree with that choice or the
//! gateway rejects the login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Identity, Role};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn other_role(role: Role) -> Role {
    match role {
        Role::Client => Role::Employee,
        Role::Employee => Role::Client,
    }
}

/// Page title and card heading for the selected portal.
pub(crate) fn login_heading(role: Role) -> &'static str {
    match role {
        Role::Client => "Client Login",
        Role::Employee => "Employee Login",
    }
}

pub(crate) fn welcome_back(identity: &Identity) -> String {
    format!("Welcome back, {}!", identity.full_name)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Client);
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get_untracked().loading {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            use leptos_router::NavigateOptions;

            use crate::state::toast::Severity;
            use crate::util::toast::notify;

            let config = expect_context::<crate::config::PortalConfig>();
            let gateway = crate::app::portal_gateway(session, &config);
            let selected = role.get_untracked();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match gateway.login(&email_value, &password_value, selected).await {
                    Ok(identity) => {
                        notify(toasts, welcome_back(&identity), Severity::Success);
                        navigate(identity.role.home_route(), NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e.to_string());
                        notify(toasts, e.to_string(), Severity::Error);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value, toasts, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <Title text=move || login_heading(role.get())/>
            <div class="login-card">
                <h1>"Hotel Portal"</h1>
                <p class="login-card__subtitle">{move || login_heading(role.get())}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            error.set(String::new());
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            error.set(String::new());
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || session.get().loading>
                        {move || if session.get().loading { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button
                    class="login-link"
                    type="button"
                    on:click=move |_| {
                        role.update(|r| *r = other_role(*r));
                        error.set(String::new());
                    }
                >
                    {move || format!("Sign in as {} instead", other_role(role.get()))}
                </button>
                <Show when=move || role.get() == Role::Client>
                    <p class="login-card__footer">
                        "New guest? "
                        <a href="/signup">"Create an account"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}
