//! Two-step guest signup.
//!
//! Step one collects name and email; step two collects username and
//! password. Only clients can self-register, so the gateway always signs the
//! new account in with the client role.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::net::types::{SignupFields, user_name_from_email};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

pub(crate) const PAGE_TITLE: &str = "Create Account";

const MIN_FULL_NAME_LEN: usize = 2;
const MIN_USER_NAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SignupStep {
    Profile,
    Credentials,
}

pub(crate) fn validate_profile(full_name: &str, email: &str) -> Result<(), &'static str> {
    if full_name.trim().chars().count() < MIN_FULL_NAME_LEN {
        return Err("Full name must be at least 2 characters.");
    }
    let email = email.trim();
    if !(email.contains('@') && email.contains('.')) {
        return Err("Enter a valid email address.");
    }
    Ok(())
}

pub(crate) fn validate_credentials(user_name: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if user_name.chars().count() < MIN_USER_NAME_LEN {
        return Err("Username must be at least 3 characters.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}

/// Lowercase and keep only `[a-z0-9_]`.
pub(crate) fn sanitize_username(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Username suggestion for a freshly entered email.
pub(crate) fn suggested_username(email: &str) -> String {
    sanitize_username(&user_name_from_email(email.trim()))
}

pub(crate) fn build_signup_fields(full_name: &str, email: &str, user_name: &str, password: &str) -> SignupFields {
    SignupFields {
        email: email.trim().to_owned(),
        full_name: full_name.trim().to_owned(),
        user_name: sanitize_username(user_name),
        password: password.to_owned(),
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let step = RwSignal::new(SignupStep::Profile);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let user_name = RwSignal::new(String::new());
    let user_name_edited = RwSignal::new(false);
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_next = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_profile(&full_name.get_untracked(), &email.get_untracked()) {
            Ok(()) => {
                if !user_name_edited.get_untracked() {
                    user_name.set(suggested_username(&email.get_untracked()));
                }
                error.set(String::new());
                step.set(SignupStep::Credentials);
            }
            Err(msg) => error.set(msg.to_owned()),
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get_untracked().loading {
            return;
        }
        if let Err(msg) = validate_credentials(
            &user_name.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            error.set(msg.to_owned());
            return;
        }
        error.set(String::new());
        let fields = build_signup_fields(
            &full_name.get_untracked(),
            &email.get_untracked(),
            &user_name.get_untracked(),
            &password.get_untracked(),
        );

        #[cfg(feature = "csr")]
        {
            use leptos_router::NavigateOptions;

            use crate::state::toast::Severity;
            use crate::util::toast::notify;

            let config = expect_context::<crate::config::PortalConfig>();
            let gateway = crate::app::portal_gateway(session, &config);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match gateway.signup(fields).await {
                    Ok(identity) => {
                        notify(toasts, format!("Welcome, {}!", identity.full_name), Severity::Success);
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
            let _ = (fields, toasts, &navigate);
        }
    };

    let text_input = move |signal: RwSignal<String>| {
        move |ev: leptos::ev::Event| {
            signal.set(event_target_value(&ev));
            error.set(String::new());
        }
    };

    view! {
        <div class="login-page">
            <Title text=PAGE_TITLE/>
            <div class="login-card">
                <h1>{PAGE_TITLE}</h1>
                <p class="login-card__subtitle">
                    {move || match step.get() {
                        SignupStep::Profile => "Step 1 of 2: About you",
                        SignupStep::Credentials => "Step 2 of 2: Sign-in details",
                    }}
                </p>
                <Show
                    when=move || step.get() == SignupStep::Profile
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_submit.clone()>
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="Username"
                                    prop:value=move || user_name.get()
                                    on:input=move |ev| {
                                        user_name.set(sanitize_username(&event_target_value(&ev)));
                                        user_name_edited.set(true);
                                        error.set(String::new());
                                    }
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Password"
                                    prop:value=move || password.get()
                                    on:input=text_input(password)
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Confirm password"
                                    prop:value=move || confirm.get()
                                    on:input=text_input(confirm)
                                />
                                <div class="login-form__actions">
                                    <button
                                        class="login-link"
                                        type="button"
                                        on:click=move |_| {
                                            error.set(String::new());
                                            step.set(SignupStep::Profile);
                                        }
                                    >
                                        "Back"
                                    </button>
                                    <button class="login-button" type="submit" disabled=move || session.get().loading>
                                        {move || if session.get().loading { "Creating account..." } else { "Create Account" }}
                                    </button>
                                </div>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_next>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || full_name.get()
                            on:input=text_input(full_name)
                        />
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=text_input(email)
                        />
                        <button class="login-button" type="submit">"Next"</button>
                    </form>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
