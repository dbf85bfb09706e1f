//! Employee console.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::toolbar::Toolbar;
use crate::net::types::Identity;
use crate::state::session::SessionState;

fn identity_field(session: RwSignal<SessionState>, field: fn(&Identity) -> String) -> impl Fn() -> String + Copy {
    move || session.with(|s| s.current().map(field).unwrap_or_default())
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let full_name = identity_field(session, |u| u.full_name.clone());

    view! {
        <div class="admin-page">
            <Title text="Admin Dashboard"/>
            <Toolbar title="Staff Console".to_owned()/>
            <section class="admin-profile">
                <h1>{move || format!("Welcome, {}", full_name())}</h1>
                <dl class="admin-profile__details">
                    <dt>"Email"</dt>
                    <dd>{identity_field(session, |u| u.email.clone())}</dd>
                    <dt>"Username"</dt>
                    <dd>{identity_field(session, |u| u.user_name.clone())}</dd>
                    <dt>"Role"</dt>
                    <dd>{identity_field(session, |u| u.role.to_string())}</dd>
                </dl>
            </section>
        </div>
    }
}
