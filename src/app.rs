//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ProtectedRoute, Redirect, Route, Router, Routes},
};

use crate::components::toast_container::ToastContainer;
use crate::config::PortalConfig;
use crate::net::api::HttpAuthApi;
use crate::pages::{admin::AdminPage, dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::services::auth::AuthGateway;
use crate::state::{session::SessionState, toast::ToastState, ui::UiState};
use crate::util::guards::{RouteGuard, route_condition, route_redirect};
use crate::util::session_persistence::SessionPersistence;
use crate::util::storage::BrowserStorage;
use crate::util::theme;

/// Auth gateway wired to the browser: HTTP API, session signal, `localStorage`.
pub type PortalGateway = AuthGateway<HttpAuthApi, RwSignal<SessionState>, BrowserStorage>;

pub fn session_persistence(config: &PortalConfig) -> SessionPersistence<BrowserStorage> {
    SessionPersistence::new(BrowserStorage, config.storage_key.clone())
}

/// Build a gateway bound to the app's session signal.
pub fn portal_gateway(session: RwSignal<SessionState>, config: &PortalConfig) -> PortalGateway {
    AuthGateway::new(HttpAuthApi::new(config), session, session_persistence(config))
}

/// Root application component.
///
/// Hydrates the session from storage once, provides all shared state
/// contexts and sets up client-side routing. Every page except the root
/// redirect sits behind a route guard; pages set their own `<Title>`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::from_build_env();
    let session = RwSignal::new(SessionState::restore(&session_persistence(&config)));
    let toasts = RwSignal::new(ToastState::with_default_ttl(config.toast_ttl_ms));
    let ui = RwSignal::new(UiState {
        dark_mode: theme::initial_dark_mode(&BrowserStorage),
        theme: theme::read_theme(&BrowserStorage),
    });

    let initial = ui.get_untracked();
    theme::apply_dark_mode(initial.dark_mode);
    theme::apply_theme_class(initial.theme);

    // Tenant colours follow whoever is signed in.
    Effect::new(move || theme::apply_branding(session.with(SessionState::branding)));

    provide_context(config);
    provide_context(session);
    provide_context(toasts);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/hotel-portal.css"/>
        <Title text="Hotel Portal"/>

        <ToastContainer/>
        <Router>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <ProtectedRoute
                    path=StaticSegment("login")
                    view=LoginPage
                    condition=route_condition(session, RouteGuard::GuestOnly)
                    redirect_path=route_redirect(session, RouteGuard::GuestOnly)
                />
                <ProtectedRoute
                    path=StaticSegment("signup")
                    view=SignupPage
                    condition=route_condition(session, RouteGuard::GuestOnly)
                    redirect_path=route_redirect(session, RouteGuard::GuestOnly)
                />
                <ProtectedRoute
                    path=StaticSegment("dashboard")
                    view=DashboardPage
                    condition=route_condition(session, RouteGuard::RequireClient)
                    redirect_path=route_redirect(session, RouteGuard::RequireClient)
                />
                <ProtectedRoute
                    path=StaticSegment("admin")
                    view=AdminPage
                    condition=route_condition(session, RouteGuard::RequireEmployee)
                    redirect_path=route_redirect(session, RouteGuard::RequireEmployee)
                />
            </Routes>
        </Router>
    }
}
