//! Route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards are pure predicates over [`SessionState`]. The router wraps every
//! guarded route in a `ProtectedRoute` built from [`route_condition`] and
//! [`route_redirect`], so a denied page is never rendered. A deny is final for
//! that navigation attempt.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGuard {
    /// Any authenticated user.
    RequireAuth,
    /// Authenticated users with the client role.
    RequireClient,
    /// Authenticated users with the employee role.
    RequireEmployee,
    /// Entry pages (login, signup): only while signed out.
    GuestOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

impl RouteGuard {
    #[must_use]
    pub fn evaluate(self, session: &SessionState) -> GuardOutcome {
        let allowed = match self {
            Self::RequireAuth => session.is_authenticated(),
            Self::RequireClient => session.is_authenticated() && session.is_client(),
            Self::RequireEmployee => session.is_authenticated() && session.is_employee(),
            Self::GuestOnly => !session.is_authenticated(),
        };
        if allowed {
            GuardOutcome::Allow
        } else {
            GuardOutcome::Redirect(self.deny_target(session))
        }
    }

    /// Where a denied navigation is sent.
    #[must_use]
    pub fn deny_target(self, session: &SessionState) -> &'static str {
        match (self, session.role()) {
            (Self::GuestOnly, Some(role)) => role.home_route(),
            _ => LOGIN_ROUTE,
        }
    }
}

/// `ProtectedRoute` condition: re-evaluated whenever the session changes, and
/// before the route's view is built.
pub fn route_condition(
    session: RwSignal<SessionState>,
    guard: RouteGuard,
) -> impl Fn() -> Option<bool> + Send + Clone + 'static {
    move || Some(session.with(|s| guard.evaluate(s)) == GuardOutcome::Allow)
}

/// `ProtectedRoute` redirect path for `guard`.
pub fn route_redirect(
    session: RwSignal<SessionState>,
    guard: RouteGuard,
) -> impl Fn() -> &'static str + Send + Clone + 'static {
    move || session.with(|s| guard.deny_target(s))
}
