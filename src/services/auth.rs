//! Auth gateway: login, signup and logout against the remote API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of session state. Each operation raises the loading flag
//! before dispatch and lowers it on every exit path, normalizes the response
//! into an [`Identity`], and mirrors the result into persistent storage.
//!
//! Concurrent submissions are not deduplicated; the last request to settle
//! wins. Callers disable their submit buttons while `loading` is set.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use crate::net::api::{AuthApi, auth_headers};
use crate::net::error::AuthError;
use crate::net::types::{Identity, LoginRequest, Role, SignupFields, normalize_auth_response};
use crate::state::session::SessionStore;
use crate::util::session_persistence::SessionPersistence;
use crate::util::storage::KeyValueStore;
use crate::util::time::now_ms;

pub struct AuthGateway<A, S, K> {
    api: A,
    session: S,
    persistence: SessionPersistence<K>,
}

/// Clears the loading flag when dropped, whichever way the operation exits.
struct LoadingGuard<'a, S: SessionStore>(&'a S);

impl<'a, S: SessionStore> LoadingGuard<'a, S> {
    fn raise(session: &'a S) -> Self {
        session.write_session(|s| s.loading = true);
        Self(session)
    }
}

impl<S: SessionStore> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.0.write_session(|s| s.loading = false);
    }
}

impl<A, S, K> AuthGateway<A, S, K>
where
    A: AuthApi,
    S: SessionStore,
    K: KeyValueStore,
{
    pub fn new(api: A, session: S, persistence: SessionPersistence<K>) -> Self {
        Self { api, session, persistence }
    }

    /// Sign in as `role`.
    ///
    /// # Errors
    ///
    /// Any [`AuthError`]; the existing session is left untouched on failure.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> Result<Identity, AuthError> {
        let _loading = LoadingGuard::raise(&self.session);
        let request = LoginRequest { email: email.trim().to_owned(), password: password.to_owned() };
        let result = match self.api.login(&request).await {
            Ok(body) => self.establish(&body, role),
            Err(failure) => Err(failure.into()),
        };
        log_outcome("login", &result);
        result
    }

    /// Create a client account and sign in with it.
    ///
    /// # Errors
    ///
    /// Any [`AuthError`]; a duplicate account surfaces as [`AuthError::Conflict`].
    pub async fn signup(&self, fields: SignupFields) -> Result<Identity, AuthError> {
        let _loading = LoadingGuard::raise(&self.session);
        let result = match self.api.signup(&fields).await {
            Ok(body) => self.establish(&body, Role::Client),
            Err(failure) => Err(failure.into()),
        };
        log_outcome("signup", &result);
        result
    }

    /// Sign out. Local session and storage are cleared even when the remote
    /// call fails; that failure is returned for information only.
    ///
    /// # Errors
    ///
    /// The remote logout failure, after local state has been cleared.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let _loading = LoadingGuard::raise(&self.session);
        let snapshot = self.session.read_session();
        let headers = snapshot
            .user
            .as_ref()
            .map(|user| auth_headers(user, snapshot.token.as_deref()))
            .unwrap_or_default();

        let remote = self.api.logout(headers).await.map_err(AuthError::from);

        self.session.write_session(|s| s.clear());
        self.persistence.clear();

        if let Err(e) = &remote {
            log::warn!("remote logout failed ({}), local session cleared: {e}", e.error_code());
        } else {
            log::info!("logged out");
        }
        remote
    }

    fn establish(&self, body: &Value, role: Role) -> Result<Identity, AuthError> {
        let payload = normalize_auth_response(body, role, now_ms())?;
        let identity = payload.identity;
        let token = payload.token;
        self.persistence.save(&identity, token.as_deref());
        let stored = identity.clone();
        self.session.write_session(move |s| s.set_user(stored, token));
        Ok(identity)
    }
}

fn log_outcome(op: &str, result: &Result<Identity, AuthError>) {
    match result {
        Ok(identity) => log::info!("{op} succeeded: user={} role={}", identity.id, identity.role),
        Err(e) => log::warn!("{op} failed: {} {e}", e.error_code()),
    }
}
