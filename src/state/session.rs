//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and user-aware components; written only by the auth
//! gateway. In the running app the state lives in an `RwSignal` provided via
//! context, so every view that reads it re-renders on change.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use super::branding::{Branding, branding_for};
use crate::net::types::{Identity, Role};
use crate::util::session_persistence::SessionPersistence;
use crate::util::storage::KeyValueStore;

/// Authentication state: the current user, their token, and whether an auth
/// request is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<Identity>,
    pub token: Option<String>,
    pub loading: bool,
}

impl SessionState {
    /// Hydrate from the persisted record, if any.
    pub fn restore<K: KeyValueStore>(persistence: &SessionPersistence<K>) -> Self {
        match persistence.load() {
            Some(stored) => Self { user: Some(stored.user), token: stored.token, loading: false },
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_client(&self) -> bool {
        self.role() == Some(Role::Client)
    }

    #[must_use]
    pub fn is_employee(&self) -> bool {
        self.role() == Some(Role::Employee)
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Tenant branding for the current client user.
    #[must_use]
    pub fn branding(&self) -> Option<&'static Branding> {
        self.user
            .as_ref()
            .filter(|u| u.role == Role::Client)
            .and_then(|u| u.client_id.as_deref())
            .and_then(branding_for)
    }

    /// Replace the active identity wholesale.
    pub fn set_user(&mut self, user: Identity, token: Option<String>) {
        self.user = Some(user);
        self.token = token;
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }
}

/// Handle to the process-wide [`SessionState`].
///
/// `RwSignal` is the reactive implementation used by the app;
/// `Rc<RefCell<_>>` serves tests and non-reactive callers.
pub trait SessionStore {
    /// Snapshot of the current state, without subscribing.
    fn read_session(&self) -> SessionState;

    /// Mutate the state in place, notifying subscribers.
    fn write_session(&self, f: impl FnOnce(&mut SessionState));
}

impl SessionStore for RwSignal<SessionState> {
    fn read_session(&self) -> SessionState {
        self.get_untracked()
    }

    fn write_session(&self, f: impl FnOnce(&mut SessionState)) {
        self.update(f);
    }
}

impl SessionStore for Rc<RefCell<SessionState>> {
    fn read_session(&self) -> SessionState {
        self.borrow().clone()
    }

    fn write_session(&self, f: impl FnOnce(&mut SessionState)) {
        f(&mut self.borrow_mut());
    }
}
