use super::*;
use crate::util::storage::{KeyValueStore, MemoryStorage};

fn identity(role: Role) -> Identity {
    Identity {
        id: "u1".to_owned(),
        email: "alice@oceanbreeze.com".to_owned(),
        full_name: "Alice".to_owned(),
        user_name: "alice".to_owned(),
        role,
        client_id: match role {
            Role::Client => Some("ocean-breeze".to_owned()),
            Role::Employee => None,
        },
        avatar: None,
        last_login: 0,
    }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_no_user() {
    let state = SessionState::default();
    assert!(state.current().is_none());
    assert!(!state.is_authenticated());
    assert!(!state.is_client());
    assert!(!state.is_employee());
    assert!(state.role().is_none());
}

#[test]
fn session_state_default_not_loading() {
    assert!(!SessionState::default().loading);
}

// =============================================================
// derived views
// =============================================================

#[test]
fn client_user_views() {
    let mut state = SessionState::default();
    state.set_user(identity(Role::Client), Some("tok".to_owned()));
    assert!(state.is_authenticated());
    assert!(state.is_client());
    assert!(!state.is_employee());
    assert_eq!(state.token.as_deref(), Some("tok"));
    assert_eq!(state.branding().unwrap().tenant_id, "ocean-breeze");
}

#[test]
fn employee_user_views() {
    let mut state = SessionState::default();
    state.set_user(identity(Role::Employee), None);
    assert!(state.is_employee());
    assert!(!state.is_client());
    assert!(state.branding().is_none());
}

#[test]
fn set_user_replaces_wholesale_and_clear_removes() {
    let mut state = SessionState::default();
    state.set_user(identity(Role::Client), Some("a".to_owned()));
    state.set_user(identity(Role::Employee), None);
    assert_eq!(state.role(), Some(Role::Employee));
    assert_eq!(state.token, None);
    state.clear();
    assert_eq!(state, SessionState::default());
}

#[test]
fn branding_is_none_for_unknown_tenant() {
    let mut user = identity(Role::Client);
    user.client_id = Some("client-1".to_owned());
    let mut state = SessionState::default();
    state.set_user(user, None);
    assert!(state.branding().is_none());
}

// =============================================================
// restore + SessionStore
// =============================================================

#[test]
fn restore_hydrates_from_persisted_record() {
    let persistence = SessionPersistence::new(MemoryStorage::new(), "portal_auth");
    persistence.save(&identity(Role::Client), Some("tok"));
    let state = SessionState::restore(&persistence);
    assert_eq!(state.current(), Some(&identity(Role::Client)));
    assert_eq!(state.token.as_deref(), Some("tok"));
    assert!(!state.loading);
}

#[test]
fn restore_without_record_is_default() {
    let store = MemoryStorage::new();
    store.set_item("portal_auth", "garbage");
    let persistence = SessionPersistence::new(store.clone(), "portal_auth");
    assert_eq!(SessionState::restore(&persistence), SessionState::default());
    assert!(store.is_empty());
}

#[test]
fn refcell_store_reads_and_writes() {
    let store = Rc::new(RefCell::new(SessionState::default()));
    store.write_session(|s| s.loading = true);
    assert!(store.read_session().loading);
    assert!(store.borrow().loading);
}
