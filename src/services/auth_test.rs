use super::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::executor::block_on;
use serde_json::json;

use crate::net::api::Headers;
use crate::net::error::{ApiFailure, ErrorCategory};
use crate::state::session::SessionState;
use crate::util::storage::MemoryStorage;

const KEY: &str = "portal_auth";

// =========================================================================
// MockApi
// =========================================================================

type Session = Rc<RefCell<SessionState>>;

#[derive(Default)]
struct MockApi {
    responses: RefCell<VecDeque<Result<Value, ApiFailure>>>,
    logout_result: RefCell<Option<ApiFailure>>,
    /// Loading flag as observed while each request was in flight.
    seen_loading: RefCell<Vec<bool>>,
    logout_headers: RefCell<Vec<Headers>>,
    session: Session,
}

impl MockApi {
    fn new(session: &Session) -> Self {
        Self { session: session.clone(), ..Self::default() }
    }

    fn respond(self, response: Result<Value, ApiFailure>) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    fn fail_logout(self, failure: ApiFailure) -> Self {
        *self.logout_result.borrow_mut() = Some(failure);
        self
    }

    fn next(&self) -> Result<Value, ApiFailure> {
        self.seen_loading.borrow_mut().push(self.session.borrow().loading);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ApiFailure::Transport("no scripted response".into())))
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for MockApi {
    async fn login(&self, _request: &LoginRequest) -> Result<Value, ApiFailure> {
        self.next()
    }

    async fn signup(&self, _fields: &SignupFields) -> Result<Value, ApiFailure> {
        self.next()
    }

    async fn logout(&self, headers: Headers) -> Result<(), ApiFailure> {
        self.seen_loading.borrow_mut().push(self.session.borrow().loading);
        self.logout_headers.borrow_mut().push(headers);
        match self.logout_result.borrow_mut().take() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

struct Harness {
    gateway: AuthGateway<MockApi, Session, MemoryStorage>,
    session: Session,
    store: MemoryStorage,
}

fn harness(script: impl FnOnce(MockApi) -> MockApi) -> Harness {
    let session: Session = Rc::new(RefCell::new(SessionState::default()));
    let store = MemoryStorage::new();
    let api = script(MockApi::new(&session));
    let gateway = AuthGateway::new(api, session.clone(), SessionPersistence::new(store.clone(), KEY));
    Harness { gateway, session, store }
}

fn demo_body() -> Value {
    json!({ "user": { "id": "1", "email": "demo@x.com", "fullName": "Demo User", "userName": "demo" } })
}

fn persisted(store: &MemoryStorage) -> Option<Identity> {
    SessionPersistence::new(store.clone(), KEY).load().map(|s| s.user)
}

// =========================================================================
// login
// =========================================================================

#[test]
fn login_demo_user_sets_session_and_toggles_loading() {
    let h = harness(|api| api.respond(Ok(demo_body())));
    let identity = block_on(h.gateway.login("demo@x.com", "demo123", Role::Client)).unwrap();

    assert_eq!(identity.id, "1");
    assert_eq!(identity.email, "demo@x.com");
    assert_eq!(identity.full_name, "Demo User");
    assert_eq!(identity.user_name, "demo");
    assert_eq!(identity.role, Role::Client);

    assert_eq!(*h.gateway.api.seen_loading.borrow(), vec![true]);
    let state = h.session.borrow();
    assert!(!state.loading);
    assert_eq!(state.current(), Some(&identity));
    assert_eq!(persisted(&h.store), Some(identity.clone()));
}

#[test]
fn login_accepts_all_three_shapes() {
    let user = json!({ "id": "7", "email": "e@x.com", "fullName": "E", "userName": "e" });
    let bodies = [
        json!({ "user": user.clone(), "token": "t" }),
        json!({ "data": { "user": user.clone(), "token": "t" } }),
        user.clone(),
    ];
    for body in bodies {
        let h = harness(|api| api.respond(Ok(body.clone())));
        let identity = block_on(h.gateway.login("e@x.com", "pw", Role::Client)).unwrap();
        assert_eq!(identity.id, "7");
        assert_eq!(h.session.borrow().current(), Some(&identity));
    }
}

#[test]
fn login_stores_token_in_session_and_storage() {
    let h = harness(|api| api.respond(Ok(json!({ "user": demo_body()["user"], "token": "jwt-1" }))));
    block_on(h.gateway.login("demo@x.com", "pw", Role::Client)).unwrap();
    assert_eq!(h.session.borrow().token.as_deref(), Some("jwt-1"));
    let stored = SessionPersistence::new(h.store.clone(), KEY).load().unwrap();
    assert_eq!(stored.token.as_deref(), Some("jwt-1"));
}

#[test]
fn second_login_replaces_identity() {
    let other = json!({ "user": { "id": "2", "email": "ops@maxxton.com", "role": "employee" } });
    let h = harness(|api| api.respond(Ok(demo_body())).respond(Ok(other)));
    block_on(h.gateway.login("demo@x.com", "pw", Role::Client)).unwrap();
    block_on(h.gateway.login("ops@maxxton.com", "pw", Role::Employee)).unwrap();
    let state = h.session.borrow();
    assert_eq!(state.current().map(|u| u.id.as_str()), Some("2"));
    assert!(state.is_employee());
    assert_eq!(persisted(&h.store).map(|u| u.id), Some("2".to_owned()));
}

#[test]
fn login_failure_maps_status_and_clears_loading() {
    let cases = [
        (404, ErrorCategory::NotFound, "Account not found"),
        (401, ErrorCategory::AuthRejected, "Invalid credentials"),
        (422, ErrorCategory::ValidationFailed, "Invalid input"),
    ];
    for (status, category, message) in cases {
        let h = harness(|api| api.respond(Err(ApiFailure::Status { status, body: None })));
        let err = block_on(h.gateway.login("a@b.com", "pw", Role::Client)).unwrap_err();
        assert_eq!(err.category(), category);
        assert_eq!(err.to_string(), message);
        assert!(!h.session.borrow().loading);
        assert!(!h.session.borrow().is_authenticated());
        assert!(h.store.is_empty());
    }
}

#[test]
fn login_failure_uses_payload_message_for_unmapped_status() {
    let body = Some(json!({ "message": "Try again later" }));
    let h = harness(|api| api.respond(Err(ApiFailure::Status { status: 503, body })));
    let err = block_on(h.gateway.login("a@b.com", "pw", Role::Client)).unwrap_err();
    assert_eq!(err.to_string(), "Try again later");
}

#[test]
fn login_network_failure_is_retryable() {
    let h = harness(|api| api.respond(Err(ApiFailure::Transport("offline".into()))));
    let err = block_on(h.gateway.login("a@b.com", "pw", Role::Client)).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Network);
    assert!(err.retryable());
    assert!(!h.session.borrow().loading);
}

#[test]
fn login_malformed_success_body_is_rejected() {
    let h = harness(|api| api.respond(Ok(json!("Success"))));
    let err = block_on(h.gateway.login("a@b.com", "pw", Role::Client)).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::MalformedResponse);
    assert!(!h.session.borrow().loading);
    assert!(h.session.borrow().user.is_none());
}

#[test]
fn login_failure_keeps_existing_session() {
    let h = harness(|api| api.respond(Ok(demo_body())).respond(Err(ApiFailure::Status { status: 401, body: None })));
    let first = block_on(h.gateway.login("demo@x.com", "pw", Role::Client)).unwrap();
    assert!(block_on(h.gateway.login("demo@x.com", "bad", Role::Client)).is_err());
    assert_eq!(h.session.borrow().current(), Some(&first));
    assert_eq!(persisted(&h.store), Some(first));
}

#[test]
fn login_with_wrong_role_is_rejected() {
    let body = json!({ "user": { "id": "1", "email": "ops@maxxton.com", "role": "employee" } });
    let h = harness(|api| api.respond(Ok(body)));
    let err = block_on(h.gateway.login("ops@maxxton.com", "pw", Role::Client)).unwrap_err();
    assert_eq!(err, AuthError::RoleMismatch(Role::Client));
    assert_eq!(err.category(), ErrorCategory::AuthRejected);
    assert!(h.session.borrow().user.is_none());
}

// =========================================================================
// signup
// =========================================================================

fn signup_fields() -> SignupFields {
    SignupFields {
        email: "new.guest@oceanbreeze.com".to_owned(),
        full_name: "New Guest".to_owned(),
        user_name: "new_guest".to_owned(),
        password: "secret1".to_owned(),
    }
}

#[test]
fn signup_creates_client_identity_with_tenant() {
    let body = json!({ "data": { "user": { "id": "u-9", "email": "new.guest@oceanbreeze.com", "fullName": "New Guest", "userName": "new_guest" } } });
    let h = harness(|api| api.respond(Ok(body)));
    let identity = block_on(h.gateway.signup(signup_fields())).unwrap();
    assert_eq!(identity.role, Role::Client);
    assert_eq!(identity.client_id.as_deref(), Some("ocean-breeze"));
    assert_eq!(*h.gateway.api.seen_loading.borrow(), vec![true]);
    assert!(!h.session.borrow().loading);
    assert_eq!(h.session.borrow().branding().map(|b| b.display_name), Some("Ocean Breeze Villas"));
}

#[test]
fn signup_conflict_reports_existing_account() {
    let h = harness(|api| api.respond(Err(ApiFailure::Status { status: 409, body: None })));
    let err = block_on(h.gateway.signup(signup_fields())).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Conflict);
    assert!(!h.session.borrow().loading);
}

// =========================================================================
// logout
// =========================================================================

#[test]
fn logout_clears_session_and_storage() {
    let h = harness(|api| api.respond(Ok(json!({ "user": demo_body()["user"], "token": "tok" }))));
    block_on(h.gateway.login("demo@x.com", "pw", Role::Client)).unwrap();

    block_on(h.gateway.logout()).unwrap();

    assert_eq!(*h.session.borrow(), SessionState::default());
    assert!(h.store.is_empty());
    let headers = h.gateway.api.logout_headers.borrow();
    assert_eq!(headers[0][0], ("Authorization", "Bearer tok".to_owned()));
}

#[test]
fn logout_clears_local_state_even_when_remote_fails() {
    let h = harness(|api| {
        api.respond(Ok(demo_body()))
            .fail_logout(ApiFailure::Status { status: 500, body: None })
    });
    block_on(h.gateway.login("demo@x.com", "pw", Role::Client)).unwrap();

    let err = block_on(h.gateway.logout()).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Unexpected);
    let state = h.session.borrow();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.loading);
    assert!(h.store.is_empty());
}

#[test]
fn logout_on_network_failure_still_clears() {
    let h = harness(|api| api.fail_logout(ApiFailure::Transport("offline".into())));
    SessionPersistence::new(h.store.clone(), KEY).save(
        &normalize_auth_response(&demo_body(), Role::Client, 0).unwrap().identity,
        None,
    );
    assert!(block_on(h.gateway.logout()).is_err());
    assert!(h.store.is_empty());
    assert_eq!(*h.gateway.api.seen_loading.borrow(), vec![true]);
}

#[test]
fn logout_without_user_sends_no_auth_headers() {
    let h = harness(|api| api);
    block_on(h.gateway.logout()).unwrap();
    assert!(h.gateway.api.logout_headers.borrow()[0].is_empty());
}
