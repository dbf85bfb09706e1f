//! REST client for the remote auth API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: [`HttpAuthApi`] reports a transport failure, and
//! tests substitute their own [`AuthApi`] implementation.
//!
//! ERROR HANDLING
//! ==============
//! Implementations never interpret status codes. They hand back the raw JSON
//! body or an [`ApiFailure`]; mapping to user-facing errors happens in the
//! auth gateway.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::error::ApiFailure;
use super::types::{Identity, LoginRequest, SignupFields};
use crate::config::PortalConfig;

pub const LOGIN_PATH: &str = "login";
pub const SIGNUP_PATH: &str = "sign-up";
pub const LOGOUT_PATH: &str = "logout";

/// Extra request headers as `(name, value)` pairs.
pub type Headers = Vec<(&'static str, String)>;

/// Remote auth operations. Enables mocking in tests.
///
/// Futures are `?Send`: the portal runs on the browser main thread.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// `POST /login`. Returns the raw JSON body of a 2xx response.
    async fn login(&self, request: &LoginRequest) -> Result<Value, ApiFailure>;

    /// `POST /sign-up`. Returns the raw JSON body of a 2xx response.
    async fn signup(&self, fields: &SignupFields) -> Result<Value, ApiFailure>;

    /// `POST /logout` with the caller's auth headers.
    async fn logout(&self, headers: Headers) -> Result<(), ApiFailure>;
}

/// Auth headers attached to requests made on behalf of `user`.
///
/// The bearer credential is the session token, or the user id for servers
/// that issue no token.
#[must_use]
pub fn auth_headers(user: &Identity, token: Option<&str>) -> Headers {
    vec![
        ("Authorization", format!("Bearer {}", token.unwrap_or(&user.id))),
        ("X-Client-Type", user.role.as_str().to_owned()),
        ("X-Client-ID", user.client_id.clone().unwrap_or_default()),
    ]
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(method: &str, url: &str, status: u16, elapsed_ms: i64) -> String {
    format!("http error: {method} {url} -> {status} ({elapsed_ms}ms)")
}

/// [`AuthApi`] over HTTP against the configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    config: PortalConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: &PortalConfig) -> Self {
        Self { config: config.clone() }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// POST `payload` as JSON and return the parsed body of a 2xx response.
    /// Empty or non-JSON bodies come back as `Value::Null`.
    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
        headers: Headers,
    ) -> Result<Value, ApiFailure> {
        #[cfg(feature = "csr")]
        {
            let url = self.url(path);
            let started = crate::util::time::now_ms();
            log::debug!("http request: POST {url}");

            let mut builder = gloo_net::http::Request::post(&url);
            for (name, value) in &headers {
                builder = builder.header(name, value);
            }
            let resp = builder
                .json(payload)
                .map_err(|e| ApiFailure::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| {
                    log::warn!("http transport error: POST {url}: {e}");
                    ApiFailure::Transport(e.to_string())
                })?;

            let status = resp.status();
            let body = resp
                .text()
                .await
                .ok()
                .and_then(|raw| serde_json::from_str::<Value>(&raw).ok());
            let elapsed = crate::util::time::now_ms() - started;

            if !resp.ok() {
                log::warn!("{}", request_failed_message("POST", &url, status, elapsed));
                return Err(ApiFailure::Status { status, body });
            }
            log::debug!("http response: POST {url} -> {status} ({elapsed}ms)");
            Ok(body.unwrap_or(Value::Null))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(path), payload, headers);
            Err(ApiFailure::Transport("not available outside the browser".to_owned()))
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<Value, ApiFailure> {
        self.post_json(LOGIN_PATH, request, Vec::new()).await
    }

    async fn signup(&self, fields: &SignupFields) -> Result<Value, ApiFailure> {
        self.post_json(SIGNUP_PATH, fields, Vec::new()).await
    }

    async fn logout(&self, headers: Headers) -> Result<(), ApiFailure> {
        self.post_json(LOGOUT_PATH, &serde_json::json!({}), headers)
            .await
            .map(|_| ())
    }
}
