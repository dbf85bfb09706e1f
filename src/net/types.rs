//! Wire DTOs and the canonical identity record.
//!
//! DESIGN
//! ======
//! The auth API is loosely specified: the user record may sit at the top level
//! of the body, under `user`, or under `data.user`. [`normalize_auth_response`]
//! accepts exactly those three shapes and nothing else, so every other part of
//! the client only ever sees an [`Identity`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::AuthError;
use crate::state::branding::tenant_for_email;

/// Portal role of an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Hotel guest / tenant customer.
    Client,
    /// Internal staff member.
    Employee,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Employee => "employee",
        }
    }

    /// Route an authenticated user of this role lands on.
    #[must_use]
    pub fn home_route(self) -> &'static str {
        match self {
            Self::Client => "/dashboard",
            Self::Employee => "/admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user's canonical profile record.
///
/// Older builds persisted this record with `username` and `type` keys, which
/// are still accepted on read, alone or next to the current keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredIdentity")]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub user_name: String,
    pub role: Role,
    /// Tenant (hotel brand) the user belongs to; clients only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub last_login: i64,
}

/// Read side of [`Identity`]: current and legacy key spellings side by side.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredIdentity {
    #[serde(deserialize_with = "deserialize_string_from_any")]
    id: String,
    email: String,
    full_name: String,
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default, rename = "type")]
    legacy_type: Option<Role>,
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    last_login: i64,
}

impl TryFrom<StoredIdentity> for Identity {
    type Error = String;

    fn try_from(stored: StoredIdentity) -> Result<Self, Self::Error> {
        let user_name = stored
            .user_name
            .or(stored.username)
            .ok_or_else(|| "missing field `userName`".to_owned())?;
        let role = stored
            .role
            .or(stored.legacy_type)
            .ok_or_else(|| "missing field `role`".to_owned())?;
        Ok(Self {
            id: stored.id,
            email: stored.email,
            full_name: stored.full_name,
            user_name,
            role,
            client_id: stored.client_id,
            avatar: stored.avatar,
            last_login: stored.last_login,
        })
    }
}

impl Identity {
    /// Up to two uppercase initials for the avatar badge.
    #[must_use]
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Fields collected by the signup flow; also the body of `POST /sign-up`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFields {
    pub email: String,
    pub full_name: String,
    pub user_name: String,
    pub password: String,
}

/// Successful auth response after normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthPayload {
    pub identity: Identity,
    pub token: Option<String>,
}

/// User record as the server sends it. Only `id` and `email` are required.
#[derive(Debug)]
struct WireUser {
    id: String,
    email: String,
    full_name: Option<String>,
    user_name: Option<String>,
    role: Option<Role>,
    client_id: Option<String>,
    avatar: Option<String>,
    last_login: Option<i64>,
}

impl WireUser {
    /// Read a user record. Each field takes the first present, non-null key
    /// in its spelling list, so records carrying both spellings are fine.
    fn from_record(record: &Value) -> Result<Self, AuthError> {
        let Some(map) = record.as_object() else {
            return Err(malformed("user record is not a JSON object"));
        };
        let field = |keys: &[&str]| keys.iter().find_map(|key| map.get(*key).filter(|v| !v.is_null()));
        let text = |keys: &[&str]| field(keys).and_then(Value::as_str).map(str::to_owned);

        let id = match field(&["id"]) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => return Err(malformed(&format!("expected string or number id, got {other}"))),
            None => return Err(malformed("missing field `id`")),
        };
        let email = text(&["email"]).ok_or_else(|| malformed("missing field `email`"))?;
        let role = field(&["role", "type"])
            .map(Role::deserialize)
            .transpose()
            .map_err(|e| malformed(&e.to_string()))?;

        Ok(Self {
            id,
            email,
            full_name: text(&["fullName", "full_name", "name"]),
            user_name: text(&["userName", "username", "user_name"]),
            role,
            client_id: text(&["clientId", "client_id"]),
            avatar: text(&["avatar"]),
            last_login: field(&["lastLogin", "last_login"]).and_then(timestamp_from_value),
        })
    }
}

fn malformed(reason: &str) -> AuthError {
    AuthError::MalformedResponse(reason.to_owned())
}

/// Normalize a successful auth response body into an [`AuthPayload`].
///
/// `requested` is the role the caller signed in as. A server-reported role
/// that disagrees is rejected; a missing one takes the requested role.
/// `now_ms` fills `lastLogin` when the server omits it.
///
/// # Errors
///
/// [`AuthError::MalformedResponse`] if no recognised user record is present,
/// [`AuthError::RoleMismatch`] if the server reports a different role.
pub fn normalize_auth_response(body: &Value, requested: Role, now_ms: i64) -> Result<AuthPayload, AuthError> {
    if !body.is_object() {
        return Err(malformed("response body is not a JSON object"));
    }
    let record = body
        .get("user")
        .or_else(|| body.pointer("/data/user"))
        .unwrap_or(body);
    let wire = WireUser::from_record(record)?;

    if let Some(role) = wire.role {
        if role != requested {
            return Err(AuthError::RoleMismatch(requested));
        }
    }

    let token = body
        .get("token")
        .or_else(|| body.pointer("/data/token"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    let client_id = match requested {
        Role::Client => wire
            .client_id
            .or_else(|| Some(tenant_for_email(&wire.email).to_owned())),
        Role::Employee => wire.client_id,
    };

    let identity = Identity {
        full_name: wire
            .full_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| full_name_from_email(&wire.email)),
        user_name: wire
            .user_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| user_name_from_email(&wire.email)),
        id: wire.id,
        email: wire.email,
        role: requested,
        client_id,
        avatar: wire.avatar,
        last_login: wire.last_login.unwrap_or(now_ms),
    };
    Ok(AuthPayload { identity, token })
}

/// Local part of an email address, or the whole input when there is no `@`.
#[must_use]
pub fn user_name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_owned()
}

/// `"jane.doe@x.com"` becomes `"Jane Doe"`.
#[must_use]
pub fn full_name_from_email(email: &str) -> String {
    user_name_from_email(email)
        .split('.')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn deserialize_string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Missing or unreadable timestamps (such as ISO dates from older records)
/// read as 0.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(timestamp_from_value(&Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Epoch milliseconds as a number or numeric string.
fn timestamp_from_value(value: &Value) -> Option<i64> {
    #[allow(clippy::cast_possible_truncation)]
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
