//! Auth error taxonomy and HTTP status mapping.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is recovered at the gateway or persistence boundary and
//! surfaced as one [`AuthError`]: `Display` is the message shown to the user,
//! [`AuthError::category`] the structural kind callers branch on.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;
use thiserror::Error;

use super::types::Role;

pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Raw failure reported by an [`AuthApi`](super::api::AuthApi) implementation.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiFailure {
    /// The request never produced an HTTP response.
    Transport(String),
    /// The server answered with a non-2xx status.
    Status { status: u16, body: Option<Value> },
}

/// Structural error kind, independent of the message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    AuthRejected,
    NotFound,
    ValidationFailed,
    Conflict,
    MalformedResponse,
    CorruptPersistedState,
    Unexpected,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Transport-level failure (offline, DNS, CORS, aborted).
    #[error("Unable to reach the server. Check your connection and try again.")]
    NetworkFailure(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account exists but not for the portal the user signed in to.
    #[error("This account does not have {0} access")]
    RoleMismatch(Role),

    #[error("Account not found")]
    NotFound,

    #[error("Invalid input")]
    ValidationFailed,

    #[error("An account with these details already exists")]
    Conflict,

    /// 2xx response without a usable user record.
    #[error("The server returned an unexpected response. Please try again.")]
    MalformedResponse(String),

    /// Stored session record could not be parsed and was discarded.
    #[error("Your saved session could not be read. Please sign in again.")]
    CorruptPersistedState(String),

    /// Any other non-2xx status; `message` comes from the payload when present.
    #[error("{message}")]
    Unexpected { status: u16, message: String },
}

impl AuthError {
    /// Map a non-2xx status and its optional JSON payload to an error.
    #[must_use]
    pub fn from_status(status: u16, body: Option<&Value>) -> Self {
        match status {
            404 => Self::NotFound,
            401 | 403 => Self::InvalidCredentials,
            400 | 422 => Self::ValidationFailed,
            409 => Self::Conflict,
            _ => Self::Unexpected {
                status,
                message: body
                    .and_then(payload_message)
                    .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned()),
            },
        }
    }

    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NetworkFailure(_) => ErrorCategory::Network,
            Self::InvalidCredentials | Self::RoleMismatch(_) => ErrorCategory::AuthRejected,
            Self::NotFound => ErrorCategory::NotFound,
            Self::ValidationFailed => ErrorCategory::ValidationFailed,
            Self::Conflict => ErrorCategory::Conflict,
            Self::MalformedResponse(_) => ErrorCategory::MalformedResponse,
            Self::CorruptPersistedState(_) => ErrorCategory::CorruptPersistedState,
            Self::Unexpected { .. } => ErrorCategory::Unexpected,
        }
    }

    /// Grepable code for logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NetworkFailure(_) => "E_NETWORK",
            Self::InvalidCredentials => "E_INVALID_CREDENTIALS",
            Self::RoleMismatch(_) => "E_ROLE_MISMATCH",
            Self::NotFound => "E_NOT_FOUND",
            Self::ValidationFailed => "E_VALIDATION",
            Self::Conflict => "E_CONFLICT",
            Self::MalformedResponse(_) => "E_MALFORMED_RESPONSE",
            Self::CorruptPersistedState(_) => "E_CORRUPT_SESSION",
            Self::Unexpected { .. } => "E_UNEXPECTED",
        }
    }

    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::NetworkFailure(_)) || matches!(self, Self::Unexpected { status, .. } if *status >= 500)
    }
}

impl From<ApiFailure> for AuthError {
    fn from(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::Transport(detail) => Self::NetworkFailure(detail),
            ApiFailure::Status { status, body } => Self::from_status(status, body.as_ref()),
        }
    }
}

/// `message` or `error` string from a failure payload, if non-empty.
fn payload_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_owned)
}
