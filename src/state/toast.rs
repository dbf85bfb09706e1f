//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Plain FIFO list; insertion order is display order. Expiry timers live in
//! the browser glue (`util::toast`) and may fire after a toast was already
//! dismissed, so removal by id is idempotent.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::config::DEFAULT_TOAST_TTL_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    /// BEM modifier used by the toast container.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
            Self::Warning => "toast--warning",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Info => "ℹ",
            Self::Warning => "⚠",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub text: String,
    pub severity: Severity,
    pub ttl_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    /// Lifetime applied when `push` gets no (or a zero) ttl.
    pub default_ttl_ms: u32,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::with_default_ttl(DEFAULT_TOAST_TTL_MS)
    }
}

impl ToastState {
    #[must_use]
    pub fn with_default_ttl(default_ttl_ms: u32) -> Self {
        Self { items: Vec::new(), default_ttl_ms }
    }

    /// Append a toast and return it so the caller can schedule its expiry.
    pub fn push(&mut self, text: impl Into<String>, severity: Severity, ttl_ms: Option<u32>) -> Toast {
        let toast = Toast {
            id: format!("toast-{}", uuid::Uuid::new_v4()),
            text: text.into(),
            severity,
            ttl_ms: ttl_ms.filter(|ttl| *ttl > 0).unwrap_or(self.default_ttl_ms),
        };
        self.items.push(toast.clone());
        toast
    }

    pub fn success(&mut self, text: impl Into<String>) -> Toast {
        self.push(text, Severity::Success, None)
    }

    pub fn error(&mut self, text: impl Into<String>) -> Toast {
        self.push(text, Severity::Error, None)
    }

    pub fn info(&mut self, text: impl Into<String>) -> Toast {
        self.push(text, Severity::Info, None)
    }

    pub fn warning(&mut self, text: impl Into<String>) -> Toast {
        self.push(text, Severity::Warning, None)
    }

    /// Remove a toast now. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Timer path; same semantics as [`ToastState::dismiss`].
    pub fn expire(&mut self, id: &str) -> bool {
        self.dismiss(id)
    }
}
