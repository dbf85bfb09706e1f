//! Reactive toast helpers.
//!
//! Pushes into the `RwSignal<ToastState>` provided by the app and, in the
//! browser, schedules expiry with `gloo-timers`. The timer may outlive the
//! toast (or the signal); both cases are no-ops.

use leptos::prelude::*;

use crate::state::toast::{Severity, Toast, ToastState};

/// Show a toast with the queue's default lifetime.
pub fn notify(toasts: RwSignal<ToastState>, text: impl Into<String>, severity: Severity) {
    notify_for(toasts, text, severity, None);
}

/// Show a toast that expires after `ttl_ms` (default when `None` or zero).
pub fn notify_for(toasts: RwSignal<ToastState>, text: impl Into<String>, severity: Severity, ttl_ms: Option<u32>) {
    let text = text.into();
    let Some(toast) = toasts.try_update(|t| t.push(text, severity, ttl_ms)) else {
        return;
    };
    schedule_expiry(toasts, toast);
}

pub fn dismiss(toasts: RwSignal<ToastState>, id: &str) {
    let _ = toasts.try_update(|t| t.dismiss(id));
}

fn schedule_expiry(toasts: RwSignal<ToastState>, toast: Toast) {
    #[cfg(feature = "csr")]
    {
        let Toast { id, ttl_ms, .. } = toast;
        gloo_timers::callback::Timeout::new(ttl_ms, move || {
            let _ = toasts.try_update(|t| t.expire(&id));
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (toasts, toast);
    }
}
