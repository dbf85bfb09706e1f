//! # hotel-portal
//!
//! Leptos + WASM frontend for the hotel/property-management portal: login,
//! signup, role-based dashboards for clients and employees, per-tenant
//! branding, themes and toast notifications.
//!
//! Domain logic (session state, auth gateway, persistence, guards, toasts)
//! is plain Rust tested natively; browser glue compiles under the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
