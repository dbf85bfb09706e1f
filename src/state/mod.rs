//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`, `ui`) so components depend on
//! small focused models; `branding` is static reference data.

pub mod branding;
pub mod session;
pub mod toast;
pub mod ui;
