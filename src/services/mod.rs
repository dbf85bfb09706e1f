//! Domain services used by pages.
//!
//! ARCHITECTURE
//! ============
//! Service modules own remote calls and state transitions so pages stay
//! focused on input handling and rendering.

pub mod auth;
