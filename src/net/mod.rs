//! Networking modules for the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `error` maps failures into the user-facing error
//! taxonomy, and `types` defines the wire schema and canonical identity.

pub mod api;
pub mod error;
pub mod types;
