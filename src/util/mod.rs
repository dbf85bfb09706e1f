//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, document,
//! timers, clock) from page and component logic to improve reuse and
//! testability.

pub mod guards;
pub mod session_persistence;
pub mod storage;
pub mod theme;
pub mod time;
pub mod toast;
