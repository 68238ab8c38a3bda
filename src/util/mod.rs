//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate environment-independent concerns from page and
//! component logic so they stay natively testable.

pub mod urlencode;
