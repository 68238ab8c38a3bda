//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`catalog`, `status`) so components can depend
//! on small focused models. The models are plain structs tested natively;
//! the app wraps them in `RwSignal`s and provides them via context.

pub mod catalog;
pub mod status;
