//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog data and interaction surfaces while reading
//! shared state from Leptos context providers; orchestration stays in
//! `pages`.

pub mod activity_card;
pub mod signup_form;
pub mod status_message;
