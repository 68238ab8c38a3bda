//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `types` defines the wire schema shared with
//! the signup server.

pub mod api;
pub mod types;
