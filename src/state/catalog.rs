//! Snapshot-driven catalog state with stale-read suppression.
//!
//! DESIGN
//! ======
//! The rendered list is derived entirely from the most recently applied
//! catalog snapshot. Overlapping refreshes are resolved with a monotonic
//! request token: only the response carrying the latest token is applied,
//! so a slow stale read can never overwrite a newer render.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::ActivityCatalog;

/// Catalog snapshot plus refresh bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    catalog: Option<ActivityCatalog>,
    load_error: Option<String>,
    loading: bool,
    latest_request: u64,
}

impl CatalogState {
    /// Start a refresh and return its request token.
    ///
    /// Issuing a new token supersedes every outstanding refresh; their
    /// responses will be dropped on arrival.
    pub fn begin_refresh(&mut self) -> u64 {
        self.latest_request += 1;
        self.loading = true;
        self.latest_request
    }

    /// Apply a fetched snapshot, replacing the previous one wholesale.
    ///
    /// Returns `false` (and changes nothing) when `token` does not name the
    /// latest refresh.
    pub fn apply_catalog(&mut self, token: u64, catalog: ActivityCatalog) -> bool {
        if token != self.latest_request {
            return false;
        }
        self.catalog = Some(catalog);
        self.load_error = None;
        self.loading = false;
        true
    }

    /// Record a failed refresh.
    ///
    /// The previously applied snapshot is kept untouched; only the error
    /// message changes. Returns `false` when `token` is stale.
    pub fn apply_load_failure(&mut self, token: u64, message: impl Into<String>) -> bool {
        if token != self.latest_request {
            return false;
        }
        self.load_error = Some(message.into());
        self.loading = false;
        true
    }

    /// Latest applied snapshot, if any refresh has succeeded yet.
    pub fn catalog(&self) -> Option<&ActivityCatalog> {
        self.catalog.as_ref()
    }

    /// Message from the most recent failed refresh, cleared by the next
    /// successful one.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Whether a refresh is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }
}
