//! Percent-encoding for URI path and query components.
//!
//! Activity names and participant emails travel in URL paths and query
//! strings, so both are encoded with the same character set the browser's
//! `encodeURIComponent` uses before they are spliced into an endpoint.

#[cfg(test)]
#[path = "urlencode_test.rs"]
mod urlencode_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except the characters `encodeURIComponent` leaves literal:
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URI component (path segment or query value).
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}
