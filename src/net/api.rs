//! REST API helpers for communicating with the signup server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs where the `Err` text is already
//! user-facing: the server's `detail` field when it sent one, a fixed
//! fallback otherwise. A rejection body that does not parse as JSON counts
//! as a transport failure, not a server-reported one. Raw transport errors
//! go to the console log only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ActivityCatalog;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorDetail;
#[cfg(feature = "hydrate")]
use super::types::MessageResponse;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::urlencode::encode_component;

/// Read endpoint for the full activity catalog.
pub const ACTIVITIES_ENDPOINT: &str = "/activities";

/// Shown when the catalog cannot be fetched or decoded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";

/// Shown when a signup request fails before the server answers.
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";

/// Shown when a removal request fails before the server answers.
pub const REMOVAL_FAILED_MESSAGE: &str = "Failed to remove participant. Please try again.";

/// Shown when the server rejects a mutation without a `detail` field.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Signup path for an activity, with both components percent-encoded.
/// `POST` signs a participant up; `DELETE` removes one.
#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// Fetch the full activity catalog from `GET /activities`.
///
/// # Errors
///
/// Returns the fixed load-failure message on transport failure, non-success
/// status, or a malformed body.
pub async fn fetch_activities() -> Result<ActivityCatalog, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ACTIVITIES_ENDPOINT)
            .send()
            .await
            .map_err(|e| {
                log::error!("activities fetch failed: {e}");
                LOAD_FAILED_MESSAGE.to_owned()
            })?;
        if !resp.ok() {
            log::error!("activities fetch returned status {}", resp.status());
            return Err(LOAD_FAILED_MESSAGE.to_owned());
        }
        resp.json::<ActivityCatalog>().await.map_err(|e| {
            log::error!("activities decode failed: {e}");
            LOAD_FAILED_MESSAGE.to_owned()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(LOAD_FAILED_MESSAGE.to_owned())
    }
}

/// Sign a participant up via `POST /activities/{name}/signup?email={email}`.
///
/// Returns the server's confirmation message on success.
///
/// # Errors
///
/// Returns the server's `detail` text when the request is rejected, or a
/// fixed fallback when the failure carries no detail.
pub async fn signup(activity: &str, email: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = signup_endpoint(activity, email);
        let resp = gloo_net::http::Request::post(&url).send().await.map_err(|e| {
            log::error!("signup request failed: {e}");
            SIGNUP_FAILED_MESSAGE.to_owned()
        })?;
        read_mutation_response(resp, SIGNUP_FAILED_MESSAGE).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(SIGNUP_FAILED_MESSAGE.to_owned())
    }
}

/// Remove a participant via `DELETE /activities/{name}/signup?email={email}`.
///
/// Returns the server's confirmation message on success.
///
/// # Errors
///
/// Same contract as [`signup`], with the removal fallback text.
pub async fn remove_signup(activity: &str, email: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = signup_endpoint(activity, email);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| {
                log::error!("removal request failed: {e}");
                REMOVAL_FAILED_MESSAGE.to_owned()
            })?;
        read_mutation_response(resp, REMOVAL_FAILED_MESSAGE).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(REMOVAL_FAILED_MESSAGE.to_owned())
    }
}

/// Decode a mutation response into the user-facing message.
///
/// Success bodies carry `{message}`; failure bodies carry `{detail}` but the
/// server is not trusted to always include it.
#[cfg(feature = "hydrate")]
async fn read_mutation_response(
    resp: gloo_net::http::Response,
    transport_fallback: &str,
) -> Result<String, String> {
    if resp.ok() {
        let body: MessageResponse = resp.json().await.map_err(|e| {
            log::error!("mutation response decode failed: {e}");
            transport_fallback.to_owned()
        })?;
        Ok(body.message)
    } else {
        let body = resp
            .json::<ErrorDetail>()
            .await
            .map_err(|e| log::error!("rejection body decode failed: {e}"))
            .ok();
        Err(rejection_message(body, transport_fallback))
    }
}

/// User-facing text for a rejected mutation.
///
/// `None` means the rejection body did not parse, which is a transport
/// failure. A parsed body without `detail` gets the generic fallback.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(body: Option<ErrorDetail>, transport_fallback: &str) -> String {
    match body {
        Some(body) => body
            .detail
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned()),
        None => transport_fallback.to_owned(),
    }
}
