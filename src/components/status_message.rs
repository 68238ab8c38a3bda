//! Transient status message area below the page header.

use leptos::prelude::*;

use crate::state::status::{StatusKind, StatusState};

/// Status area showing the current success or error message from context.
///
/// The element stays in the tree and toggles a hidden modifier so layout
/// does not jump when a message appears.
#[component]
pub fn StatusMessage() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    let class = move || {
        status.with(|state| match state.current() {
            Some((_, StatusKind::Success)) => "status-message status-message--success",
            Some((_, StatusKind::Error)) => "status-message status-message--error",
            None => "status-message status-message--hidden",
        })
    };

    let text = move || {
        status.with(|state| {
            state
                .current()
                .map(|(message, _)| message.to_owned())
                .unwrap_or_default()
        })
    };

    view! { <div class=class>{text}</div> }
}
