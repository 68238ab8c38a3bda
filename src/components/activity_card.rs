//! Card component for a single activity in the catalog list.
//!
//! DESIGN
//! ======
//! Cards are plain data views: the page rebuilds them from each catalog
//! snapshot, so a card never holds state of its own. Participant text goes
//! through text nodes only, so markup characters in an email render
//! literally.

use leptos::prelude::*;

use crate::net::types::Activity;

/// One activity card: name, description, schedule, occupancy, and the
/// participant list with per-participant remove buttons.
#[component]
pub fn ActivityCard(
    name: String,
    activity: Activity,
    /// Called with the participant's email when their remove button is
    /// clicked.
    on_remove: Callback<String>,
) -> impl IntoView {
    let spots = activity.spots_label();
    let Activity {
        description,
        schedule,
        participants,
        ..
    } = activity;

    view! {
        <div class="activity-card">
            <h4 class="activity-card__title">{name}</h4>
            <p class="activity-card__description">{description}</p>
            <p class="activity-card__schedule">
                <strong>"Schedule: "</strong>
                {schedule}
            </p>
            <p class="activity-card__spots">
                <strong>"Spots: "</strong>
                {spots}
            </p>
            <div class="participants">
                <h5 class="participants__title">"Participants"</h5>
                {if participants.is_empty() {
                    view! { <p class="participants__empty">"No participants yet"</p> }.into_any()
                } else {
                    view! {
                        <ul class="participants__list">
                            {participants
                                .into_iter()
                                .map(|email| {
                                    let label = email.clone();
                                    view! {
                                        <li class="participants__entry">
                                            <span class="participants__email">{label}</span>
                                            <button
                                                class="participants__remove"
                                                title="Remove participant"
                                                aria-label="Remove participant"
                                                on:click=move |_| on_remove.run(email.clone())
                                            >
                                                "✕"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
