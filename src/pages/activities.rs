//! Activities page: fetch the catalog, render it, and keep the view in sync
//! with signup and removal actions.
//!
//! DESIGN
//! ======
//! Every mutating action re-fetches the whole catalog rather than patching
//! local state, so the rendered list is always derived from one server
//! snapshot. Refresh responses pass through a request token so a slow stale
//! response cannot overwrite a newer render; status messages pass through a
//! sequence token so an old auto-hide timer cannot blank a newer message.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::components::signup_form::SignupForm;
use crate::components::status_message::StatusMessage;
use crate::state::catalog::CatalogState;
use crate::state::status::StatusState;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::status::StatusKind;
#[cfg(feature = "hydrate")]
use crate::state::status::{REMOVAL_HIDE_DELAY, SIGNUP_HIDE_DELAY};

/// Confirmation prompt shown before a participant is removed.
#[cfg(any(test, feature = "hydrate"))]
fn removal_prompt(activity: &str, email: &str) -> String {
    format!("Remove {email} from {activity}?")
}

/// Status flavor plus whether to re-sync after a finished mutation.
///
/// A rejected mutation leaves the rendered list (and, for signups, the
/// form) exactly as it was so the user can correct and resubmit.
#[cfg(any(test, feature = "hydrate"))]
fn mutation_effects(result: &Result<String, String>) -> (StatusKind, bool) {
    match result {
        Ok(_) => (StatusKind::Success, true),
        Err(_) => (StatusKind::Error, false),
    }
}

/// Arm the auto-hide timer for the status message `token` was issued for.
/// The hide is a no-op if a newer message has replaced it by then.
#[cfg(feature = "hydrate")]
fn schedule_hide(status: RwSignal<StatusState>, token: u64, delay: std::time::Duration) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        status.update(|state| {
            state.hide_if_current(token);
        });
    });
}

/// Activities page — catalog list, signup form, and status area.
///
/// All three stay consistent with the most recently fetched snapshot: the
/// list and the select options are rebuilt from it wholesale on every
/// refresh.
#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let status = expect_context::<RwSignal<StatusState>>();

    // Form signals live here so a successful signup can reset the form
    // from the response handler.
    let email = RwSignal::new(String::new());
    let selected = RwSignal::new(String::new());

    let refresh = move || {
        #[cfg(feature = "hydrate")]
        {
            let mut token = 0;
            catalog.update(|state| token = state.begin_refresh());
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_activities().await {
                    Ok(snapshot) => catalog.update(|state| {
                        state.apply_catalog(token, snapshot);
                    }),
                    Err(message) => catalog.update(|state| {
                        state.apply_load_failure(token, message);
                    }),
                }
            });
        }
    };

    // Initial sync once the client is up. Effects do not run during SSR.
    Effect::new(move || refresh());

    let on_signup = Callback::new(move |(activity, address): (String, String)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::signup(&activity, &address).await;
            let (kind, resync) = mutation_effects(&result);
            let (Ok(text) | Err(text)) = result;
            let mut token = 0;
            status.update(|state| token = state.show(kind, text));
            if resync {
                // Full form reset: email cleared, select back to the
                // placeholder.
                email.set(String::new());
                selected.set(String::new());
                refresh();
            }
            schedule_hide(status, token, SIGNUP_HIDE_DELAY);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (activity, address);
    });

    // Per-card removal callback with the activity name bound in.
    let on_remove_for = move |activity_name: String| {
        Callback::new(move |address: String| {
            #[cfg(feature = "hydrate")]
            {
                let confirmed = web_sys::window().is_some_and(|window| {
                    window
                        .confirm_with_message(&removal_prompt(&activity_name, &address))
                        .unwrap_or(false)
                });
                if !confirmed {
                    return;
                }
                let activity_name = activity_name.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::remove_signup(&activity_name, &address).await;
                    let (kind, resync) = mutation_effects(&result);
                    let (Ok(text) | Err(text)) = result;
                    let mut token = 0;
                    status.update(|state| token = state.show(kind, text));
                    if resync {
                        refresh();
                    }
                    schedule_hide(status, token, REMOVAL_HIDE_DELAY);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&activity_name, address);
        })
    };

    let list_view = move || {
        catalog.with(|state| {
            if let Some(message) = state.load_error() {
                return view! { <p class="activities-page__error">{message.to_owned()}</p> }
                    .into_any();
            }
            match state.catalog() {
                None => view! { <p class="activities-page__loading">"Loading activities..."</p> }
                    .into_any(),
                Some(snapshot) => {
                    let cards = snapshot
                        .iter()
                        .map(|(name, activity)| {
                            view! {
                                <ActivityCard
                                    name=name.clone()
                                    activity=activity.clone()
                                    on_remove=on_remove_for(name.clone())
                                />
                            }
                        })
                        .collect::<Vec<_>>();
                    view! { <div class="activities-page__cards">{cards}</div> }.into_any()
                }
            }
        })
    };

    view! {
        <div class="activities-page">
            <header class="activities-page__header">
                <h1>"Extracurricular Activities"</h1>
            </header>

            <StatusMessage/>

            <section class="activities-page__list">
                <h3>"Available Activities"</h3>
                {list_view}
            </section>

            <section class="activities-page__signup">
                <h3>"Sign Up"</h3>
                <SignupForm email=email selected=selected on_submit=on_signup/>
            </section>
        </div>
    }
}
