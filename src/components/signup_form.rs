//! Signup form: email field plus an activity selector fed by the catalog.
//!
//! DESIGN
//! ======
//! The option list is derived reactively from the latest catalog snapshot,
//! so every refresh rebuilds it wholesale and repeated refreshes can never
//! accumulate duplicate options. The email and selection signals are owned
//! by the page, which resets both after a successful signup.

use leptos::prelude::*;

use crate::state::catalog::CatalogState;

/// Signup form emitting `(activity, email)` on submit.
///
/// Submitting with either field blank is a no-op; actual validation is the
/// server's job.
#[component]
pub fn SignupForm(
    email: RwSignal<String>,
    selected: RwSignal<String>,
    on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let activity_names = move || {
        catalog.with(|state| {
            state
                .catalog()
                .map(|snapshot| snapshot.names().map(str::to_owned).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let activity = selected.get().trim().to_owned();
        let address = email.get().trim().to_owned();
        if activity.is_empty() || address.is_empty() {
            return;
        }
        on_submit.run((activity, address));
    };

    view! {
        <form class="signup-form" on:submit=submit>
            <label class="signup-form__label">
                "Email"
                <input
                    class="signup-form__input"
                    type="email"
                    placeholder="you@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="signup-form__label">
                "Activity"
                <select
                    class="signup-form__select"
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="" disabled>
                        "-- Select an activity --"
                    </option>
                    {move || {
                        activity_names()
                            .into_iter()
                            .map(|name| {
                                let label = name.clone();
                                view! { <option value=name>{label}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <button class="signup-form__submit" type="submit">
                "Sign Up"
            </button>
        </form>
    }
}
