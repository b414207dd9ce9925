//! Edit screen — seeds the form from the backend, submits a full update.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::account_fields::AccountFields;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::state::form::FormState;
use crate::util::dialog;
use crate::util::lifetime::ScreenToken;

/// Edit screen. Fetches the record named by the route parameter and seeds
/// the form; submit sends a full replace (PUT). On success the server's
/// copy replaces the form and the user lands back on the list; on failure
/// the current, possibly edited values stay — no reversion.
#[component]
pub fn AccountEditPage() -> impl IntoView {
    let params = use_params_map();
    let form = RwSignal::new(FormState::default());
    let token = ScreenToken::for_screen();
    let navigate = use_navigate();

    let account_id = move || params.read().get("id").unwrap_or_default();

    // Seed the form from the backend whenever the route id changes.
    let seed_token = token.clone();
    Effect::new(move || {
        let id = account_id();
        if id.is_empty() {
            return;
        }
        let token = seed_token.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::fetch_account(&id).await;
            if token.is_cancelled() {
                return;
            }
            match outcome {
                Ok(record) => form.update(|f| f.seed(record)),
                Err(error) => dialog::alert(&error.to_string()),
            }
        });
    });

    let on_submit = move |_| {
        if !form.try_update(FormState::begin_submit).unwrap_or(false) {
            return;
        }
        let id = account_id();
        let record = form.with(|f| f.record.clone());
        let token = token.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::update_account(&id, &record).await;
            if token.is_cancelled() {
                return;
            }
            match outcome {
                Ok(resp) => {
                    form.update(|f| f.submit_succeeded(resp.bank));
                    dialog::alert(&resp.message);
                    navigate("/bank/list", NavigateOptions::default());
                }
                Err(error) => {
                    form.update(FormState::submit_failed);
                    dialog::alert(&error.to_string());
                }
            }
        });
    };

    view! {
        <div class="edit-page">
            <PageHeader/>
            <h3 class="edit-page__title">
                <a class="btn btn--back" href="/bank/list">
                    "Go Back"
                </a>
                " Edit Bank Account"
            </h3>
            <AccountFields form=form/>
            <button
                class="btn btn--primary"
                disabled=move || form.with(FormState::submitting)
                on:click=on_submit
            >
                "Update Bank Account"
            </button>
        </div>
    }
}
