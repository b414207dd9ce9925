//! Create screen — a blank form that posts a new record.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::account_fields::AccountFields;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::state::form::FormState;
use crate::util::dialog;
use crate::util::lifetime::ScreenToken;

/// Create screen. On success the server's copy of the record (with its
/// assigned id) replaces the form, the server's message is surfaced, and
/// the user lands back on the list. Failure leaves the form untouched —
/// nothing was persisted, so there is nothing to roll back.
#[component]
pub fn AccountCreatePage() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let token = ScreenToken::for_screen();
    let navigate = use_navigate();

    let on_submit = move |_| {
        // At most one outstanding submit per screen.
        if !form.try_update(FormState::begin_submit).unwrap_or(false) {
            return;
        }
        let record = form.with(|f| f.record.clone());
        let token = token.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::create_account(&record).await;
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
        <div class="create-page">
            <PageHeader/>
            <h3 class="create-page__title">
                <a class="btn btn--back" href="/bank/list">
                    "Go Back"
                </a>
                " Add Bank Account"
            </h3>
            <AccountFields form=form/>
            <button
                class="btn btn--primary"
                disabled=move || form.with(FormState::submitting)
                on:click=on_submit
            >
                "Create Bank Account"
            </button>
        </div>
    }
}
