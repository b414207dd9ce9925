//! View screen — read-only rendering of one record.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::account_fields::AccountDetails;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::util::dialog;

/// View screen. Fetches the record named by the route parameter on mount
/// and renders each field as plain text. No mutation affordances. A
/// missing record surfaces the generic error instead of partial data.
#[component]
pub fn AccountViewPage() -> impl IntoView {
    let params = use_params_map();

    let account = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move { api::fetch_account(&id).await }
    });

    Effect::new(move || {
        if let Some(Err(error)) = account.get() {
            dialog::alert(&error.to_string());
        }
    });

    view! {
        <div class="view-page">
            <PageHeader/>
            <h3 class="view-page__title">
                <a class="btn btn--back" href="/bank/list">
                    "Go Back"
                </a>
                " View Bank Account"
            </h3>
            <Suspense fallback=move || {
                view! { <p>"Loading account..."</p> }
            }>
                {move || {
                    account
                        .get()
                        .map(|outcome| match outcome {
                            Ok(record) => view! { <AccountDetails record=record/> }.into_any(),
                            Err(_) => {
                                view! { <p class="view-page__error">"No Data Found"</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
