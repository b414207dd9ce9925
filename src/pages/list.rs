//! List screen — the landing table of every account on record.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::net::types::BankAccount;
use crate::util::dialog;
use crate::util::lifetime::ScreenToken;

/// Account list with view/edit/delete actions per row.
///
/// Fetches the full collection on mount. Delete asks for confirmation,
/// surfaces the server's message, then re-fetches the whole list rather
/// than removing the row locally, so the table always mirrors the backend.
#[component]
pub fn AccountListPage() -> impl IntoView {
    let accounts = LocalResource::new(|| api::fetch_accounts());
    let token = ScreenToken::for_screen();

    // One generic notification for a failed fetch; the table falls back to
    // its empty row.
    Effect::new(move || {
        if let Some(Err(error)) = accounts.get() {
            dialog::alert(&error.to_string());
        }
    });

    let on_delete = Callback::new(move |id: String| {
        if !dialog::confirm("Are you sure to delete?") {
            return;
        }
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::delete_account(&id).await;
            if token.is_cancelled() {
                return;
            }
            match outcome {
                Ok(resp) => {
                    dialog::alert(&resp.message);
                    accounts.refetch();
                }
                Err(error) => dialog::alert(&error.to_string()),
            }
        });
    });

    view! {
        <div class="list-page">
            <PageHeader/>
            <h3 class="list-page__title">"List of Bank Accounts"</h3>
            <table class="account-table">
                <thead>
                    <tr>
                        <th scope="col">"Account Number"</th>
                        <th scope="col">"Holder Name"</th>
                        <th scope="col">"Phone Number"</th>
                        <th scope="col">"Account Type"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <Suspense fallback=move || {
                        view! {
                            <tr>
                                <td colspan="5">"Loading accounts..."</td>
                            </tr>
                        }
                    }>
                        {move || {
                            accounts
                                .get()
                                .map(|outcome| {
                                    let rows = outcome.unwrap_or_default();
                                    if rows.is_empty() {
                                        view! {
                                            <tr class="account-table__empty">
                                                <td colspan="5">"No Data Found"</td>
                                            </tr>
                                        }
                                            .into_any()
                                    } else {
                                        rows.into_iter()
                                            .map(|account| {
                                                view! { <AccountRow account=account on_delete=on_delete/> }
                                            })
                                            .collect::<Vec<_>>()
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </tbody>
            </table>
        </div>
    }
}

/// One table row with its view/edit/delete actions.
#[component]
fn AccountRow(account: BankAccount, on_delete: Callback<String>) -> impl IntoView {
    let id = account.id.clone();
    let view_href = format!("/bank/view/{}", account.id);
    let edit_href = format!("/bank/edit/{}", account.id);

    view! {
        <tr>
            <th scope="row">{account.id}</th>
            <td>{account.holder_name}</td>
            <td>{account.phone_no}</td>
            <td>{account.account_type}</td>
            <td class="account-table__actions">
                <a class="btn btn--view" href=view_href>
                    "View"
                </a>
                <a class="btn btn--edit" href=edit_href>
                    "Edit"
                </a>
                <button class="btn btn--delete" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
