//! Top banner with navigation, shown on every screen.

use leptos::prelude::*;

/// App banner with links to the list and create screens.
#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <a class="page-header__brand" href="/bank/list">
                "Bank Accounts"
            </a>
            <nav class="page-header__nav">
                <a class="page-header__link" href="/bank/list">
                    "List Accounts"
                </a>
                <a class="page-header__link" href="/bank/create">
                    "Add Account"
                </a>
            </nav>
        </header>
    }
}
