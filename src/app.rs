//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::create::AccountCreatePage;
use crate::pages::edit::AccountEditPage;
use crate::pages::list::AccountListPage;
use crate::pages::view::AccountViewPage;

/// Root component: document title plus client-side routes.
///
/// Every route is pure view selection — there is no guard layer, and
/// mutations redirect back to the list when they succeed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Bank Accounts"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AccountListPage/>
                <Route path=(StaticSegment("bank"), StaticSegment("list")) view=AccountListPage/>
                <Route
                    path=(StaticSegment("bank"), StaticSegment("create"))
                    view=AccountCreatePage
                />
                <Route
                    path=(StaticSegment("bank"), StaticSegment("view"), ParamSegment("id"))
                    view=AccountViewPage
                />
                <Route
                    path=(StaticSegment("bank"), StaticSegment("edit"), ParamSegment("id"))
                    view=AccountEditPage
                />
            </Routes>
        </Router>
    }
}
