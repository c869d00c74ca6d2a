//! Monkey Explorer Frontend App
//!
//! Root component: provides the catalog context and renders the page.

use leptos::prelude::*;

use crate::components::{AccountShell, CatalogView};
use crate::context::provide_catalog;

#[component]
pub fn App() -> impl IntoView {
    provide_catalog();

    view! {
        <AccountShell>
            <CatalogView />
        </AccountShell>
    }
}
