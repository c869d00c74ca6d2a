//! Account Shell Component
//!
//! Page frame around the catalog. Account and billing gating is handled
//! outside this app; the shell only lays out its child.

use leptos::prelude::*;

#[component]
pub fn AccountShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <main class="app-main">{children()}</main>
        </div>
    }
}
