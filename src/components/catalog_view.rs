//! Catalog View Component
//!
//! Header, add button, card grid (or empty state), form modal and toasts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{CatalogStateStoreFields, LoadState};
use crate::components::{MonkeyCard, MonkeyFormModal, ToastStack};
use crate::context::use_catalog;
use crate::store::use_catalog_store;

#[component]
pub fn CatalogView() -> impl IntoView {
    let catalog = use_catalog();
    let store = use_catalog_store();

    // Load records on mount
    Effect::new(move |_| {
        log::debug!("[CATALOG] initial load");
        spawn_local(async move {
            catalog.load_records().await;
        });
    });

    view! {
        <div class="catalog">
            <header class="catalog-header">
                <h1>"🐒 Monkey Explorer"</h1>
                <p class="catalog-subtitle">
                    "Discover and learn about amazing primates from around the world"
                </p>
            </header>

            <div class="catalog-actions">
                <button class="primary-btn large" on:click=move |_| catalog.open_create_form()>
                    "+ Add New Monkey"
                </button>
            </div>

            <Show when=move || store.load_state().get() == LoadState::Loading>
                <p class="catalog-loading">"Loading..."</p>
            </Show>

            <Show
                when=move || store.with(|state| state.show_empty_state())
                fallback=move || view! {
                    <div class="card-grid">
                        <For
                            each=move || store.monkeys().get()
                            key=|monkey| monkey.clone()
                            children=move |monkey| view! { <MonkeyCard monkey=monkey /> }
                        />
                    </div>
                }
            >
                <div class="empty-state">
                    <div class="empty-glyph">"🐒"</div>
                    <h3>"No monkeys yet!"</h3>
                    <p>"Add your first monkey to get started"</p>
                </div>
            </Show>

            <MonkeyFormModal />
            <ToastStack />
        </div>
    }
}
