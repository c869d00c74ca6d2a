//! Toast Stack Component
//!
//! Renders catalog notifications and expires each one after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{CatalogStateStoreFields, NotificationKind};
use crate::context::use_catalog;
use crate::store::use_catalog_store;

const TOAST_MILLIS: u32 = 3_000;

#[component]
pub fn ToastStack() -> impl IntoView {
    let catalog = use_catalog();
    let store = use_catalog_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.notifications().get()
                key=|notification| notification.id
                children=move |notification| {
                    let id = notification.id;
                    spawn_local(async move {
                        TimeoutFuture::new(TOAST_MILLIS).await;
                        catalog.dismiss_notification(id);
                    });

                    let class = match notification.kind {
                        NotificationKind::Success => "toast toast-success",
                        NotificationKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| catalog.dismiss_notification(id)>
                            {notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
