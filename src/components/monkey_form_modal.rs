//! Monkey Form Modal Component
//!
//! Add/edit form shown over the catalog. All values live in the catalog
//! store so opening an edit pre-populates every field.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{CatalogStateStoreFields, FormErrors, Modal, MonkeyForm};
use crate::context::use_catalog;
use crate::models::ConservationStatus;
use crate::store::use_catalog_store;

/// Single-line text field bound to one form value
#[component]
fn TextField(
    label: &'static str,
    placeholder: &'static str,
    read: fn(&MonkeyForm) -> String,
    write: fn(&mut MonkeyForm, String),
    #[prop(optional)] required: bool,
    #[prop(optional)] error: Option<fn(&FormErrors) -> Option<&'static str>>,
) -> impl IntoView {
    let catalog = use_catalog();
    let store = use_catalog_store();

    view! {
        <label class="form-field">
            <span class="form-label">
                {label}
                {required.then(|| view! { <span class="form-required">" *"</span> })}
            </span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || store.form().with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    catalog.update_form(move |form| write(form, value));
                }
            />
            {move || {
                error
                    .and_then(|message_for| store.form_errors().with(message_for))
                    .map(|message| view! { <span class="form-error">{message}</span> })
            }}
        </label>
    }
}

#[component]
pub fn MonkeyFormModal() -> impl IntoView {
    let catalog = use_catalog();
    let store = use_catalog_store();

    let is_editing = move || store.modal().with(|modal| modal.editing().is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            catalog.submit_form().await;
        });
    };

    view! {
        <Show when=move || store.modal().with(Modal::is_open)>
            <div class="modal-backdrop" on:click=move |_| catalog.close_form()>
                <div
                    class="modal"
                    tabindex="0"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=move |ev| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            catalog.close_form();
                        }
                    }
                >
                    <div class="modal-header">
                        <h2>{move || if is_editing() { "Edit Monkey" } else { "Add New Monkey" }}</h2>
                        <button class="modal-close" title="Close" on:click=move |_| catalog.close_form()>
                            "✕"
                        </button>
                    </div>

                    <form class="monkey-form" on:submit=on_submit>
                        <TextField
                            label="Name"
                            placeholder="e.g., Curious George"
                            required=true
                            read=|form| form.name.clone()
                            write=|form, value| form.name = value
                            error=|errors: &FormErrors| errors.name
                        />
                        <TextField
                            label="Species"
                            placeholder="e.g., Capuchin Monkey"
                            required=true
                            read=|form| form.species.clone()
                            write=|form, value| form.species = value
                            error=|errors: &FormErrors| errors.species
                        />
                        <TextField
                            label="Habitat"
                            placeholder="e.g., Central American rainforests"
                            read=|form| form.habitat.clone()
                            write=|form, value| form.habitat = value
                        />

                        <label class="form-field">
                            <span class="form-label">"Conservation Status"</span>
                            <select
                                prop:value=move || store.form().with(|form| form.conservation_status.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    catalog.update_form(move |form| form.conservation_status = value);
                                }
                            >
                                <option value="">"Select conservation status"</option>
                                {ConservationStatus::ALL.iter().map(|status| {
                                    let value = status.as_str();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || store.form().with(|form| form.conservation_status == value)
                                        >
                                            {value}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </label>

                        <TextField
                            label="Image URL"
                            placeholder="https://example.com/monkey-image.jpg"
                            read=|form| form.image_url.clone()
                            write=|form, value| form.image_url = value
                        />

                        <label class="form-field">
                            <span class="form-label">"Fun Fact"</span>
                            <textarea
                                rows="3"
                                placeholder="Share an interesting fact about this monkey..."
                                prop:value=move || store.form().with(|form| form.fun_fact.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    catalog.update_form(move |form| form.fun_fact = value);
                                }
                            ></textarea>
                        </label>

                        <label class="form-check">
                            <input
                                type="checkbox"
                                prop:checked=move || store.form().with(|form| form.is_favorite)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    catalog.update_form(move |form| form.is_favorite = checked);
                                }
                            />
                            <span>"Mark as favorite"</span>
                        </label>

                        <div class="form-actions">
                            <button type="button" class="secondary-btn" on:click=move |_| catalog.close_form()>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn">
                                {move || if is_editing() { "Update Monkey" } else { "Add Monkey" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
