//! Monkey Card Component
//!
//! One record in the catalog grid, with favorite/edit/remove actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_catalog;
use crate::models::{conservation_color, Monkey};

/// Glyph shown when a record has no usable image
pub const PLACEHOLDER_GLYPH: &str = "🐒";

/// Image to show on the card, or `None` for the placeholder
pub fn card_image(monkey: &Monkey) -> Option<String> {
    monkey
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

#[component]
pub fn MonkeyCard(monkey: Monkey) -> impl IntoView {
    let catalog = use_catalog();
    let (image_failed, set_image_failed) = signal(false);

    let id = monkey.id;
    let image = card_image(&monkey);
    let alt = monkey.name.clone();
    let favorite_target = monkey.clone();
    let edit_target = monkey.clone();

    let on_remove = Callback::new(move |_: ()| {
        spawn_local(async move {
            catalog.remove_record(id).await;
        });
    });

    let status_tag = monkey.conservation_status.clone().map(|status| {
        let class = format!("tag tag-{}", conservation_color(&status).as_str());
        view! { <span class=class>{status}</span> }
    });

    view! {
        <div class="monkey-card">
            <div class="card-cover">
                {move || match (image.clone(), image_failed.get()) {
                    (Some(url), false) => view! {
                        <img
                            src=url
                            alt=alt.clone()
                            on:error=move |_| set_image_failed.set(true)
                        />
                    }.into_any(),
                    _ => view! { <div class="card-placeholder">{PLACEHOLDER_GLYPH}</div> }.into_any(),
                }}
            </div>

            <div class="card-body">
                <div class="card-title">
                    <span class="card-name">{monkey.name.clone()}</span>
                    {monkey.is_favorite.then(|| view! { <span class="heart filled">"♥"</span> })}
                </div>
                <div class="card-species">{monkey.species.clone()}</div>
                {monkey.habitat.clone().map(|habitat| view! {
                    <div class="card-habitat">
                        <span class="card-label">"Habitat: "</span>
                        {habitat}
                    </div>
                })}
                {status_tag}
                {monkey.fun_fact.clone().map(|fact| view! {
                    <p class="card-fact">"💡 " {fact}</p>
                })}
            </div>

            <div class="card-actions">
                <button
                    class=if monkey.is_favorite { "card-action favorite active" } else { "card-action favorite" }
                    title="Toggle favorite"
                    on:click=move |_| {
                        let target = favorite_target.clone();
                        spawn_local(async move {
                            catalog.toggle_favorite(&target).await;
                        });
                    }
                >
                    {if monkey.is_favorite { "♥" } else { "♡" }}
                </button>
                <button
                    class="card-action"
                    title="Edit"
                    on:click=move |_| catalog.open_edit_form(&edit_target)
                >
                    "✎"
                </button>
                <DeleteConfirmButton button_class="card-action danger" on_confirm=on_remove />
            </div>
        </div>
    }
}
