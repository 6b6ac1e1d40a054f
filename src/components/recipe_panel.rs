//! Recipe Panel Component
//!
//! Total timeline duration, the save button and the exported recipe.

use leptos::prelude::*;

use crate::store::{store_save_recipe, use_app_store, AppStateStoreFields};

#[component]
pub fn RecipePanel() -> impl IntoView {
    let store = use_app_store();

    // Recomputed from the timeline on every change, never stored
    let total_minutes = move || store.editor().read().total_timeline_minutes();

    view! {
        <section class="recipe-panel">
            <p class="total-time">"总时间: " {total_minutes} " 分钟"</p>
            <button type="button" class="primary-btn" on:click=move |_| store_save_recipe(&store)>
                "保存菜谱"
            </button>
            {move || store.export_error().get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            {move || store.recipe_json().get().map(|json| view! { <pre class="recipe-export">{json}</pre> })}
        </section>
    }
}
