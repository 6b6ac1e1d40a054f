//! Heat Selector Component
//!
//! Button group choosing one heat level.

use leptos::prelude::*;
use stirfry_core::Heat;

#[component]
pub fn HeatSelector(
    current: Signal<Option<Heat>>,
    on_change: impl Fn(Heat) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="heat-selector">
            {Heat::ALL.into_iter().map(|heat| {
                let is_selected = move || current.get() == Some(heat);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "heat-btn active" } else { "heat-btn" }
                        on:click=move |_| on_change(heat)
                    >
                        {heat.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
