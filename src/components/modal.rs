//! Modal Component
//!
//! Centered dialog over a backdrop. Clicking the backdrop closes it.

use leptos::prelude::*;

#[component]
pub fn Modal(
    open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] label: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal-content"
                    role="dialog"
                    aria-label=label.clone()
                    on:click=|ev| ev.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
