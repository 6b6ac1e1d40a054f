//! Log Panel Component
//!
//! Collapsible view of the recent lines kept by the rolling logger.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    // Snapshot on open and on refresh; the buffer itself is not reactive
    let refresh = move || set_lines.set(rolling_logger::recent_lines());

    let on_toggle = move |_| {
        if !open.get_untracked() {
            refresh();
        }
        set_open.update(|o| *o = !*o);
    };

    view! {
        <section class="log-panel">
            <button type="button" class="secondary-btn" on:click=on_toggle>
                {move || if open.get() { "隐藏日志" } else { "查看日志" }}
            </button>
            <Show when=move || open.get()>
                <button type="button" class="secondary-btn" on:click=move |_| refresh()>
                    "刷新"
                </button>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </Show>
        </section>
    }
}
