//! Card Form Fields
//!
//! Inputs shared by the add-card form and the inline edit form.

use leptos::prelude::*;
use stirfry_core::{parse_ingredients, CardDraft, Heat, INGREDIENT_OPTIONS};

use crate::components::heat_selector::HeatSelector;

/// Reactive form state, one signal per field
#[derive(Clone, Copy)]
pub struct DraftSignals {
    pub action: RwSignal<String>,
    pub time: RwSignal<String>,
    pub heat: RwSignal<String>,
    pub ingredients: RwSignal<String>,
}

impl DraftSignals {
    pub fn new(draft: CardDraft) -> Self {
        Self {
            action: RwSignal::new(draft.action),
            time: RwSignal::new(draft.time),
            heat: RwSignal::new(draft.heat),
            ingredients: RwSignal::new(draft.ingredients),
        }
    }

    pub fn draft(&self) -> CardDraft {
        CardDraft {
            action: self.action.get_untracked(),
            time: self.time.get_untracked(),
            heat: self.heat.get_untracked(),
            ingredients: self.ingredients.get_untracked(),
        }
    }

    pub fn reset(&self) {
        self.action.set(String::new());
        self.time.set(String::new());
        self.heat.set(String::new());
        self.ingredients.set(String::new());
    }

    /// Add or remove one ingredient, keeping the others in order
    fn toggle_ingredient(&self, name: &str) {
        self.ingredients.update(|text| {
            let mut list = parse_ingredients(text);
            match list.iter().position(|i| i == name) {
                Some(pos) => {
                    list.remove(pos);
                }
                None => list.push(name.to_string()),
            }
            *text = list.join(", ");
        });
    }
}

/// Action, time, heat and ingredient inputs bound to `fields`
#[component]
pub fn CardFormFields(fields: DraftSignals) -> impl IntoView {
    let heat = Signal::derive(move || Heat::from_label(&fields.heat.get()));

    view! {
        <label class="form-row">
            <span>"动作:"</span>
            <input
                type="text"
                placeholder="动作"
                prop:value=move || fields.action.get()
                on:input=move |ev| fields.action.set(event_target_value(&ev))
            />
        </label>
        <label class="form-row">
            <span>"时间:"</span>
            <input
                type="text"
                inputmode="numeric"
                placeholder="时间"
                prop:value=move || fields.time.get()
                on:input=move |ev| fields.time.set(event_target_value(&ev))
            />
            <span>"分钟"</span>
        </label>
        <div class="form-row">
            <span>"火候:"</span>
            <HeatSelector
                current=heat
                on_change=move |h: Heat| fields.heat.set(h.label().to_string())
            />
        </div>
        <div class="form-row">
            <span>"菜品:"</span>
            <div class="ingredient-picker">
                {INGREDIENT_OPTIONS.iter().map(|name| {
                    let name = *name;
                    let is_selected = move || parse_ingredients(&fields.ingredients.get()).iter().any(|i| i == name);
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "chip-btn active" } else { "chip-btn" }
                            on:click=move |_| fields.toggle_ingredient(name)
                        >
                            {name}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
