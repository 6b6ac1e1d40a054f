//! Card View Component
//!
//! One action card, either read-only or as an inline edit form.

use leptos::prelude::*;
use stirfry_core::{Card, CardDraft, ListId};

use crate::components::card_form_fields::{CardFormFields, DraftSignals};
use crate::components::DeleteConfirmButton;
use crate::store::{store_delete_card, store_edit_card, store_toggle_edit, use_app_store};

#[component]
pub fn CardView(list: ListId, card: Card, editing: bool) -> impl IntoView {
    if editing {
        view! { <CardEditForm list=list card=card /> }.into_any()
    } else {
        view! { <CardDisplay list=list card=card /> }.into_any()
    }
}

#[component]
fn CardDisplay(list: ListId, card: Card) -> impl IntoView {
    let store = use_app_store();
    let id = card.id;

    view! {
        <div class="card">
            <h2 class="card-action">"动作: " {card.action}</h2>
            <p>"时间: " {card.minutes} " 分钟"</p>
            <p>"火候: " {card.heat.label()}</p>
            <ul class="card-ingredients">
                "菜品:"
                {card.ingredients.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
            </ul>
            <div class="card-actions">
                <button type="button" class="edit-btn" on:click=move |_| store_toggle_edit(&store, list, id)>
                    "编辑"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=move |_| store_delete_card(&store, list, id)
                />
            </div>
        </div>
    }
}

#[component]
fn CardEditForm(list: ListId, card: Card) -> impl IntoView {
    let store = use_app_store();
    let id = card.id;
    let fields = DraftSignals::new(CardDraft::from_card(&card));
    let (error, set_error) = signal(None::<String>);

    let save = move |_| {
        if let Err(e) = store_edit_card(&store, list, id, &fields.draft()) {
            set_error.set(Some(e.user_message()));
        }
    };

    view! {
        <div class="card editing">
            <CardFormFields fields=fields />
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <div class="card-actions">
                <button type="button" class="primary-btn" on:click=save>"保存"</button>
                <button type="button" class="cancel-btn" on:click=move |_| store_toggle_edit(&store, list, id)>
                    "取消"
                </button>
            </div>
        </div>
    }
}
