//! Add Card Form Component
//!
//! Creates a new card in the pool.

use leptos::prelude::*;
use stirfry_core::CardDraft;

use crate::components::card_form_fields::{CardFormFields, DraftSignals};
use crate::store::{store_add_card, use_app_store};

#[component]
pub fn AddCardForm(
    /// Runs after a card was added
    #[prop(into)] on_added: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let fields = DraftSignals::new(CardDraft::default());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_add_card(&store, &fields.draft()) {
            Ok(_) => {
                fields.reset();
                set_error.set(None);
                on_added.run(());
            }
            Err(e) => set_error.set(Some(e.user_message())),
        }
    };

    view! {
        <form class="add-card-form" on:submit=submit>
            <CardFormFields fields=fields />
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" class="primary-btn">"添加"</button>
        </form>
    }
}
