//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Every UI callback (add, delete, edit, toggle edit, drag end) lands in
//! one of the helpers below and performs a single synchronous transition.

use leptos::prelude::*;
use reactive_stores::Store;
use stirfry_core::{CardDraft, CardId, DomainResult, DragEvent, DragOutcome, ListId, TimelineEditor};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Pool, timeline and edit modes
    pub editor: TimelineEditor,
    /// Pretty JSON of the last saved recipe
    pub recipe_json: Option<String>,
    /// Why the last save failed
    pub export_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// New cards always start in the pool
pub fn store_add_card(store: &AppStore, draft: &CardDraft) -> DomainResult<CardId> {
    store.editor().write().add_draft(ListId::Pool, draft)
}

pub fn store_delete_card(store: &AppStore, list: ListId, id: CardId) {
    store.editor().write().delete(list, id);
}

pub fn store_edit_card(store: &AppStore, list: ListId, id: CardId, draft: &CardDraft) -> DomainResult<bool> {
    store.editor().write().edit_draft(list, id, draft)
}

pub fn store_toggle_edit(store: &AppStore, list: ListId, id: CardId) {
    store.editor().write().toggle_edit(list, id);
}

pub fn store_drag_end(store: &AppStore, event: &DragEvent) -> DragOutcome {
    let outcome = store.editor().write().drag_end(event);
    log::debug!("[DND] {:?} -> {:?}", event, outcome);
    outcome
}

/// Serialize the timeline for display. Nothing is persisted.
pub fn store_save_recipe(store: &AppStore) {
    let result = store
        .editor()
        .read()
        .export_recipe()
        .and_then(|recipe| Ok(recipe.to_json()?));
    match result {
        Ok(json) => {
            rolling_logger::info(&format!("recipe saved, {} bytes", json.len()));
            store.recipe_json().set(Some(json));
            store.export_error().set(None);
        }
        Err(e) => {
            rolling_logger::error(&format!("recipe not saved: {}", e));
            store.recipe_json().set(None);
            store.export_error().set(Some(e.user_message()));
        }
    }
}
