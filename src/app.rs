//! Stir-Fry Timeline App
//!
//! Main application component: add-card modal, pool lane, timeline lane
//! and the recipe panel.

use leptos::prelude::*;
use leptos_dragdrop::*;
use reactive_stores::Store;
use stirfry_core::{DragEvent, DragLocation, ListId};

use crate::components::{AddCardForm, CardLane, LogPanel, Modal, RecipePanel};
use crate::store::{store_drag_end, AppState};

/// Translate a finished mouse drag into a reconciler event
fn to_drag_event(source: DragSource<ListId>, target: Option<DropTarget<ListId>>) -> DragEvent {
    let from = DragLocation::new(source.lane, source.index);
    match target {
        Some(target) => DragEvent::new(from, DragLocation::new(target.lane, resolve_drop_index(&source, &target))),
        None => DragEvent::cancelled(from),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (modal_open, set_modal_open) = signal(false);

    // One DnD context shared by both lanes
    let dnd = create_dnd_signals::<ListId>();
    bind_global_mouseup(dnd, move |source, target| {
        store_drag_end(&store, &to_drag_event(source, target));
    });

    view! {
        <div class="container" class:dragging=move || dnd.is_active()>
            <header class="page-header">
                <h1>"编辑炒菜"</h1>
                <button type="button" class="primary-btn" on:click=move |_| set_modal_open.set(true)>
                    "Add New Card"
                </button>
            </header>

            <Modal
                open=modal_open
                on_close=move |_| set_modal_open.set(false)
                label="Add Card Modal"
            >
                <AddCardForm on_added=move |_| set_modal_open.set(false) />
            </Modal>

            <h2 class="lane-title">{ListId::Pool.label()}</h2>
            <CardLane list=ListId::Pool dnd=dnd />

            <h2 class="lane-title">{ListId::Timeline.label()} ":"</h2>
            <CardLane list=ListId::Timeline dnd=dnd />

            <RecipePanel />
            <LogPanel />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_when_no_target() {
        let source = DragSource { lane: ListId::Pool, index: 2 };
        let event = to_drag_event(source, None);
        assert_eq!(event.destination, None);
        assert_eq!(event.source, DragLocation::new(ListId::Pool, 2));
    }

    #[test]
    fn test_same_lane_slot_resolved_after_removal() {
        // Timeline [A, B]: drag A onto the slot after B
        let source = DragSource { lane: ListId::Timeline, index: 0 };
        let target = DropTarget { lane: ListId::Timeline, slot: 2 };
        let event = to_drag_event(source, Some(target));
        assert_eq!(event.destination, Some(DragLocation::new(ListId::Timeline, 1)));
    }

    #[test]
    fn test_cross_lane_slot_unchanged() {
        let source = DragSource { lane: ListId::Pool, index: 0 };
        let target = DropTarget { lane: ListId::Timeline, slot: 3 };
        let event = to_drag_event(source, Some(target));
        assert_eq!(event.destination, Some(DragLocation::new(ListId::Timeline, 3)));
    }
}
