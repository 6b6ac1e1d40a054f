//! Card Lane Component
//!
//! Horizontal list of cards for one `ListId`, with drop slots between
//! cards. Uses leptos-dragdrop; the drop itself is handled by the App.

use leptos::prelude::*;
use leptos_dragdrop::*;
use stirfry_core::{Card, ListId, TimelineEditor};

use crate::components::CardView;
use crate::store::{use_app_store, AppStateStoreFields};

/// (card, editing) per card. Keyed by content, not position, so an open
/// edit form survives cards being removed or inserted before it.
fn lane_entries(editor: &TimelineEditor, list: ListId) -> Vec<(Card, bool)> {
    editor
        .cards(list)
        .iter()
        .map(|card| (card.clone(), editor.is_editing(card.id)))
        .collect()
}

#[component]
pub fn CardLane(list: ListId, dnd: DndSignals<ListId>) -> impl IntoView {
    let store = use_app_store();

    let entries = move || lane_entries(&store.editor().read(), list);
    let is_empty = move || store.editor().read().cards(list).is_empty();

    view! {
        <div class="card-lane" data-list=list.as_str()>
            <DropSlot dnd=dnd list=list slot=Signal::stored(0) wide=Signal::derive(is_empty) />

            <For
                each=entries
                key=|entry| entry.clone()
                children=move |(card, editing)| {
                    // Position moves as other cards come and go
                    let id = card.id;
                    let index = Memo::new(move |_| {
                        store.editor().read().cards(list).iter().position(|c| c.id == id).unwrap_or(0)
                    });

                    let on_mousedown = move |ev: web_sys::MouseEvent| make_on_mousedown(dnd, list, index.get_untracked())(ev);
                    let on_mousemove = move |ev: web_sys::MouseEvent| make_on_card_mousemove(dnd, list, index.get_untracked())(ev);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    let card_class = move || {
                        let mut c = String::from("card-wrapper");
                        if dnd.is_dragging(list, index.get()) { c.push_str(" dragging"); }
                        c
                    };

                    view! {
                        <div
                            class=card_class
                            on:mousedown=on_mousedown
                            on:mousemove=on_mousemove
                            on:mouseleave=on_mouseleave
                        >
                            <CardView list=list card=card editing=editing />
                        </div>

                        <DropSlot dnd=dnd list=list slot=Signal::derive(move || index.get() + 1) wide=Signal::stored(false) />
                    }
                }
            />
        </div>
    }
}

/// Vertical bar between cards marking where a drop would land
#[component]
fn DropSlot(
    dnd: DndSignals<ListId>,
    list: ListId,
    slot: Signal<usize>,
    /// Fill the lane (shown when it has no cards)
    wide: Signal<bool>,
) -> impl IntoView {
    let on_mouseenter = move |ev: web_sys::MouseEvent| make_on_slot_mouseenter(dnd, list, slot.get_untracked())(ev);
    let on_mouseleave = make_on_mouseleave(dnd);

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if wide.get() { c.push_str(" wide"); }
        if dnd.is_active() { c.push_str(" visible"); }
        if dnd.is_drop_slot(list, slot.get()) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
