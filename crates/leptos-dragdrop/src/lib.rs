//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop between horizontal lanes using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! A lane is any small copyable key (an enum of list names, say). Cards
//! sit at indices `0..len`; drop slots sit between them at `0..=len`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Key identifying a lane
pub trait Lane: Copy + PartialEq + Send + Sync + 'static {}

impl<T: Copy + PartialEq + Send + Sync + 'static> Lane for T {}

/// Where a drag started
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSource<L> {
    pub lane: L,
    pub index: usize,
}

/// A slot between cards: 0 is before the first card, `len` after the last
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropTarget<L> {
    pub lane: L,
    pub slot: usize,
}

/// Index to insert at once the dragged card has left its lane.
///
/// Slots are counted in the list as rendered. For a drop back into the
/// source lane every slot past the source shifts left by one.
pub fn resolve_drop_index<L: PartialEq>(source: &DragSource<L>, target: &DropTarget<L>) -> usize {
    if source.lane == target.lane && target.slot > source.index {
        target.slot - 1
    } else {
        target.slot
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<L: Lane> {
    pub dragging_read: ReadSignal<Option<DragSource<L>>>,
    pub dragging_write: WriteSignal<Option<DragSource<L>>>,
    pub drop_target_read: ReadSignal<Option<DropTarget<L>>>,
    pub drop_target_write: WriteSignal<Option<DropTarget<L>>>,
    /// Pending source (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragSource<L>>>,
    pub pending_write: WriteSignal<Option<DragSource<L>>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<L: Lane> DndSignals<L> {
    /// Is this card the one being dragged
    pub fn is_dragging(&self, lane: L, index: usize) -> bool {
        self.dragging_read.get() == Some(DragSource { lane, index })
    }

    /// Is anything being dragged at all
    pub fn is_active(&self) -> bool {
        self.dragging_read.get().is_some()
    }

    pub fn is_drop_slot(&self, lane: L, slot: usize) -> bool {
        self.drop_target_read.get() == Some(DropTarget { lane, slot })
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<L: Lane>() -> DndSignals<L> {
    let (dragging_read, dragging_write) = signal(None::<DragSource<L>>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget<L>>);
    let (pending_read, pending_write) = signal(None::<DragSource<L>>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<L: Lane>(dnd: &DndSignals<L>) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Form controls keep their own mouse behaviour
fn is_form_control(target: &web_sys::EventTarget) -> bool {
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
}

/// Create mousedown handler for a draggable card
/// Records pending drag with start position
pub fn make_on_mousedown<L: Lane>(dnd: DndSignals<L>, lane: L, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if ev.target().is_some_and(|t| is_form_control(&t)) {
            return;
        }
        dnd.pending_write.set(Some(DragSource { lane, index }));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Bind mousemove on document - starts drag if moved enough
fn bind_global_mousemove<L: Lane>(dnd: DndSignals<L>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mousemove handler for a card: pointer on the left half targets
/// the slot before it, right half the slot after it
pub fn make_on_card_mousemove<L: Lane>(dnd: DndSignals<L>, lane: L, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_none() {
            return;
        }
        let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let midpoint = rect.left() + rect.width() / 2.0;
        let slot = if f64::from(ev.client_x()) < midpoint { index } else { index + 1 };
        let target = Some(DropTarget { lane, slot });
        if dnd.drop_target_read.get_untracked() != target {
            dnd.drop_target_write.set(target);
        }
    }
}

/// Create mouseenter handler for drop slots
pub fn make_on_slot_mouseenter<L: Lane>(dnd: DndSignals<L>, lane: L, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget { lane, slot }));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<L: Lane>(dnd: DndSignals<L>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` runs only for real drags (not clicks), with `None` as the
/// target when the card was released outside every lane.
pub fn bind_global_mouseup<L, F>(dnd: DndSignals<L>, on_drop: F)
where
    L: Lane,
    F: Fn(DragSource<L>, Option<DropTarget<L>>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);
        if let Some(source) = dragging {
            on_drop(source, drop_target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
