//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for Leptos, keyed by a caller-defined drop zone
//! (kanban columns, lists, ...). A movement threshold distinguishes a click
//! from a drag, so cards stay clickable.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Id of the dragged card
pub type DragId = u64;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
pub struct DndSignals<Z: 'static> {
    pub dragging_id_read: ReadSignal<Option<DragId>>,
    pub dragging_id_write: WriteSignal<Option<DragId>>,
    /// Zone currently under the pointer while dragging
    pub drag_over_read: ReadSignal<Option<Z>>,
    pub drag_over_write: WriteSignal<Option<Z>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<DragId>>,
    pub pending_id_write: WriteSignal<Option<DragId>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl<Z: 'static> Clone for DndSignals<Z> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Z: 'static> Copy for DndSignals<Z> {}

pub fn create_dnd_signals<Z>() -> DndSignals<Z>
where
    Z: Clone + Send + Sync + 'static,
{
    let (dragging_id_read, dragging_id_write) = signal(None::<DragId>);
    let (drag_over_read, drag_over_write) = signal(None::<Z>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<DragId>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drag_over_read,
        drag_over_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

/// True once the pointer has travelled far enough from the mousedown point
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag<Z>(dnd: &DndSignals<Z>)
where
    Z: Clone + Send + Sync + 'static,
{
    dnd.dragging_id_write.set(None);
    dnd.drag_over_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    // Swallow the click that follows the mouseup of a drag
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            let _ = clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_mousedown<Z>(dnd: DndSignals<Z>, card_id: DragId) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Z: Clone + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Form controls inside a card keep their own mouse handling
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
        }
        dnd.pending_id_write.set(Some(card_id));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for a drop zone
pub fn make_on_zone_mouseenter<Z>(dnd: DndSignals<Z>, zone: Z) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Z: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drag_over_write.set(Some(zone.clone()));
        }
    }
}

/// Create mouseleave handler for a drop zone
pub fn make_on_mouseleave<Z>(dnd: DndSignals<Z>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Z: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drag_over_write.set(None);
        }
    }
}

/// What a mouseup means for the current gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Release<Z> {
    /// No drag was in progress; the following click belongs to the card
    Click,
    /// A drag ended outside every zone
    Cancel,
    /// A drag ended over a zone
    Drop(DragId, Z),
}

pub fn classify_release<Z>(dragging: Option<DragId>, drag_over: Option<Z>) -> Release<Z> {
    match (dragging, drag_over) {
        (None, _) => Release::Click,
        (Some(_), None) => Release::Cancel,
        (Some(id), Some(zone)) => Release::Drop(id, zone),
    }
}

/// Bind global mousemove and mouseup handlers for drag detection and drops
///
/// `on_drop` receives the dragged card and the zone it was released over.
/// The listeners belong to the calling view and are removed when it is cleaned up.
pub fn bind_global_mouseup<Z, F>(dnd: DndSignals<Z>, on_drop: F)
where
    Z: Clone + Send + Sync + 'static,
    F: Fn(DragId, Z) + 'static,
{
    let mousemove = window_event_listener(leptos::ev::mousemove, move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_id_read.try_get_untracked() else { return; };
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start = dnd.start_read.get_untracked();
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    let mouseup = window_event_listener(leptos::ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let Some(dragging_id) = dnd.dragging_id_read.try_get_untracked() else { return; };
        let drag_over = dnd.drag_over_read.get_untracked();

        match classify_release(dragging_id, drag_over) {
            Release::Click => {
                dnd.pending_id_write.set(None);
                dnd.drag_over_write.set(None);
            }
            Release::Cancel => end_drag(&dnd),
            Release::Drop(dragged, zone) => {
                end_drag(&dnd);
                on_drop(dragged, zone);
            }
        }
    });

    on_cleanup(move || {
        mousemove.remove();
        mouseup.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_click_is_not_a_drag() {
        assert_eq!(classify_release::<u8>(None, None), Release::Click);
        assert_eq!(classify_release(None, Some(2u8)), Release::Click);
    }

    #[test]
    fn test_release_after_drag() {
        assert_eq!(classify_release::<u8>(Some(7), None), Release::Cancel);
        assert_eq!(classify_release(Some(7), Some(3u8)), Release::Drop(7, 3));
    }

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }
}
