//! Leptos DragDrop Utilities
//!
//! Mouse-driven reordering of a flat list for Leptos.
//! Uses movement threshold to distinguish click from drag, and only reports a
//! drop when the pointer is released over a valid target.

mod state;

pub use state::{resolve_destination, DragState, DropTarget, Reorder, DRAG_THRESHOLD_PX};

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state: RwSignal<DragState>,
}

impl DndSignals {
    pub fn dragging_source(&self) -> Option<usize> {
        self.state.with(|s| s.dragging_source())
    }

    pub fn hover_target(&self) -> Option<DropTarget> {
        self.state.with(|s| s.hover_target())
    }

    pub fn is_dragging(&self) -> bool {
        self.state.with(|s| s.is_dragging())
    }
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        state: RwSignal::new(DragState::Idle),
    }
}

/// End drag operation, returning the reorder if the drop landed on a target
pub fn end_drag(dnd: &DndSignals) -> Option<Reorder> {
    let (next, reorder) = dnd.state.get_untracked().release();
    dnd.state.set(next);
    reorder
}

/// Abandon the drag without producing a reorder
pub fn cancel_drag(dnd: &DndSignals) {
    if dnd.state.get_untracked() != DragState::Idle {
        dnd.state.set(DragState::Idle);
    }
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        ev.prevent_default();
        dnd.state.set(DragState::press(index, ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for cards
pub fn make_on_card_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.state.get_untracked().is_dragging() {
            dnd.state.update(|s| *s = s.enter(DropTarget::Card(index)));
        }
    }
}

/// Create mouseenter handler for gaps between cards
pub fn make_on_slot_mouseenter(dnd: DndSignals, gap: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.state.get_untracked().is_dragging() {
            dnd.state.update(|s| *s = s.enter(DropTarget::Slot(gap)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.state.get_untracked().hover_target().is_some() {
            dnd.state.update(|s| *s = s.leave());
        }
    }
}

/// Bind window-level mousemove/mouseup/keydown handlers for the owning component.
///
/// `on_drop` runs once per completed drag. Cancelled drags (released outside
/// any target, or aborted with Escape) never reach it. Listeners are removed
/// when the calling component is cleaned up.
pub fn bind_global_handlers<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(Reorder) + 'static,
{
    let on_mousemove = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        if let DragState::Pressed { .. } = dnd.state.get_untracked() {
            let next = dnd.state.get_untracked().pointer_moved(ev.client_x(), ev.client_y());
            if next.is_dragging() {
                dnd.state.set(next);
            }
        }
    });

    let on_mouseup = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        if dnd.state.get_untracked() == DragState::Idle {
            return;
        }
        if let Some(reorder) = end_drag(&dnd) {
            on_drop(reorder);
        }
    });

    let on_keydown = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            cancel_drag(&dnd);
        }
    });

    on_cleanup(move || {
        on_mousemove.remove();
        on_mouseup.remove();
        on_keydown.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging_over(target: DropTarget) -> DndSignals {
        let dnd = create_dnd_signals();
        dnd.state.set(DragState::Dragging { source: 0, over: Some(target) });
        dnd
    }

    #[test]
    fn test_escape_cancel_drops_pending_reorder() {
        let dnd = dragging_over(DropTarget::Card(2));
        cancel_drag(&dnd);
        assert_eq!(dnd.state.get_untracked(), DragState::Idle);
        // The mouseup that follows must not reorder anything
        assert_eq!(end_drag(&dnd), None);
    }

    #[test]
    fn test_end_drag_over_target_reorders() {
        let dnd = dragging_over(DropTarget::Slot(3));
        assert_eq!(end_drag(&dnd), Some(Reorder { from: 0, to: 2 }));
        assert_eq!(dnd.state.get_untracked(), DragState::Idle);
    }
}
