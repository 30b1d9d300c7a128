//! Kanban Board Component
//!
//! Single-column board with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit slot zones between cards.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskCard};
use crate::context::use_app_context;
use crate::store::{store_move_task, SessionStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_app_context().store;

    // Create DnD signals
    let dnd = create_dnd_signals();

    // A drop outside any card or slot never gets here, so the board is left as is
    bind_global_handlers(dnd, move |reorder: Reorder| {
        log::debug!("[DND] Drop: from={}, to={}", reorder.from, reorder.to);
        store_move_task(&store, reorder.from, reorder.to);
    });

    let cards = move || {
        store.tasks().with(|tasks| tasks.iter().cloned().enumerate().collect::<Vec<_>>())
    };

    let column_class = move || {
        if dnd.is_dragging() { "kanban-column drag-active" } else { "kanban-column" }
    };

    view! {
        <section class="view kanban-view">
            <NewTaskForm />

            <div class=column_class>
                <Show when=move || store.tasks().with(|t| t.is_empty())>
                    <p class="empty-board">"No tasks yet"</p>
                </Show>

                // Slot before the first card
                <SlotZone dnd=dnd gap=0 />

                <For
                    each=cards
                    // Index is part of the key so handlers are rebuilt after a move
                    key=|(index, task)| (*index, task.id)
                    children=move |(index, task)| {
                        let on_mousedown = make_on_mousedown(dnd, index);
                        let on_mouseenter = make_on_card_mouseenter(dnd, index);
                        let on_mouseleave = make_on_mouseleave(dnd);

                        // Visual state
                        let is_dragging = move || dnd.dragging_source() == Some(index);
                        let is_drop_target = move || dnd.hover_target() == Some(DropTarget::Card(index));

                        let card_class = move || {
                            let mut c = String::from("kanban-card-wrapper");
                            if is_dragging() { c.push_str(" dragging"); }
                            if is_drop_target() { c.push_str(" drop-target"); }
                            c
                        };

                        view! {
                            <div
                                class=card_class
                                on:mousedown=on_mousedown
                                on:mouseenter=on_mouseenter
                                on:mouseleave=on_mouseleave
                            >
                                <TaskCard task=task />
                            </div>

                            // Slot after this card
                            <SlotZone dnd=dnd gap=index + 1 />
                        }
                    }
                />
            </div>

            <p class="item-count">{move || format!("{} tasks", store.tasks().with(|t| t.len()))}</p>
        </section>
    }
}

/// Slot zone - a horizontal gap that accepts a dropped card
#[component]
pub fn SlotZone(dnd: DndSignals, gap: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, gap);
    let on_mouseleave = make_on_mouseleave(dnd);

    let zone_class = move || {
        let mut c = String::from("slot-zone");
        if !dnd.is_dragging() { c.push_str(" hidden"); }
        if dnd.hover_target() == Some(DropTarget::Slot(gap)) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
