use leptos::prelude::*;
use crate::features::kanban::components::KanbanColumn;
use crate::features::kanban::hooks::BoardHandle;

// Drag listeners live here once and dispatch on the element that fired,
// so cards never need their own listeners rewired.
#[component]
pub fn KanbanBoard() -> impl IntoView {
    let board = use_context::<BoardHandle>().expect("BoardHandle context");

    view! {
        <div
            class="kanban-board"
            on:dragstart=move |ev| board.on_drag_start(ev)
            on:dragover=move |ev| board.on_drag_over(ev)
            on:dragenter=move |ev| board.on_drag_enter(ev)
            on:dragleave=move |ev| board.on_drag_leave(ev)
            on:drop=move |ev| board.on_drop(ev)
            on:dragend=move |ev| board.on_drag_end(ev)
        >
            {board
                .columns()
                .into_iter()
                .map(|column| view! { <KanbanColumn column=column /> })
                .collect_view()}
        </div>
    }
}
