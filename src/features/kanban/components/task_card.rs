use leptos::prelude::*;
use crate::core::models::Task;
use crate::features::kanban::hooks::BoardHandle;

// One draggable card. Text fields go through text nodes, never inner_html.
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let board = use_context::<BoardHandle>().expect("BoardHandle context");

    let Task { id, title, description, priority, status, assignee, initials } = task;
    let id_for_dragging = id.clone();
    let id_for_remove = id.clone();
    let id_attr = id.clone();

    view! {
        <article
            class="task-card"
            class:dragging=move || board.is_dragging(&id_for_dragging)
            draggable="true"
            data-task-id=id_attr
            data-status=status.as_str()
        >
            <div class="task-header">
                <h3 class="task-title">{title}</h3>
                <span class=priority.css_class()>{priority.as_str()}</span>
            </div>
            <p class="task-description">{description}</p>
            <div class="task-footer">
                <div class="task-assignee">
                    <div class="avatar">{initials}</div>
                    <span>{assignee}</span>
                </div>
                <span class="task-id">{id}</span>
                <button
                    class="task-action-btn delete-btn"
                    title="Remove task"
                    on:click=move |e| {
                        e.stop_propagation();
                        board.remove_task(id_for_remove.clone());
                    }
                >"🗑"</button>
            </div>
        </article>
    }
}
