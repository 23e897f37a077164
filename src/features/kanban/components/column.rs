use leptos::prelude::*;
use crate::core::ColumnConfig;
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::hooks::BoardHandle;

#[component]
pub fn KanbanColumn(column: ColumnConfig) -> impl IntoView {
    let board = use_context::<BoardHandle>().expect("BoardHandle context");
    let status = column.status;

    view! {
        <section class="kanban-column">
            <div class="column-header">
                <h2>{column.title}</h2>
                <span class="task-count" data-count=status.as_str()>
                    {move || board.count(status)}
                </span>
            </div>
            <div
                class="tasks-container"
                class:drag-over=move || board.is_highlighted(status)
                data-status=status.as_str()
            >
                <For
                    each=move || board.tasks_in(status)
                    key=|task| task.id.clone()
                    children=|task| view! { <TaskCard task=task /> }
                />
            </div>
        </section>
    }
}
