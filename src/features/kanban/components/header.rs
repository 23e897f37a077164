use leptos::prelude::*;
use std::rc::Rc;
use crate::features::kanban::hooks::BoardHandle;

#[component]
pub fn KanbanHeader(
    #[prop(into)] title: String,
    on_open_modal: Rc<dyn Fn() + 'static>,
) -> impl IntoView {
    let board = use_context::<BoardHandle>().expect("BoardHandle context");

    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>{title}</h1>
                <span class="task-total">
                    {move || format!("{} tasks", board.counts().total())}
                </span>
            </div>
            <div class="kanban-actions">
                <button class="btn-primary kanban-header-btn" title="New task" on:click={
                    let cb = on_open_modal.clone();
                    move |_| (cb.as_ref())()
                }>"+"</button>
            </div>
        </header>
    }
}
