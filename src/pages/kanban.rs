use leptos::prelude::*;
use leptos::html::Dialog;
use std::rc::Rc;
use crate::core::models::Task;
use crate::features::kanban::{BoardHandle, KanbanBoard, KanbanHeader, TaskModal};

#[component]
pub fn Kanban(#[prop(into)] title: String) -> impl IntoView {
    let board = use_context::<BoardHandle>().expect("BoardHandle context");

    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    // show_modal() blocks interaction with the rest of the page until closed
    let open_modal: Rc<dyn Fn()> = Rc::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    let create_task = Box::new(move |task: Task| {
        board.add_task(task);
    }) as Box<dyn Fn(Task) + 'static>;

    view! {
        <div class="kanban-page">
            <div class="main-content">
                <KanbanHeader title=title on_open_modal=open_modal />
                <KanbanBoard />
            </div>
            <TaskModal on_create=create_task dialog_ref=dialog_ref />
        </div>
    }
}
