use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use crate::core::models::{Priority, Task, TaskStatus};
use crate::features::kanban::hooks::BoardHandle;

#[component]
pub fn TaskModal(
    #[prop(into)] on_create: Box<dyn Fn(Task) + 'static>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let board = use_context::<BoardHandle>().expect("BoardHandle context");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());
    let (assignee, set_assignee) = signal(String::new());
    let (initials, set_initials) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let assignee_name = assignee.get_untracked();
        let initials_text = match initials.get_untracked() {
            text if text.trim().is_empty() => Task::initials_for(&assignee_name),
            text => text,
        };

        // New tasks always start in the To Do column
        let task = Task::new(
            board.next_task_id(),
            title.get_untracked(),
            description.get_untracked(),
            priority.get_untracked(),
            TaskStatus::Todo,
            assignee_name,
            initials_text,
        );

        on_create(task);

        set_title.set(String::new());
        set_description.set(String::new());
        set_priority.set(Priority::default());
        set_assignee.set(String::new());
        set_initials.set(String::new());

        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"CREATE TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="Task title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Task description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"PRIORITY"</label>
                        <select
                            on:change=move |ev| {
                                if let Ok(p) = event_target_value(&ev).parse::<Priority>() {
                                    set_priority.set(p);
                                }
                            }
                            prop:value=move || priority.get().as_str()
                        >
                            {Priority::all()
                                .into_iter()
                                .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"ASSIGNEE"</label>
                        <input
                            type="text"
                            placeholder="Full name..."
                            on:input=move |ev| set_assignee.set(event_target_value(&ev))
                            prop:value=move || assignee.get()
                        />
                    </div>
                    <div class="form-group">
                        <label>"INITIALS"</label>
                        <input
                            type="text"
                            placeholder="Derived from the name when empty"
                            maxlength="3"
                            on:input=move |ev| set_initials.set(event_target_value(&ev))
                            prop:value=move || initials.get()
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"CREATE"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
