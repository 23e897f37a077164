use leptos::prelude::*;
use crate::core::models::{Task, TaskStatus};
use crate::core::BoardState;

// Append a task; its card shows up in the matching column on the next render
pub fn add_task(task: Task, board_signal: RwSignal<BoardState>) {
    let task_id = task.id.clone();
    let status = task.status;

    board_signal.update(|board| {
        board.add_task(task);
    });

    web_sys::console::log_1(&format!("Task added: {} ({})", task_id, status).into());
}

// Remove the first task with this id. Unknown ids leave the board untouched
pub fn remove_task(task_id: String, board_signal: RwSignal<BoardState>) {
    let present = board_signal.with_untracked(|board| board.task(&task_id).is_some());
    if !present {
        web_sys::console::log_1(&format!("remove_task: {} is not on the board", task_id).into());
        return;
    }

    board_signal.update(|board| {
        board.remove_task(&task_id);
    });

    web_sys::console::log_1(&format!("Task removed: {}", task_id).into());
}

// Explicit status change outside of drag-and-drop
pub fn update_task_status(
    task_id: String,
    new_status: TaskStatus,
    board_signal: RwSignal<BoardState>,
) {
    match board_signal.try_update(|board| board.update_status(&task_id, new_status)) {
        Some(Ok(old_status)) => {
            web_sys::console::log_1(
                &format!("Task {} moved from {} to {}", task_id, old_status, new_status).into(),
            );
        }
        Some(Err(e)) => {
            web_sys::console::warn_1(&format!("update_task_status ignored: {}", e).into());
        }
        None => {}
    }
}
