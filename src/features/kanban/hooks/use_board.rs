use leptos::prelude::*;
use web_sys::DragEvent;
use crate::core::models::{Task, TaskStatus};
use crate::core::{BoardConfig, BoardState, ColumnConfig, StatusCounts};
use crate::features::kanban::services::{
    add_task, handle_drag_end, handle_drag_enter, handle_drag_leave, handle_drag_over,
    handle_drag_start, handle_drop, remove_task, update_task_status,
};

/// The board controller. Owns the reactive board state and exposes the
/// public mutation entry points plus the drag callbacks the board root binds.
///
/// Created once by whatever composes the page and passed down through
/// context; it is `Copy`, so components can capture it freely.
#[derive(Clone, Copy)]
pub struct BoardHandle {
    state: RwSignal<BoardState>,
    columns: StoredValue<Vec<ColumnConfig>>,
}

pub fn use_board(config: BoardConfig) -> BoardHandle {
    let BoardConfig { columns, seed_tasks, .. } = config;
    let task_count = seed_tasks.len();
    let state = RwSignal::new(BoardState::new(seed_tasks));

    web_sys::console::log_1(&format!("Kanban board initialized with {} tasks", task_count).into());

    BoardHandle {
        state,
        columns: StoredValue::new(columns),
    }
}

impl BoardHandle {
    pub fn columns(&self) -> Vec<ColumnConfig> {
        self.columns.get_value()
    }

    pub fn tasks_in(&self, status: TaskStatus) -> Vec<Task> {
        self.state.with(|board| board.tasks_in(status))
    }

    pub fn counts(&self) -> StatusCounts {
        self.state.with(|board| board.counts())
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.counts().get(status)
    }

    pub fn is_highlighted(&self, status: TaskStatus) -> bool {
        self.state.with(|board| board.is_highlighted(status))
    }

    pub fn is_dragging(&self, task_id: &str) -> bool {
        self.state.with(|board| board.is_dragging(task_id))
    }

    pub fn next_task_id(&self) -> String {
        self.state.with_untracked(|board| board.next_task_id())
    }

    pub fn add_task(&self, task: Task) {
        add_task(task, self.state);
    }

    pub fn remove_task(&self, task_id: impl Into<String>) {
        remove_task(task_id.into(), self.state);
    }

    pub fn update_status(&self, task_id: impl Into<String>, status: TaskStatus) {
        update_task_status(task_id.into(), status, self.state);
    }

    pub fn on_drag_start(&self, ev: DragEvent) {
        handle_drag_start(ev, self.state);
    }

    pub fn on_drag_over(&self, ev: DragEvent) {
        handle_drag_over(ev);
    }

    pub fn on_drag_enter(&self, ev: DragEvent) {
        handle_drag_enter(ev, self.state);
    }

    pub fn on_drag_leave(&self, ev: DragEvent) {
        handle_drag_leave(ev, self.state);
    }

    pub fn on_drop(&self, ev: DragEvent) {
        handle_drop(ev, self.state);
    }

    pub fn on_drag_end(&self, ev: DragEvent) {
        handle_drag_end(ev, self.state);
    }
}
