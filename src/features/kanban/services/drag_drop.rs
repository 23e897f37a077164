use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element};
use crate::core::board::resolve_column;
use crate::core::models::TaskStatus;
use crate::core::BoardState;

pub const CARD_CLASS: &str = "task-card";
pub const COLUMN_CLASS: &str = "tasks-container";
pub const DRAG_EFFECT: &str = "move";

// All five drag callbacks are attached once on the board root. The element
// that originated the event decides what it means: a card or a column.

fn event_element(ev: &DragEvent) -> Option<Element> {
    ev.target().and_then(|target| target.dyn_into::<Element>().ok())
}

fn closest(ev: &DragEvent, class: &str) -> Option<Element> {
    event_element(ev)?.closest(&format!(".{}", class)).ok().flatten()
}

// The column the event happened in, if any
fn target_column(ev: &DragEvent) -> Option<String> {
    closest(ev, COLUMN_CLASS).and_then(|column| column.get_attribute("data-status"))
}

// Only the column element itself, not the cards inside it
fn column_itself(ev: &DragEvent) -> Option<TaskStatus> {
    let element = event_element(ev)?;
    if !element.class_list().contains(COLUMN_CLASS) {
        return None;
    }
    resolve_column(element.get_attribute("data-status").as_deref()).ok()
}

pub fn handle_drag_start(ev: DragEvent, board_signal: RwSignal<BoardState>) {
    let Some(task_id) = closest(&ev, CARD_CLASS).and_then(|card| card.get_attribute("data-task-id")) else {
        return;
    };

    if let Some(data_transfer) = ev.data_transfer() {
        data_transfer.set_effect_allowed(DRAG_EFFECT);
        // Some browsers refuse to start the drag without a payload
        let _ = data_transfer.set_data("text/plain", &task_id);
    }

    board_signal.update(|board| board.begin_drag(task_id));
}

pub fn handle_drag_over(ev: DragEvent) {
    if target_column(&ev).is_none() {
        return;
    }
    // Without this the browser never fires drop
    ev.prevent_default();
    if let Some(data_transfer) = ev.data_transfer() {
        data_transfer.set_drop_effect(DRAG_EFFECT);
    }
}

pub fn handle_drag_enter(ev: DragEvent, board_signal: RwSignal<BoardState>) {
    if let Some(status) = column_itself(&ev) {
        board_signal.update(|board| board.highlight(status));
    }
}

pub fn handle_drag_leave(ev: DragEvent, board_signal: RwSignal<BoardState>) {
    if let Some(status) = column_itself(&ev) {
        board_signal.update(|board| board.clear_highlight(status));
    }
}

pub fn handle_drop(ev: DragEvent, board_signal: RwSignal<BoardState>) {
    ev.prevent_default();
    ev.stop_propagation();

    let target = match resolve_column(target_column(&ev).as_deref()) {
        Ok(status) => status,
        Err(e) => {
            web_sys::console::warn_1(&format!("Drop ignored: {}", e).into());
            return;
        }
    };

    let outcome = board_signal.try_update(|board| board.complete_drop(target));

    match outcome {
        Some(Ok(moved)) => {
            web_sys::console::log_1(&format!("Task {} moved to {}", moved.task_id, moved.to).into());
        }
        Some(Err(e)) => {
            web_sys::console::warn_1(&format!("Drop ignored: {}", e).into());
        }
        None => {}
    }
}

pub fn handle_drag_end(ev: DragEvent, board_signal: RwSignal<BoardState>) {
    if closest(&ev, CARD_CLASS).is_none() {
        return;
    }
    board_signal.update(|board| board.end_drag());
}
