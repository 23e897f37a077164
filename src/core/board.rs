use std::collections::HashSet;

use crate::core::error::BoardError;
use crate::core::models::{Task, TaskStatus};

const TASK_ID_PREFIX: &str = "TASK-";

/// Drag session for a single card: `Idle -> Dragging -> Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging { task_id: String },
}

/// Number of tasks per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub todo: usize,
    pub progress: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::Progress => self.progress,
            TaskStatus::Done => self.done,
        }
    }

    pub fn total(&self) -> usize {
        self.todo + self.progress + self.done
    }
}

/// A status change applied by a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub task_id: String,
    pub from: TaskStatus,
    pub to: TaskStatus,
}

impl MoveOutcome {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// In-memory board: the task collection, the current drag session and the
/// columns highlighted as drop targets. Rendering is derived from this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    tasks: Vec<Task>,
    drag: DragSession,
    highlighted: HashSet<TaskStatus>,
}

impl BoardState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            drag: DragSession::Idle,
            highlighted: HashSet::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Cards for one column, in collection order.
    pub fn tasks_in(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect()
    }

    /// Full placement of every card, one entry per column.
    pub fn columns(&self) -> Vec<(TaskStatus, Vec<Task>)> {
        TaskStatus::all()
            .into_iter()
            .map(|status| (status, self.tasks_in(status)))
            .collect()
    }

    pub fn counts(&self) -> StatusCounts {
        self.tasks.iter().fold(StatusCounts::default(), |mut counts, task| {
            match task.status {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::Progress => counts.progress += 1,
                TaskStatus::Done => counts.done += 1,
            }
            counts
        })
    }

    /// Appends without checking for duplicate ids.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes the first task carrying `task_id`. Absent ids are a no-op.
    pub fn remove_task(&mut self, task_id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == task_id)?;
        Some(self.tasks.remove(index))
    }

    /// Sets the status of a task and returns the status it had before.
    pub fn update_status(&mut self, task_id: &str, status: TaskStatus) -> Result<TaskStatus, BoardError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))?;
        let previous = task.status;
        task.update_status(status);
        Ok(previous)
    }

    /// Next `TASK-NNN` id after the highest numbered one on the board. When
    /// the highest number is already `u64::MAX`, the lowest free number is used.
    pub fn next_task_id(&self) -> String {
        let taken: HashSet<u64> = self
            .tasks
            .iter()
            .filter_map(|t| t.id.strip_prefix(TASK_ID_PREFIX))
            .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
            .filter_map(|n| n.parse::<u64>().ok())
            .collect();
        let next = match taken.iter().max() {
            None => 1,
            Some(highest) => highest.checked_add(1).unwrap_or_else(|| {
                (1..=taken.len() as u64 + 1)
                    .find(|n| !taken.contains(n))
                    .unwrap_or(1)
            }),
        };
        format!("{}{:03}", TASK_ID_PREFIX, next)
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn dragged_task_id(&self) -> Option<&str> {
        match &self.drag {
            DragSession::Dragging { task_id } => Some(task_id.as_str()),
            DragSession::Idle => None,
        }
    }

    pub fn is_dragging(&self, task_id: &str) -> bool {
        self.dragged_task_id() == Some(task_id)
    }

    pub fn begin_drag(&mut self, task_id: impl Into<String>) {
        self.drag = DragSession::Dragging { task_id: task_id.into() };
    }

    /// Closes the drag session, dropped or cancelled, and clears every
    /// highlight in case a drag-leave never arrived.
    pub fn end_drag(&mut self) {
        self.drag = DragSession::Idle;
        self.highlighted.clear();
    }

    pub fn highlight(&mut self, status: TaskStatus) {
        self.highlighted.insert(status);
    }

    pub fn clear_highlight(&mut self, status: TaskStatus) {
        self.highlighted.remove(&status);
    }

    pub fn is_highlighted(&self, status: TaskStatus) -> bool {
        self.highlighted.contains(&status)
    }

    /// Moves the dragged task into `target`. On error nothing changes,
    /// including the target's highlight.
    pub fn drop_on(&mut self, target: TaskStatus) -> Result<MoveOutcome, BoardError> {
        let task_id = self
            .dragged_task_id()
            .ok_or(BoardError::NoActiveDrag)?
            .to_string();
        let from = self.update_status(&task_id, target)?;
        self.clear_highlight(target);
        Ok(MoveOutcome { task_id, from, to: target })
    }

    /// `drop_on` as the browser sees it. A card that changed column is
    /// re-created there, so the source node's dragend never bubbles back to
    /// the board root; the session is closed here instead. A same-column
    /// drop keeps the card node and waits for its dragend.
    pub fn complete_drop(&mut self, target: TaskStatus) -> Result<MoveOutcome, BoardError> {
        let outcome = self.drop_on(target)?;
        if outcome.changed() {
            self.end_drag();
        }
        Ok(outcome)
    }
}

/// Maps the `data-status` of a drop container to a column.
pub fn resolve_column(label: Option<&str>) -> Result<TaskStatus, BoardError> {
    let label = label.ok_or_else(|| BoardError::UnknownColumn(String::new()))?;
    label
        .parse()
        .map_err(|_| BoardError::UnknownColumn(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Priority;
    use proptest::prelude::*;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task::new(id, format!("Title {}", id), "", Priority::Medium, status, "Ana López", "AL")
    }

    fn two_task_board() -> BoardState {
        BoardState::new(vec![task("T1", TaskStatus::Todo), task("T2", TaskStatus::Done)])
    }

    fn counts(todo: usize, progress: usize, done: usize) -> StatusCounts {
        StatusCounts { todo, progress, done }
    }

    #[test]
    fn test_initial_counts() {
        let board = two_task_board();
        assert_eq!(board.counts(), counts(1, 0, 1));
        assert_eq!(board.drag(), &DragSession::Idle);
    }

    #[test]
    fn test_drop_moves_task_to_progress() {
        let mut board = two_task_board();
        board.begin_drag("T1");
        board.highlight(TaskStatus::Progress);

        let outcome = board.drop_on(TaskStatus::Progress).unwrap();
        assert_eq!(outcome.from, TaskStatus::Todo);
        assert_eq!(outcome.to, TaskStatus::Progress);
        assert!(outcome.changed());
        assert_eq!(board.task("T1").unwrap().status, TaskStatus::Progress);
        assert_eq!(board.task("T2").unwrap().status, TaskStatus::Done);
        assert_eq!(board.counts(), counts(0, 1, 1));
        assert!(!board.is_highlighted(TaskStatus::Progress));

        board.end_drag();
        assert_eq!(board.drag(), &DragSession::Idle);
    }

    #[test]
    fn test_add_task_after_move() {
        let mut board = two_task_board();
        board.begin_drag("T1");
        board.drop_on(TaskStatus::Progress).unwrap();
        board.end_drag();

        board.add_task(task("T3", TaskStatus::Todo));
        assert_eq!(board.counts(), counts(1, 1, 1));
        let todo_ids: Vec<String> = board.tasks_in(TaskStatus::Todo).into_iter().map(|t| t.id).collect();
        assert_eq!(todo_ids, vec!["T3".to_string()]);
    }

    #[test]
    fn test_drop_on_same_column_is_noop_move() {
        let mut board = two_task_board();
        let before = board.counts();
        board.begin_drag("T2");
        let outcome = board.drop_on(TaskStatus::Done).unwrap();
        assert!(!outcome.changed());
        assert_eq!(board.task("T2").unwrap().status, TaskStatus::Done);
        assert_eq!(board.counts(), before);
    }

    #[test]
    fn test_drop_without_drag_is_abandoned() {
        let mut board = two_task_board();
        board.highlight(TaskStatus::Progress);
        let before = board.clone();
        assert_eq!(board.drop_on(TaskStatus::Progress), Err(BoardError::NoActiveDrag));
        assert_eq!(board, before);
    }

    #[test]
    fn test_drop_of_unknown_task_is_abandoned() {
        let mut board = two_task_board();
        board.begin_drag("GHOST");
        board.highlight(TaskStatus::Done);
        let before = board.clone();
        assert_eq!(
            board.drop_on(TaskStatus::Done),
            Err(BoardError::TaskNotFound("GHOST".to_string()))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_cancelled_drag_changes_nothing() {
        let mut board = two_task_board();
        board.begin_drag("T1");
        board.highlight(TaskStatus::Todo);
        board.highlight(TaskStatus::Done);
        board.end_drag();

        assert_eq!(board.task("T1").unwrap().status, TaskStatus::Todo);
        assert_eq!(board.counts(), counts(1, 0, 1));
        for status in TaskStatus::all() {
            assert!(!board.is_highlighted(status));
        }
    }

    #[test]
    fn test_remove_missing_id_leaves_board_unchanged() {
        let mut board = two_task_board();
        let before = board.clone();
        assert_eq!(board.remove_task("NOPE"), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_remove_takes_first_match_only() {
        let mut board = two_task_board();
        board.add_task(task("T1", TaskStatus::Done));
        let removed = board.remove_task("T1").unwrap();
        assert_eq!(removed.status, TaskStatus::Todo);
        assert_eq!(board.tasks().len(), 2);
        assert_eq!(board.task("T1").unwrap().status, TaskStatus::Done);
    }

    #[test]
    fn test_update_status_reports_previous() {
        let mut board = two_task_board();
        assert_eq!(board.update_status("T2", TaskStatus::Todo), Ok(TaskStatus::Done));
        assert_eq!(board.counts(), counts(2, 0, 0));
        assert!(board.update_status("T9", TaskStatus::Todo).is_err());
    }

    #[test]
    fn test_columns_place_every_card_once() {
        let board = BoardState::new(vec![
            task("A", TaskStatus::Done),
            task("B", TaskStatus::Todo),
            task("C", TaskStatus::Done),
        ]);
        let columns = board.columns();
        assert_eq!(columns.len(), 3);
        let done: Vec<&str> = columns[2].1.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(columns[2].0, TaskStatus::Done);
        assert_eq!(done, vec!["A", "C"]);
        assert!(columns[1].1.is_empty());
    }

    #[test]
    fn test_next_task_id() {
        assert_eq!(BoardState::default().next_task_id(), "TASK-001");
        let board = BoardState::new(vec![
            task("TASK-004", TaskStatus::Todo),
            task("TASK-012", TaskStatus::Done),
            task("custom", TaskStatus::Done),
        ]);
        assert_eq!(board.next_task_id(), "TASK-013");
    }

    #[test]
    fn test_next_task_id_past_u32_range() {
        let board = BoardState::new(vec![task("TASK-4294967295", TaskStatus::Todo)]);
        assert_eq!(board.next_task_id(), "TASK-4294967296");
    }

    #[test]
    fn test_next_task_id_at_u64_max_takes_lowest_free() {
        let board = BoardState::new(vec![
            task("TASK-18446744073709551615", TaskStatus::Todo),
            task("TASK-001", TaskStatus::Done),
        ]);
        assert_eq!(board.next_task_id(), "TASK-002");
    }

    #[test]
    fn test_next_task_id_ignores_signed_suffixes() {
        let board = BoardState::new(vec![
            task("TASK-+041", TaskStatus::Todo),
            task("TASK--7", TaskStatus::Todo),
            task("TASK-", TaskStatus::Todo),
            task("TASK-003", TaskStatus::Done),
        ]);
        assert_eq!(board.next_task_id(), "TASK-004");
    }

    #[test]
    fn test_complete_drop_across_columns_closes_session() {
        let mut board = two_task_board();
        board.begin_drag("T1");
        board.highlight(TaskStatus::Progress);
        board.highlight(TaskStatus::Done);

        let outcome = board.complete_drop(TaskStatus::Progress).unwrap();
        assert!(outcome.changed());
        assert_eq!(board.drag(), &DragSession::Idle);
        for status in TaskStatus::all() {
            assert!(!board.is_highlighted(status));
        }
        assert_eq!(board.counts(), counts(0, 1, 1));
    }

    #[test]
    fn test_complete_drop_same_column_keeps_session() {
        let mut board = two_task_board();
        board.begin_drag("T2");
        board.highlight(TaskStatus::Done);
        board.highlight(TaskStatus::Todo);

        let outcome = board.complete_drop(TaskStatus::Done).unwrap();
        assert!(!outcome.changed());
        assert_eq!(board.drag(), &DragSession::Dragging { task_id: "T2".to_string() });
        assert!(!board.is_highlighted(TaskStatus::Done));
        assert!(board.is_highlighted(TaskStatus::Todo));

        board.end_drag();
        assert_eq!(board.drag(), &DragSession::Idle);
        assert!(!board.is_highlighted(TaskStatus::Todo));
    }

    #[test]
    fn test_complete_drop_failure_keeps_session() {
        let mut board = two_task_board();
        board.begin_drag("GHOST");
        let before = board.clone();
        assert!(board.complete_drop(TaskStatus::Done).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_resolve_column() {
        assert_eq!(resolve_column(Some("progress")), Ok(TaskStatus::Progress));
        assert_eq!(
            resolve_column(Some("archive")),
            Err(BoardError::UnknownColumn("archive".to_string()))
        );
        assert!(resolve_column(None).is_err());
    }

    fn status_strategy() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![
            Just(TaskStatus::Todo),
            Just(TaskStatus::Progress),
            Just(TaskStatus::Done),
        ]
    }

    fn board_strategy() -> impl Strategy<Value = BoardState> {
        proptest::collection::vec(status_strategy(), 0..20).prop_map(|statuses| {
            BoardState::new(
                statuses
                    .into_iter()
                    .enumerate()
                    .map(|(i, status)| task(&format!("TASK-{:03}", i + 1), status))
                    .collect(),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_counts_match_columns_after_drops(
            mut board in board_strategy(),
            moves in proptest::collection::vec((0..20usize, status_strategy()), 0..10)
        ) {
            for (index, target) in moves {
                if let Some(id) = board.tasks().get(index).map(|t| t.id.clone()) {
                    let before: Vec<(String, TaskStatus)> = board
                        .tasks()
                        .iter()
                        .map(|t| (t.id.clone(), t.status))
                        .collect();
                    board.begin_drag(id.clone());
                    let _ = board.drop_on(target);
                    board.end_drag();

                    for (i, (other_id, status)) in before.iter().enumerate() {
                        let after = &board.tasks()[i];
                        prop_assert_eq!(&after.id, other_id);
                        if i == index {
                            prop_assert_eq!(after.status, target);
                        } else {
                            prop_assert_eq!(after.status, *status);
                        }
                    }
                }
                let counts = board.counts();
                for (status, cards) in board.columns() {
                    prop_assert_eq!(counts.get(status), cards.len());
                }
                prop_assert_eq!(counts.total(), board.tasks().len());
            }
        }

        #[test]
        fn prop_add_then_remove_restores_board(
            mut board in board_strategy(),
            status in status_strategy()
        ) {
            let before = board.clone();
            let id = board.next_task_id();
            board.add_task(task(&id, status));
            prop_assert!(board.remove_task(&id).is_some());
            prop_assert_eq!(board.counts(), before.counts());
            prop_assert_eq!(board, before);
        }
    }
}
