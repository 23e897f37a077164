use crate::core::models::{Task, TaskStatus};

const SEED_TASKS_JSON: &str = include_str!("../../assets/seed_tasks.json");

/// One drop-target column on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConfig {
    pub status: TaskStatus,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub title: String,
    pub columns: Vec<ColumnConfig>,
    pub seed_tasks: Vec<Task>,
}

impl BoardConfig {
    /// Board with the standard three columns and the given starting tasks.
    pub fn with_tasks(seed_tasks: Vec<Task>) -> Self {
        Self {
            title: "Kanban Board".to_string(),
            columns: TaskStatus::all()
                .into_iter()
                .map(|status| ColumnConfig {
                    status,
                    title: status.title().to_string(),
                })
                .collect(),
            seed_tasks,
        }
    }

    /// Standard columns seeded from the bundled sample tasks. A seed that
    /// fails to parse is logged and the board starts empty.
    pub fn load() -> Self {
        let seed_tasks = match parse_seed_tasks(SEED_TASKS_JSON) {
            Ok(tasks) => tasks,
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load seed tasks: {}", e).into());
                Vec::new()
            }
        };
        Self::with_tasks(seed_tasks)
    }
}

pub fn parse_seed_tasks(json: &str) -> Result<Vec<Task>, String> {
    serde_json::from_str::<Vec<Task>>(json).map_err(|e| format!("Invalid seed task list: {}", e))
}
