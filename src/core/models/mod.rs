pub mod task;

pub use task::{Priority, Task, TaskStatus};
