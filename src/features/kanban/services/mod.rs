pub mod drag_drop;
pub mod task_operations;

pub use drag_drop::*;
pub use task_operations::*;
