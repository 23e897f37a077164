pub mod board;
pub mod config;
pub mod error;
pub mod models;

pub use board::{BoardState, DragSession, MoveOutcome, StatusCounts};
pub use config::{BoardConfig, ColumnConfig};
pub use error::BoardError;
