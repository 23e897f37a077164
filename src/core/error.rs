use thiserror::Error;

/// Reasons a drop is abandoned. None of these reach the user; the board
/// controller logs them and leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("drop target is not a recognized column: {0}")]
    UnknownColumn(String),
    #[error("no drag session is active")]
    NoActiveDrag,
    #[error("task {0} is not on the board")]
    TaskNotFound(String),
}
