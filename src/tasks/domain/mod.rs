//! Domain model for the task board.
//!
//! The task domain models the board's unit entity, its validated
//! construction inputs, the query parameters driving list retrieval, and
//! the pure board state machine, while keeping all infrastructure
//! concerns outside of the domain boundary.

mod board;
mod error;
mod ids;
mod query;
mod task;

pub use board::{BoardAction, BoardState};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use query::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT, TaskPage, TaskQuery};
pub use task::{MAX_TITLE_LENGTH, NewTask, Task, TaskPatch, TaskStatus};
