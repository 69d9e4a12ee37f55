//! Application services orchestrating the task board.

mod board;

pub use board::{BoardCommandError, BoardCommandResult, TaskBoard};
