//! Error types for task domain validation and parsing.

use thiserror::Error;

use super::task::MAX_TITLE_LENGTH;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the maximum length.
    #[error("task title must not exceed {max} characters, got {0}", max = MAX_TITLE_LENGTH)]
    TitleTooLong(usize),
}

/// Error returned while parsing task statuses from their wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
