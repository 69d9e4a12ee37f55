//! Gateway port: the asynchronous boundary between board state and the
//! task store.

use crate::tasks::domain::{NewTask, Task, TaskId, TaskPage, TaskPatch, TaskQuery};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type TaskGatewayResult<T> = Result<T, TaskGatewayError>;

/// Query/mutation contract over a task store.
///
/// Implementations are pass-through boundaries: they validate nothing
/// further, forward each operation to the backing store, and surface the
/// store's own result or absence directly. No retries, no caching.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Returns the page of tasks matching the query, plus the total match
    /// count across all pages.
    ///
    /// Out-of-range pages yield an empty page, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Backend`] when the backing store
    /// rejects the operation.
    async fn list(&self, query: &TaskQuery) -> TaskGatewayResult<TaskPage>;

    /// Creates a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Backend`] when the backing store
    /// rejects the operation.
    async fn create(&self, input: NewTask) -> TaskGatewayResult<Task>;

    /// Merges the patch into the task with the given id.
    ///
    /// Returns `Ok(None)` when no such task exists; absence is a
    /// distinguished result, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Backend`] when the backing store
    /// rejects the operation.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskGatewayResult<Option<Task>>;

    /// Deletes the task with the given id.
    ///
    /// Returns `Ok(false)` when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Backend`] when the backing store
    /// rejects the operation.
    async fn delete(&self, id: TaskId) -> TaskGatewayResult<bool>;

    /// Looks up a single task by id.
    ///
    /// Returns `Ok(None)` when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Backend`] when the backing store
    /// rejects the operation.
    async fn find(&self, id: TaskId) -> TaskGatewayResult<Option<Task>>;
}

/// Errors surfaced by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskGatewayError {
    /// The backing store failed.
    #[error("task store error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskGatewayError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
