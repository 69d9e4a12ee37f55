//! Board controller: owns the board state and mediates gateway calls.

use std::sync::Arc;

use thiserror::Error;

use crate::tasks::{
    domain::{BoardAction, BoardState, NewTask, Task, TaskId, TaskPatch, TaskQuery, TaskStatus},
    ports::TaskGateway,
};

/// User-presentable message recorded when a fetch fails.
const FETCH_FAILED: &str = "Failed to fetch tasks";
/// User-presentable message recorded when creation fails.
const CREATE_FAILED: &str = "Failed to create task";
/// User-presentable message recorded when an update target is missing.
const TASK_NOT_FOUND: &str = "Task not found";
/// User-presentable message recorded when an update fails.
const UPDATE_FAILED: &str = "Failed to update task";
/// User-presentable message recorded when a delete fails.
const DELETE_FAILED: &str = "Failed to delete task";

/// Tagged failure re-signalled to mutation callers.
///
/// Callers branch on the variant instead of inspecting thrown values;
/// the underlying gateway cause is reduced to the user-presentable
/// message already recorded in [`BoardState::error`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardCommandError {
    /// Task creation failed.
    #[error("Failed to create task")]
    CreateFailed,

    /// The update target does not exist.
    #[error("Task not found")]
    NotFound,

    /// Task update failed for a reason other than absence.
    #[error("Failed to update task")]
    UpdateFailed,
}

/// Result type for board mutation commands.
pub type BoardCommandResult<T> = Result<T, BoardCommandError>;

/// The dependency set whose change triggers a refetch.
type QueryParams = (usize, usize, Option<TaskStatus>, String);

/// Board controller exposed to presentation consumers.
///
/// Owns a [`BoardState`] snapshot, applies actions through the pure
/// reducer, and issues gateway calls for fetches and mutations. The
/// controller's `&mut self` methods serialize its own operations;
/// consumers running fetches concurrently against a shared gateway get
/// no completion-ordering guarantee (the last response to settle wins),
/// an accepted property of this design rather than a defect to patch
/// with cancellation tokens.
pub struct TaskBoard<G>
where
    G: TaskGateway,
{
    state: BoardState,
    gateway: Arc<G>,
}

impl<G> TaskBoard<G>
where
    G: TaskGateway,
{
    /// Creates a board with default state over the given gateway.
    ///
    /// The board starts unfetched; call [`TaskBoard::refetch`] (or any
    /// query command) to populate it.
    #[must_use]
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            state: BoardState::default(),
            gateway,
        }
    }

    /// Returns a read-only snapshot of the current board state.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Applies an action to the board state without any fetch side
    /// effect.
    pub fn dispatch(&mut self, action: BoardAction) {
        self.state = std::mem::take(&mut self.state).apply(action);
    }

    /// Snapshot of `{page, limit, status, search}` for change detection.
    fn query_params(&self) -> QueryParams {
        (
            self.state.page,
            self.state.limit,
            self.state.status,
            self.state.search.clone(),
        )
    }

    /// Applies an action and refetches when the query dependency set
    /// changed.
    async fn dispatch_and_sync(&mut self, action: BoardAction) {
        let before = self.query_params();
        self.dispatch(action);
        if self.query_params() != before {
            self.refetch().await;
        }
    }

    /// Replaces the search text, resetting to the first page, and
    /// refetches when the query changed.
    pub async fn set_search(&mut self, search: impl Into<String>) {
        self.dispatch_and_sync(BoardAction::SetSearch(search.into()))
            .await;
    }

    /// Replaces the status filter, resetting to the first page, and
    /// refetches when the query changed.
    pub async fn set_status(&mut self, status: Option<TaskStatus>) {
        self.dispatch_and_sync(BoardAction::SetStatus(status)).await;
    }

    /// Moves to the given 1-based page and refetches when the query
    /// changed.
    pub async fn set_page(&mut self, page: usize) {
        self.dispatch_and_sync(BoardAction::SetPage(page)).await;
    }

    /// Builds the gateway query from the current state.
    ///
    /// Search text that is empty after trimming is treated as no search
    /// filter.
    fn current_query(&self) -> TaskQuery {
        let search = self.state.search.trim();
        TaskQuery {
            page: self.state.page,
            limit: self.state.limit,
            status: self.state.status,
            search: (!search.is_empty()).then(|| self.state.search.clone()),
        }
    }

    /// Fetches the current page from the gateway.
    ///
    /// Sets `loading` for the duration of the call and clears any prior
    /// error up front. On success the page replaces `tasks` and `total`
    /// wholesale; on failure a generic message lands in `error` and the
    /// previous page contents are left in place. Never raises to the
    /// caller.
    pub async fn refetch(&mut self) {
        self.dispatch(BoardAction::SetLoading(true));
        self.dispatch(BoardAction::SetError(None));

        let query = self.current_query();
        match self.gateway.list(&query).await {
            Ok(page) => self.dispatch(BoardAction::SetTasks {
                tasks: page.data,
                total: page.total,
            }),
            Err(err) => {
                tracing::warn!(error = %err, "task fetch failed");
                self.dispatch(BoardAction::SetError(Some(FETCH_FAILED.to_owned())));
            }
        }

        self.dispatch(BoardAction::SetLoading(false));
    }

    /// Creates a task through the gateway and prepends it to the local
    /// page.
    ///
    /// Returns the created task so callers (a form submission) can
    /// navigate or confirm.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCommandError::CreateFailed`] when the gateway
    /// rejects the creation; the same message is recorded in
    /// [`BoardState::error`].
    pub async fn create(&mut self, input: NewTask) -> BoardCommandResult<Task> {
        match self.gateway.create(input).await {
            Ok(task) => {
                self.dispatch(BoardAction::AddTask(task.clone()));
                Ok(task)
            }
            Err(err) => {
                tracing::warn!(error = %err, "task creation failed");
                self.dispatch(BoardAction::SetError(Some(CREATE_FAILED.to_owned())));
                Err(BoardCommandError::CreateFailed)
            }
        }
    }

    /// Updates a task through the gateway and patches the local entry in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCommandError::NotFound`] when no task has the given
    /// id, or [`BoardCommandError::UpdateFailed`] on any other gateway
    /// failure; the matching message is recorded in
    /// [`BoardState::error`].
    pub async fn update(&mut self, id: TaskId, patch: TaskPatch) -> BoardCommandResult<Task> {
        match self.gateway.update(id, patch).await {
            Ok(Some(task)) => {
                self.dispatch(BoardAction::UpdateTask(task.clone()));
                Ok(task)
            }
            Ok(None) => {
                self.dispatch(BoardAction::SetError(Some(TASK_NOT_FOUND.to_owned())));
                Err(BoardCommandError::NotFound)
            }
            Err(err) => {
                tracing::warn!(error = %err, "task update failed");
                self.dispatch(BoardAction::SetError(Some(UPDATE_FAILED.to_owned())));
                Err(BoardCommandError::UpdateFailed)
            }
        }
    }

    /// Deletes a task through the gateway, removing the local entry only
    /// on reported success.
    ///
    /// Failures (including a missing id) are recorded in
    /// [`BoardState::error`] and otherwise swallowed; unlike create and
    /// update, delete never re-signals the caller.
    pub async fn delete(&mut self, id: TaskId) {
        match self.gateway.delete(id).await {
            Ok(true) => self.dispatch(BoardAction::DeleteTask(id)),
            Ok(false) => {
                self.dispatch(BoardAction::SetError(Some(DELETE_FAILED.to_owned())));
            }
            Err(err) => {
                tracing::warn!(error = %err, "task deletion failed");
                self.dispatch(BoardAction::SetError(Some(DELETE_FAILED.to_owned())));
            }
        }
    }
}
