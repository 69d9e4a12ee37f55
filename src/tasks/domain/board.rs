//! Pure state machine for the task board.
//!
//! [`BoardState`] is the snapshot presentation consumers read;
//! [`BoardAction`] is the closed set of transitions. [`BoardState::apply`]
//! is total and side-effect free; every orchestration effect (fetching,
//! mutation calls) lives in the service layer.

use super::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT, Task, TaskId, TaskStatus};

/// Client-held board state.
///
/// `tasks` holds only the page-scoped slice returned by the last fetch,
/// in store order (most-recently-created first); the store owns the
/// canonical collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// Tasks on the current page.
    pub tasks: Vec<Task>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// User-presentable message from the last failed operation, if any.
    pub error: Option<String>,
    /// Current search text; empty means no search filter.
    pub search: String,
    /// Current status filter; `None` matches all statuses.
    pub status: Option<TaskStatus>,
    /// Current 1-based page.
    pub page: usize,
    /// Page size.
    pub limit: usize,
    /// Count of tasks matching the current filters across all pages.
    pub total: usize,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            loading: false,
            error: None,
            search: String::new(),
            status: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
            total: 0,
        }
    }
}

/// State transitions applicable to a [`BoardState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Marks a fetch as in flight or settled.
    SetLoading(bool),
    /// Replaces the error message; `None` clears it.
    SetError(Option<String>),
    /// Replaces the task page and total wholesale.
    SetTasks {
        /// Tasks for the current page.
        tasks: Vec<Task>,
        /// Match count across all pages.
        total: usize,
    },
    /// Replaces the search text and resets to the first page.
    SetSearch(String),
    /// Replaces the status filter and resets to the first page.
    SetStatus(Option<TaskStatus>),
    /// Moves to the given 1-based page.
    SetPage(usize),
    /// Prepends a freshly created task to the local page.
    AddTask(Task),
    /// Replaces the matching-id entry in place; no-op when absent.
    UpdateTask(Task),
    /// Removes the matching-id entry; no-op when absent.
    DeleteTask(TaskId),
}

impl BoardState {
    /// Applies an action, returning the successor state.
    ///
    /// Changing `search` or `status` forces `page` back to 1, since a
    /// filter change invalidates the previous page's meaning.
    #[must_use]
    pub fn apply(mut self, action: BoardAction) -> Self {
        match action {
            BoardAction::SetLoading(loading) => self.loading = loading,
            BoardAction::SetError(error) => self.error = error,
            BoardAction::SetTasks { tasks, total } => {
                self.tasks = tasks;
                self.total = total;
            }
            BoardAction::SetSearch(search) => {
                self.search = search;
                self.page = DEFAULT_PAGE;
            }
            BoardAction::SetStatus(status) => {
                self.status = status;
                self.page = DEFAULT_PAGE;
            }
            BoardAction::SetPage(page) => self.page = page,
            BoardAction::AddTask(task) => self.tasks.insert(0, task),
            BoardAction::UpdateTask(task) => {
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id() == task.id()) {
                    *slot = task;
                }
            }
            BoardAction::DeleteTask(id) => self.tasks.retain(|task| task.id() != id),
        }
        self
    }
}
