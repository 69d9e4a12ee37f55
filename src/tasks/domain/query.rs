//! Query parameters and paged results for task list retrieval.

use super::{Task, TaskStatus};

/// Default first page for a fresh query.
pub const DEFAULT_PAGE: usize = 1;

/// Default number of tasks per page.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// The filter/pagination tuple driving list retrieval.
///
/// `page` is 1-based. A `search` value that is empty after trimming is
/// treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    /// 1-based page to retrieve.
    pub page: usize,
    /// Page size.
    pub limit: usize,
    /// Exact-match status filter; `None` matches all statuses.
    pub status: Option<TaskStatus>,
    /// Case-insensitive substring matched against task titles.
    pub search: Option<String>,
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
            status: None,
            search: None,
        }
    }
}

impl TaskQuery {
    /// Creates a query for the given page with default limit and no
    /// filters.
    #[must_use]
    pub fn page(page: usize) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Sets the status filter.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Returns `true` when the task satisfies both filter predicates.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let status_matches = self.status.is_none_or(|status| task.status() == status);
        let search_matches = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .is_none_or(|term| {
                task.title()
                    .to_lowercase()
                    .contains(&term.to_lowercase())
            });
        status_matches && search_matches
    }

    /// Returns the zero-based offset of the first item on the requested
    /// page.
    ///
    /// `page` is 1-based; a zero page is treated as the first page rather
    /// than underflowing.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// One page of matching tasks together with the total match count across
/// all pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskPage {
    /// The tasks on the requested page, in store order.
    pub data: Vec<Task>,
    /// Count of tasks matching the filters across all pages.
    pub total: usize,
}
