//! In-memory canonical task collection with query evaluation.

use std::sync::Arc;

use mockable::Clock;
use tokio::sync::{OnceCell, RwLock};

use crate::tasks::{
    domain::{NewTask, Task, TaskId, TaskPage, TaskPatch, TaskQuery},
    ports::SeedSource,
};

/// Owned in-memory task store.
///
/// The store holds the canonical collection in creation order,
/// most-recently-created first (create prepends). It is seeded lazily
/// and exactly once from the injected [`SeedSource`] on first access;
/// concurrent first calls share the same initialization. A failed seed
/// load is logged and falls back to an empty collection.
///
/// All operations perform their read-modify-write under a single lock
/// acquisition, preserving per-operation atomicity on multi-threaded
/// runtimes.
pub struct InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    seed: Box<dyn SeedSource>,
    seeded: OnceCell<()>,
    tasks: RwLock<Vec<Task>>,
    clock: Arc<C>,
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a store that seeds itself from the given source on first
    /// access.
    #[must_use]
    pub fn new(seed: Box<dyn SeedSource>, clock: Arc<C>) -> Self {
        Self {
            seed,
            seeded: OnceCell::new(),
            tasks: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Runs the one-time seed load, falling back to an empty collection
    /// on failure.
    async fn ensure_seeded(&self) {
        self.seeded
            .get_or_init(|| async {
                match self.seed.load().await {
                    Ok(seeded) => {
                        let mut tasks = self.tasks.write().await;
                        *tasks = seeded;
                    }
                    Err(err) => {
                        tracing::warn!(
                            error = %err,
                            "failed to load seed data, starting with an empty task store"
                        );
                    }
                }
            })
            .await;
    }

    /// Returns the page of tasks matching the query, preserving store
    /// order, plus the total match count across all pages.
    ///
    /// Out-of-range pages yield an empty page with the total unchanged.
    pub async fn list(&self, query: &TaskQuery) -> TaskPage {
        self.ensure_seeded().await;
        let tasks = self.tasks.read().await;
        let matching: Vec<&Task> = tasks.iter().filter(|task| query.matches(task)).collect();
        let total = matching.len();
        let data = matching
            .into_iter()
            .skip(query.offset())
            .take(query.limit)
            .cloned()
            .collect();
        TaskPage { data, total }
    }

    /// Looks up a single task by id.
    pub async fn find(&self, id: TaskId) -> Option<Task> {
        self.ensure_seeded().await;
        let tasks = self.tasks.read().await;
        tasks.iter().find(|task| task.id() == id).cloned()
    }

    /// Creates a task from validated input, prepends it to the
    /// collection, and returns it.
    pub async fn create(&self, input: NewTask) -> Task {
        self.ensure_seeded().await;
        let task = Task::new(input, &*self.clock);
        let mut tasks = self.tasks.write().await;
        tasks.insert(0, task.clone());
        task
    }

    /// Merges the patch into the task with the given id, refreshing its
    /// `updated_at`.
    ///
    /// Returns `None` when no such task exists.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> Option<Task> {
        self.ensure_seeded().await;
        let mut tasks = self.tasks.write().await;
        let task = tasks.iter_mut().find(|task| task.id() == id)?;
        task.apply_patch(patch, &*self.clock);
        Some(task.clone())
    }

    /// Removes the task with the given id.
    ///
    /// Returns `false` when no such task exists.
    pub async fn delete(&self, id: TaskId) -> bool {
        self.ensure_seeded().await;
        let mut tasks = self.tasks.write().await;
        let position = tasks.iter().position(|task| task.id() == id);
        match position {
            Some(index) => {
                tasks.remove(index);
                true
            }
            None => false,
        }
    }
}
