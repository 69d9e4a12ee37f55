//! Pass-through gateway over the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use super::InMemoryTaskStore;
use crate::tasks::{
    domain::{NewTask, Task, TaskId, TaskPage, TaskPatch, TaskQuery},
    ports::{TaskGateway, TaskGatewayResult},
};

/// [`TaskGateway`] implementation forwarding directly to an
/// [`InMemoryTaskStore`].
///
/// The in-memory store's operations are infallible, so this boundary
/// never produces a backend error itself; it exists so consumers depend
/// on the same asynchronous contract a real backend would present.
pub struct InMemoryGateway<C>
where
    C: Clock + Send + Sync,
{
    store: Arc<InMemoryTaskStore<C>>,
}

impl<C> InMemoryGateway<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a gateway over the given store.
    #[must_use]
    pub fn new(store: Arc<InMemoryTaskStore<C>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<C> TaskGateway for InMemoryGateway<C>
where
    C: Clock + Send + Sync,
{
    async fn list(&self, query: &TaskQuery) -> TaskGatewayResult<TaskPage> {
        Ok(self.store.list(query).await)
    }

    async fn create(&self, input: NewTask) -> TaskGatewayResult<Task> {
        Ok(self.store.create(input).await)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskGatewayResult<Option<Task>> {
        Ok(self.store.update(id, patch).await)
    }

    async fn delete(&self, id: TaskId) -> TaskGatewayResult<bool> {
        Ok(self.store.delete(id).await)
    }

    async fn find(&self, id: TaskId) -> TaskGatewayResult<Option<Task>> {
        Ok(self.store.find(id).await)
    }
}
