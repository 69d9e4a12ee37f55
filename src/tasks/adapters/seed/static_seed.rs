//! Seed source serving a fixed in-process record set.

use async_trait::async_trait;

use crate::tasks::{
    domain::Task,
    ports::{SeedSource, SeedSourceError},
};

/// Serves a fixed set of tasks; useful for tests and empty boards.
#[derive(Debug, Clone, Default)]
pub struct StaticSeed {
    tasks: Vec<Task>,
}

impl StaticSeed {
    /// Creates a seed serving the given tasks.
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Creates a seed serving no tasks.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeedSource for StaticSeed {
    async fn load(&self) -> Result<Vec<Task>, SeedSourceError> {
        Ok(self.tasks.clone())
    }
}
