//! Seed source port: the static data source the store initializes from.

use crate::tasks::domain::Task;
use async_trait::async_trait;
use thiserror::Error;

/// A readable source of initial task records.
///
/// Loaded once on first store access; the store treats a failed load as
/// an empty collection rather than a stuck or failing initialization.
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Loads the full seed record set.
    ///
    /// # Errors
    ///
    /// Returns [`SeedSourceError`] when the source is unreachable or its
    /// contents do not parse.
    async fn load(&self) -> Result<Vec<Task>, SeedSourceError>;
}

/// Errors returned by seed sources.
#[derive(Debug, Error)]
pub enum SeedSourceError {
    /// The source could not be read.
    #[error("failed to read seed source: {0}")]
    Io(#[from] std::io::Error),

    /// The source contents are not a valid task array.
    #[error("failed to parse seed source: {0}")]
    Parse(#[from] serde_json::Error),
}
