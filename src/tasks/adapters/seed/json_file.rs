//! Seed source backed by a JSON fixture file.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::tasks::{
    domain::Task,
    ports::{SeedSource, SeedSourceError},
};

/// Reads a JSON array of task records from a file inside a
/// capability-scoped directory.
///
/// The expected shape is the documented wire form:
/// `[{id, title, description?, status, createdAt, updatedAt}, ...]`.
#[derive(Debug)]
pub struct JsonSeedFile {
    dir: Dir,
    file_name: Utf8PathBuf,
}

impl JsonSeedFile {
    /// Opens the directory containing the fixture and records the file
    /// name to read on load.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be opened.
    pub fn open(
        dir_path: impl AsRef<Utf8Path>,
        file_name: impl Into<Utf8PathBuf>,
    ) -> std::io::Result<Self> {
        let dir = Dir::open_ambient_dir(dir_path.as_ref(), ambient_authority())?;
        Ok(Self {
            dir,
            file_name: file_name.into(),
        })
    }

    /// Creates a seed over an already-opened directory.
    #[must_use]
    pub fn new(dir: Dir, file_name: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
        }
    }
}

#[async_trait]
impl SeedSource for JsonSeedFile {
    async fn load(&self) -> Result<Vec<Task>, SeedSourceError> {
        let raw = self.dir.read_to_string(&self.file_name)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
