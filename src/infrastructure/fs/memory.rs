//! In-memory file system
//!
//! Backs unit and integration tests, and records every write so tests can
//! assert on what an install would have touched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
pub struct MemoryFs {
    files: Mutex<BTreeMap<PathBuf, String>>,
    writes: Mutex<Vec<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without recording it as a write.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        if let Ok(mut files) = self.files.lock() {
            files.insert(path.into(), content.into());
        }
        self
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().ok()?.get(path).cloned()
    }

    /// Paths written through the port, in order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl FileSystem for MemoryFs {
    async fn read(&self, path: &Path) -> FsResult<String> {
        self.get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    async fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| FsError::Other("memory fs poisoned".to_string()))?;
        files.insert(path.to_path_buf(), content.to_string());
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(path.to_path_buf());
        }
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }
}
