//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go to a temp file in the destination directory and are renamed
/// into place, so a crash never leaves a half-written component.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for LocalFs {
    async fn read(&self, path: &Path) -> FsResult<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FsError::at(path, e))
    }

    async fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FsError::at(parent, e))?;
        }

        let path = path.to_path_buf();
        let content = content.to_string();
        tokio::task::spawn_blocking(move || atomic_write(&path, content.as_bytes()))
            .await
            .map_err(|e| FsError::Other(format!("write task failed: {}", e)))?
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

/// Write via a sibling temp file and rename into place.
fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let dir: PathBuf = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| FsError::at(&dir, e))?;
    tmp.write_all(content).map_err(|e| FsError::at(path, e))?;
    tmp.flush().map_err(|e| FsError::at(path, e))?;
    tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
    Ok(())
}
