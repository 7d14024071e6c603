//! FileSystem port
//!
//! Install and diff read installed files and write rendered ones through
//! this trait, so both run against an in-memory tree in tests.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

pub type FsResult<T> = Result<T, FsError>;

#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Attach `path` to an I/O error, keeping the not-found/permission split.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path),
            _ => FsError::Io { path, source: err },
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - tokio file I/O with atomic writes
/// - `MemoryFs` (tests) - in-memory map
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read file content as string
    async fn read(&self, path: &Path) -> FsResult<String>;

    /// Read file content, `None` when the file does not exist
    async fn read_optional(&self, path: &Path) -> FsResult<Option<String>> {
        match self.read(path).await {
            Ok(content) => Ok(Some(content)),
            Err(FsError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write content to file atomically, creating parent directories
    async fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if file exists
    async fn exists(&self, path: &Path) -> bool;
}
