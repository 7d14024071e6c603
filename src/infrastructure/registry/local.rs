//! On-disk registry
//!
//! Same layout as the HTTP registry: `index.json` at the root and
//! `styles/{style}/{name}.json` per entry.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use super::{entry_document, INDEX_DOCUMENT};
use crate::domain::ports::{RegistrySource, SourceError};

#[derive(Debug, Clone)]
pub struct LocalRegistry {
    root: PathBuf,
    location: String,
}

impl LocalRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let location = root.display().to_string();
        Self { root, location }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read_json(&self, document: &str) -> Result<Value, SourceError> {
        let path = self.root.join(document);
        let shown = path.display().to_string();
        tracing::debug!(path = %shown, "reading registry document");

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SourceError::NotFound { url: shown })
            }
            Err(source) => {
                return Err(SourceError::Io {
                    path: shown,
                    source,
                })
            }
        };

        serde_json::from_str(&text).map_err(|e| SourceError::InvalidJson {
            url: shown,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl RegistrySource for LocalRegistry {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch_index(&self) -> Result<Value, SourceError> {
        self.read_json(INDEX_DOCUMENT).await
    }

    async fn fetch_entry(&self, style: &str, name: &str) -> Result<Value, SourceError> {
        self.read_json(&entry_document(style, name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn reads_index_and_entries() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.json"), r#"[{"name":"utils"}]"#).unwrap();
        std::fs::create_dir_all(dir.path().join("styles/new-york")).unwrap();
        std::fs::write(
            dir.path().join("styles/new-york/utils.json"),
            r#"{"name":"utils","files":[]}"#,
        )
        .unwrap();

        let registry = LocalRegistry::new(dir.path());

        let index = registry.fetch_index().await.unwrap();
        assert_eq!(index[0]["name"], "utils");

        let entry = registry.fetch_entry("new-york", "utils").await.unwrap();
        assert_eq!(entry["files"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn missing_document_is_not_found() {
        let dir = tempdir().unwrap();
        let registry = LocalRegistry::new(dir.path());

        let err = registry.fetch_entry("default", "card").await.unwrap_err();
        match err {
            SourceError::NotFound { url } => assert!(url.ends_with("styles/default/card.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn malformed_document_is_invalid_json() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.json"), "[{").unwrap();

        let err = LocalRegistry::new(dir.path()).fetch_index().await.unwrap_err();
        assert!(matches!(err, SourceError::InvalidJson { .. }));
    }
}
