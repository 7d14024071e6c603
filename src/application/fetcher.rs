//! Content Fetcher
//!
//! Loads the registry index and fills in file content for every entry of a
//! closure, fetching per-entry documents concurrently.

use futures::future::try_join_all;

use crate::domain::entities::{RegistryEntry, ResolvedClosure};
use crate::domain::ports::RegistrySource;
use crate::domain::services::{validate, validate_entry, IndexValidation};
use crate::error::{ComponentryError, ComponentryResult};

/// Fetch and validate the registry index.
pub async fn load_index(source: &dyn RegistrySource) -> ComponentryResult<IndexValidation> {
    tracing::debug!(location = source.location(), "loading registry index");
    let raw = source
        .fetch_index()
        .await
        .map_err(|e| e.for_resource("index.json"))?;
    let validation = validate(&raw)?;

    if !validation.rejected.is_empty() {
        tracing::warn!(
            rejected = validation.rejected.len(),
            "some registry entries were rejected and will be unavailable"
        );
    }
    Ok(validation)
}

/// Every entry of `closure` with all file content present, in closure order.
///
/// Fetches run concurrently; the first failure aborts the whole fetch.
pub async fn fetch(
    closure: &ResolvedClosure,
    source: &dyn RegistrySource,
    style: &str,
) -> ComponentryResult<Vec<RegistryEntry>> {
    let pending = closure
        .entries()
        .iter()
        .filter(|e| !e.is_fully_loaded())
        .count();
    tracing::info!(
        entries = closure.len(),
        fetching = pending,
        style,
        "fetching registry content"
    );

    try_join_all(
        closure
            .entries()
            .iter()
            .map(|entry| fetch_entry(entry, source, style)),
    )
    .await
}

/// Fill in `entry`'s lazy files from its entry document.
pub async fn fetch_entry(
    entry: &RegistryEntry,
    source: &dyn RegistrySource,
    style: &str,
) -> ComponentryResult<RegistryEntry> {
    if entry.is_fully_loaded() {
        return Ok(entry.clone());
    }

    let raw = source
        .fetch_entry(style, &entry.name)
        .await
        .map_err(|e| e.for_resource(&entry.name))?;
    let document = validate_entry(&raw, "").map_err(|e| ComponentryError::Fetch {
        resource: entry.name.clone(),
        message: format!("invalid entry document: {}", e),
    })?;

    tracing::debug!(entry = %entry.name, files = document.files.len(), "fetched entry document");
    complete(entry, document)
}

/// Merge a fetched document into the index entry.
fn complete(entry: &RegistryEntry, document: RegistryEntry) -> ComponentryResult<RegistryEntry> {
    let mut merged = entry.clone();

    for file in merged.files.iter_mut().filter(|f| !f.has_content()) {
        let content = document
            .files
            .iter()
            .find(|f| f.path == file.path)
            .and_then(|f| f.content.clone())
            .ok_or_else(|| ComponentryError::Fetch {
                resource: entry.name.clone(),
                message: format!("no content for '{}'", file.path),
            })?;
        file.content = Some(content);
    }

    // An index listing may omit details the entry document carries.
    if merged.css_vars.is_empty() {
        merged.css_vars = document.css_vars;
    }
    if merged.base_layer.is_empty() {
        merged.base_layer = document.base_layer;
    }
    if merged.dependencies.is_empty() {
        merged.dependencies = document.dependencies;
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ItemType, RegistryFile, RegistryIndex};
    use crate::domain::ports::SourceError;
    use crate::domain::services::resolve;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Serves entry documents from a JSON map, delaying earlier names longer
    /// so completion order differs from request order.
    struct MockSource {
        documents: Value,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn new(documents: Value) -> Self {
            Self {
                documents,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RegistrySource for MockSource {
        fn location(&self) -> &str {
            "mock://registry"
        }

        async fn fetch_index(&self) -> Result<Value, SourceError> {
            Ok(self.documents["index"].clone())
        }

        async fn fetch_entry(&self, style: &str, name: &str) -> Result<Value, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = match name {
                "a" => 30,
                "b" => 10,
                _ => 0,
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;

            let doc = &self.documents[style][name];
            if doc.is_null() {
                return Err(SourceError::NotFound {
                    url: format!("styles/{}/{}.json", style, name),
                });
            }
            Ok(doc.clone())
        }
    }

    fn lazy(name: &str, deps: &[&str]) -> RegistryEntry {
        RegistryEntry::new(name, ItemType::Ui)
            .with_file(RegistryFile::lazy(format!("ui/{}.tsx", name)))
            .with_registry_dependencies(deps.iter().copied())
    }

    fn document(name: &str) -> Value {
        json!({
            "name": name,
            "type": "registry:ui",
            "files": [{"path": format!("ui/{}.tsx", name), "content": format!("// {}", name)}]
        })
    }

    #[tokio::test]
    async fn results_follow_closure_order() {
        let index: RegistryIndex = [lazy("a", &["b"]), lazy("b", &["c"]), lazy("c", &[])]
            .into_iter()
            .collect();
        let closure = resolve(&["a".to_string()], &index).unwrap();
        let source = MockSource::new(json!({
            "new-york": {"a": document("a"), "b": document("b"), "c": document("c")}
        }));

        let entries = fetch(&closure, &source, "new-york").await.unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(entries[0].files[0].content.as_deref(), Some("// a"));
        assert!(entries.iter().all(RegistryEntry::is_fully_loaded));
    }

    #[tokio::test]
    async fn loaded_entries_are_not_refetched() {
        let inline = RegistryEntry::new("utils", ItemType::Hook)
            .with_file(RegistryFile::new("lib/utils.ts", "export {}"));
        let index: RegistryIndex = [inline].into_iter().collect();
        let closure = resolve(&["utils".to_string()], &index).unwrap();
        let source = MockSource::new(json!({}));

        let entries = fetch(&closure, &source, "default").await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failure_names_the_entry() {
        let index: RegistryIndex = [lazy("a", &["missing"]), lazy("missing", &[])]
            .into_iter()
            .collect();
        let closure = resolve(&["a".to_string()], &index).unwrap();
        let source = MockSource::new(json!({"default": {"a": document("a")}}));

        let err = fetch(&closure, &source, "default").await.unwrap_err();

        assert_eq!(err.subject(), Some("missing"));
        assert!(matches!(err, ComponentryError::Fetch { .. }));
    }

    #[tokio::test]
    async fn document_without_the_file_is_an_error() {
        let entry = lazy("card", &[]).with_file(RegistryFile::lazy("ui/card-footer.tsx"));
        let source = MockSource::new(json!({"default": {"card": document("card")}}));

        let err = fetch_entry(&entry, &source, "default").await.unwrap_err();

        match err {
            ComponentryError::Fetch { resource, message } => {
                assert_eq!(resource, "card");
                assert!(message.contains("ui/card-footer.tsx"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn invalid_document_is_a_fetch_error() {
        let source = MockSource::new(json!({"default": {"a": {"name": "a", "type": "registry:bogus"}}}));

        let err = fetch_entry(&lazy("a", &[]), &source, "default")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("invalid entry document"));
    }

    #[tokio::test]
    async fn load_index_keeps_valid_entries() {
        let source = MockSource::new(json!({
            "index": [
                {"name": "utils", "type": "registry:lib", "files": [{"path": "lib/utils.ts"}]},
                {"name": "broken", "type": "registry:ui", "files": "nope"}
            ]
        }));

        let validation = load_index(&source).await.unwrap();

        assert_eq!(validation.index.len(), 1);
        assert_eq!(validation.rejected.len(), 1);
        assert_eq!(validation.rejected[0].path, "[1].files");
    }
}
