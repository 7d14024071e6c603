//! TransformedFile entity - a registry file rendered for the consuming project
//!
//! The result of running the transformer pipeline and target path resolution.
//! This is what gets written (install) or compared against disk (diff).

use crate::domain::value_objects::ContentHash;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct TransformedFile {
    /// Entry this file belongs to
    entry: String,
    /// Registry-relative source path
    source_path: String,
    /// Absolute destination inside the project
    target_path: PathBuf,
    /// Rendered content
    content: String,
    /// Cached content hash
    hash: Option<ContentHash>,
}

impl TransformedFile {
    pub fn new(
        entry: impl Into<String>,
        source_path: impl Into<String>,
        target_path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            entry: entry.into(),
            source_path: source_path.into(),
            target_path: target_path.into(),
            content: content.into(),
            hash: None,
        }
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Compute and cache the content hash (SHA256)
    pub fn hash(&mut self) -> &ContentHash {
        let content = &self.content;
        self.hash
            .get_or_insert_with(|| ContentHash::from_content(content))
    }

    /// `entry/source_path`, used in warnings and reports
    pub fn origin(&self) -> String {
        format!("{}/{}", self.entry, self.source_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_cached_and_stable() {
        let mut file = TransformedFile::new("button", "ui/button.tsx", "/p/button.tsx", "x");
        let first = file.hash().clone();
        assert_eq!(&first, file.hash());
        assert_eq!(first, ContentHash::from_content("x"));
    }

    #[test]
    fn origin_joins_entry_and_source() {
        let file = TransformedFile::new("button", "ui/button.tsx", "/p/button.tsx", "");
        assert_eq!(file.origin(), "button/ui/button.tsx");
    }
}
