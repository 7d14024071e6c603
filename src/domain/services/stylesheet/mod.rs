//! Stylesheet Updater
//!
//! Merges design tokens and base-layer rules into the project's global
//! stylesheet through a parse tree. Merging is idempotent and leaves
//! unrelated content byte-for-byte intact.

mod merge;
mod node;
mod parser;

use std::path::{Path, PathBuf};

use crate::domain::entities::{BaseRule, RegistryEntry, SchemeTokens};
use crate::domain::ports::FileSystem;
use crate::error::ComponentryResult;

pub use merge::{custom_property, merge_into, scheme_selector};
pub use node::{AtRule, Comment, Declaration, Node, Rule, Stylesheet};
pub use parser::parse;

impl Stylesheet {
    pub fn parse(src: &str) -> ComponentryResult<Self> {
        parser::parse(src)
    }
}

/// Merge `tokens` and `base_rules` into the stylesheet text `existing`.
pub fn merge_stylesheet(
    existing: &str,
    tokens: &SchemeTokens,
    base_rules: &[BaseRule],
) -> ComponentryResult<String> {
    let mut sheet = Stylesheet::parse(existing)?;
    if merge_into(&mut sheet, tokens, base_rules) {
        Ok(sheet.to_string())
    } else {
        Ok(existing.to_string())
    }
}

/// Base rules every project gets when CSS variables are on.
pub fn default_base_rules() -> Vec<BaseRule> {
    vec![
        BaseRule::new("*", "border-border"),
        BaseRule::new("body", "bg-background text-foreground"),
    ]
}

/// Defaults (if `css_variables`) followed by each entry's fragments, deduplicated.
pub fn collect_base_rules(entries: &[RegistryEntry], css_variables: bool) -> Vec<BaseRule> {
    let mut rules: Vec<BaseRule> = if css_variables {
        default_base_rules()
    } else {
        Vec::new()
    };
    for rule in entries.iter().flat_map(|e| e.base_layer.iter()) {
        if !rules.contains(rule) {
            rules.push(rule.clone());
        }
    }
    rules
}

/// Result of merging into a stylesheet file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetUpdate {
    pub path: PathBuf,
    /// Content on disk before the merge, `None` if the file did not exist
    pub original: Option<String>,
    pub updated: String,
}

impl StylesheetUpdate {
    pub fn is_changed(&self) -> bool {
        match &self.original {
            Some(original) => *original != self.updated,
            None => !self.updated.is_empty(),
        }
    }
}

/// Reads a stylesheet through the file system port and merges into it.
pub struct StylesheetUpdater<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> StylesheetUpdater<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Compute the merged stylesheet. A missing file is treated as empty.
    /// Nothing is written.
    pub async fn update_file(
        &self,
        path: &Path,
        tokens: &SchemeTokens,
        base_rules: &[BaseRule],
    ) -> ComponentryResult<StylesheetUpdate> {
        let original = self.fs.read_optional(path).await?;
        let updated = merge_stylesheet(original.as_deref().unwrap_or(""), tokens, base_rules)?;

        tracing::debug!(
            path = %path.display(),
            existed = original.is_some(),
            changed = original.as_deref() != Some(updated.as_str()),
            "merged stylesheet"
        );

        Ok(StylesheetUpdate {
            path: path.to_path_buf(),
            original,
            updated,
        })
    }
}
