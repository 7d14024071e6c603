//! Differ Domain Service
//!
//! Line diffs between the registry rendering of a file and the installed
//! copy, grouped into hunks (runs of lines with the same tag).

use std::path::PathBuf;

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

/// Hunk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HunkTag {
    Added,
    Removed,
    Unchanged,
}

impl From<ChangeTag> for HunkTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Insert => HunkTag::Added,
            ChangeTag::Delete => HunkTag::Removed,
            ChangeTag::Equal => HunkTag::Unchanged,
        }
    }
}

/// Consecutive lines sharing one tag; `value` keeps their line endings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    pub tag: HunkTag,
    pub value: String,
}

impl Hunk {
    pub fn is_change(&self) -> bool {
        self.tag != HunkTag::Unchanged
    }

    pub fn line_count(&self) -> usize {
        self.value.lines().count()
    }
}

/// A file whose installed copy differs from the registry rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub file_path: PathBuf,
    pub patch: Vec<Hunk>,
}

impl Change {
    /// Build a change only when the patch holds a real difference.
    pub fn from_patch(file_path: impl Into<PathBuf>, patch: Vec<Hunk>) -> Option<Self> {
        if patch.iter().any(Hunk::is_change) {
            Some(Self {
                file_path: file_path.into(),
                patch,
            })
        } else {
            None
        }
    }

    pub fn additions(&self) -> usize {
        self.count(HunkTag::Added)
    }

    pub fn deletions(&self) -> usize {
        self.count(HunkTag::Removed)
    }

    fn count(&self, tag: HunkTag) -> usize {
        self.patch
            .iter()
            .filter(|h| h.tag == tag)
            .map(Hunk::line_count)
            .sum()
    }
}

/// Differ service for computing file differences
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    /// Create a new Differ instance
    pub fn new() -> Self {
        Self
    }

    /// Group the line diff of `old` → `new` into hunks.
    ///
    /// Concatenating the `Unchanged` and `Added` values reproduces `new`;
    /// `Unchanged` and `Removed` reproduce `old`.
    pub fn hunks(&self, old: &str, new: &str) -> Vec<Hunk> {
        let text_diff = TextDiff::from_lines(old, new);
        let mut hunks: Vec<Hunk> = Vec::new();

        for change in text_diff.iter_all_changes() {
            let tag = HunkTag::from(change.tag());
            match hunks.last_mut() {
                Some(last) if last.tag == tag => last.value.push_str(change.value()),
                _ => hunks.push(Hunk {
                    tag,
                    value: change.value().to_string(),
                }),
            }
        }

        hunks
    }
}
