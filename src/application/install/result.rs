//! Install Result

use std::path::PathBuf;

use serde::Serialize;

use crate::application::stage::InstallStage;
use crate::domain::services::{StylesheetUpdate, TargetCollision};
use crate::error::SchemaError;

/// What happens to one rendered file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    /// Not on disk yet
    Create,
    /// On disk with different content, replaced because of `--overwrite`
    Update,
    /// On disk with identical content
    Unchanged,
    /// On disk with different content, left alone
    Skipped,
}

impl FileAction {
    pub fn writes(&self) -> bool {
        matches!(self, FileAction::Create | FileAction::Update)
    }
}

/// One rendered file and its classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub entry: String,
    pub source_path: String,
    pub action: FileAction,
}

/// Result of an install run
#[derive(Debug, Clone, Default)]
pub struct InstallResult {
    /// Entry names in closure order
    pub closure: Vec<String>,
    pub files: Vec<PlannedFile>,
    /// Stylesheet merge, when a stylesheet is configured and something changed
    pub stylesheet: Option<StylesheetUpdate>,
    pub collisions: Vec<TargetCollision>,
    /// Index entries rejected by validation
    pub rejected: Vec<SchemaError>,
    /// Runtime packages to add with the project's package manager
    pub package_dependencies: Vec<String>,
    /// Whether anything was written
    pub written: bool,
    /// Final stage of the run
    pub stage: InstallStage,
}

impl InstallResult {
    pub fn with_action(&self, action: FileAction) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(move |f| f.action == action)
    }

    pub fn count(&self, action: FileAction) -> usize {
        self.with_action(action).count()
    }

    pub fn stylesheet_changed(&self) -> bool {
        self.stylesheet.as_ref().is_some_and(|s| s.is_changed())
    }

    /// Anything that would be (or was) written
    pub fn has_writes(&self) -> bool {
        self.files.iter().any(|f| f.action.writes()) || self.stylesheet_changed()
    }
}
