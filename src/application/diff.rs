//! Diff Use Case
//!
//! Orchestrates the diff flow:
//! 1. Load the index and pick the entries to check
//! 2. Fetch and render them exactly as an install would
//! 3. Compare each rendering with the installed copy
//!
//! The patch direction is registry rendering (old) to on-disk content (new),
//! so added lines are local edits.

use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;

use crate::application::fetcher::{fetch_entry, load_index};
use crate::application::render::{render_entries, RenderInputs};
use crate::application::stage::{InstallStage, StageTracker};
use crate::config::ProjectConfig;
use crate::domain::entities::{ItemType, RegistryEntry, TransformedFile};
use crate::domain::ports::{FileSystem, RegistrySource};
use crate::domain::services::{
    dedupe_targets, resolve_target_path, Change, Differ, TargetCollision, TransformContext,
    TransformerPipeline,
};
use crate::error::{ComponentryError, ComponentryResult, SchemaError};

/// Installed state of one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "changes", rename_all = "snake_case")]
pub enum DiffStatus {
    /// None of the entry's files exist in the project
    NotInstalled,
    UpToDate,
    Changed(Vec<Change>),
}

impl DiffStatus {
    pub fn has_changes(&self) -> bool {
        matches!(self, DiffStatus::Changed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDiff {
    pub name: String,
    #[serde(flatten)]
    pub status: DiffStatus,
}

/// An entry that could not be checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffFailure {
    pub name: String,
    pub message: String,
}

/// Result of the diff operation
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
    pub entries: Vec<EntryDiff>,
    pub failures: Vec<DiffFailure>,
    pub collisions: Vec<TargetCollision>,
    pub rejected: Vec<SchemaError>,
}

impl DiffReport {
    pub fn has_changes(&self) -> bool {
        self.entries.iter().any(|e| e.status.has_changes())
    }

    pub fn changed(&self) -> impl Iterator<Item = &EntryDiff> {
        self.entries.iter().filter(|e| e.status.has_changes())
    }
}

/// Render `entry` and compare it with the project.
pub async fn diff_entry(
    pipeline: &TransformerPipeline,
    entry: &RegistryEntry,
    ctx: &TransformContext<'_>,
    fs: &dyn FileSystem,
) -> ComponentryResult<EntryDiff> {
    let files = render_entries(pipeline, std::slice::from_ref(entry), ctx)?;
    let (files, _collisions) = dedupe_targets(files);
    diff_files(&entry.name, &files, fs).await
}

/// Compare already-rendered files of one entry with the disk.
pub async fn diff_files(
    name: &str,
    files: &[TransformedFile],
    fs: &dyn FileSystem,
) -> ComponentryResult<EntryDiff> {
    let differ = Differ::new();
    let mut found = false;
    let mut changes = Vec::new();

    for file in files {
        let Some(installed) = fs.read_optional(file.target_path()).await? else {
            tracing::debug!(entry = name, path = %file.target_path().display(), "not on disk");
            continue;
        };
        found = true;

        let patch = differ.hunks(file.content(), &installed);
        if let Some(change) = Change::from_patch(file.target_path(), patch) {
            changes.push(change);
        }
    }

    let status = match (found, changes.is_empty()) {
        (false, _) => DiffStatus::NotInstalled,
        (true, true) => DiffStatus::UpToDate,
        (true, false) => DiffStatus::Changed(changes),
    };
    Ok(EntryDiff {
        name: name.to_string(),
        status,
    })
}

/// Diff use case - compares installed components with the registry
pub struct DiffUseCase {
    source: Arc<dyn RegistrySource>,
    file_system: Arc<dyn FileSystem>,
    pipeline: TransformerPipeline,
}

impl DiffUseCase {
    pub fn new(source: Arc<dyn RegistrySource>, file_system: Arc<dyn FileSystem>) -> Self {
        Self {
            source,
            file_system,
            pipeline: TransformerPipeline::standard(),
        }
    }

    /// Diff one entry, or every installed entry when `name` is `None`.
    pub async fn execute(
        &self,
        config: &ProjectConfig,
        name: Option<&str>,
    ) -> ComponentryResult<DiffReport> {
        let mut tracker = StageTracker::new();
        let result = self.run(config, name, &mut tracker).await;
        match &result {
            Ok(_) => tracker.advance(InstallStage::Done),
            Err(err) => {
                tracker.fail();
                tracing::error!(error = %err, "diff failed");
            }
        }
        result
    }

    async fn run(
        &self,
        config: &ProjectConfig,
        name: Option<&str>,
        tracker: &mut StageTracker,
    ) -> ComponentryResult<DiffReport> {
        tracker.advance(InstallStage::Resolving);
        let validation = load_index(self.source.as_ref()).await?;
        let index = &validation.index;

        let candidates: Vec<&RegistryEntry> = match name {
            Some(name) => {
                let entry = index
                    .get(name)
                    .ok_or_else(|| ComponentryError::UnknownDependency {
                        name: name.to_string(),
                        referrer: None,
                    })?;
                vec![entry]
            }
            None => self.installed_entries(index.entries(), config).await,
        };
        tracing::info!(entries = candidates.len(), "checking installed entries");

        tracker.advance(InstallStage::Fetching);
        let style = config.style();
        let fetched = join_all(
            candidates
                .iter()
                .map(|entry| fetch_entry(entry, self.source.as_ref(), style)),
        )
        .await;

        let mut report = DiffReport {
            rejected: validation.rejected.clone(),
            ..DiffReport::default()
        };
        let mut entries = Vec::new();
        for (candidate, outcome) in candidates.iter().zip(fetched) {
            match outcome {
                Ok(entry) => entries.push(entry),
                // a single named entry fails the whole diff
                Err(err) if name.is_some() => return Err(err),
                Err(err) => {
                    tracing::warn!(entry = %candidate.name, error = %err, "skipping entry");
                    report.failures.push(DiffFailure {
                        name: candidate.name.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }

        tracker.advance(InstallStage::Transforming);
        let inputs = RenderInputs::prepare(index, config, !config.css_variables())?;
        let ctx = inputs.context(config);
        let mut rendered = Vec::new();
        for entry in &entries {
            match render_entries(&self.pipeline, std::slice::from_ref(entry), &ctx) {
                Ok(files) => rendered.extend(files),
                Err(err) if name.is_some() => return Err(err),
                Err(err) => report.failures.push(DiffFailure {
                    name: entry.name.clone(),
                    message: err.to_string(),
                }),
            }
        }
        let (rendered, collisions) = dedupe_targets(rendered);
        report.collisions = collisions;

        tracker.advance(InstallStage::Diffing);
        for entry in &entries {
            let files: Vec<TransformedFile> = rendered
                .iter()
                .filter(|f| f.entry() == entry.name)
                .cloned()
                .collect();
            if files.is_empty() && name.is_none() {
                continue;
            }
            match diff_files(&entry.name, &files, self.file_system.as_ref()).await {
                Ok(diff) => report.entries.push(diff),
                Err(err) if name.is_some() => return Err(err),
                Err(err) => {
                    tracing::warn!(entry = %entry.name, error = %err, "cannot read installed files");
                    report.failures.push(DiffFailure {
                        name: entry.name.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// Non-style entries with at least one file already in the project.
    async fn installed_entries<'a>(
        &self,
        entries: &'a [RegistryEntry],
        config: &ProjectConfig,
    ) -> Vec<&'a RegistryEntry> {
        let mut installed = Vec::new();
        for entry in entries.iter().filter(|e| e.item_type != ItemType::Style) {
            let targets: Vec<PathBuf> = entry
                .files
                .iter()
                .filter_map(|file| resolve_target_path(file, entry, config).ok())
                .collect();

            for target in &targets {
                if self.file_system.exists(target).await {
                    installed.push(entry);
                    break;
                }
            }
        }
        installed
    }
}
