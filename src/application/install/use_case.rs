//! Install Use Case
//!
//! Orchestrates the install flow:
//! 1. Load and validate the index, resolve the closure
//! 2. Fetch entry content
//! 3. Transform every file, detect collisions, merge the stylesheet
//! 4. Classify each file against the disk
//! 5. Confirm and write the batch
//!
//! Nothing is written unless every earlier step succeeded.

use std::sync::Arc;

use futures::future::{join_all, try_join_all};

use super::options::InstallOptions;
use super::result::{FileAction, InstallResult, PlannedFile};
use crate::application::fetcher::{fetch, load_index};
use crate::application::render::{render_entries, RenderInputs};
use crate::application::stage::{InstallStage, StageTracker};
use crate::config::ProjectConfig;
use crate::domain::entities::{Palette, RegistryEntry, SchemeTokens, TransformedFile};
use crate::domain::ports::{Confirm, FileSystem, PendingWrite, RegistrySource};
use crate::domain::services::{
    collect_base_rules, dedupe_targets, resolve, StylesheetUpdate, StylesheetUpdater,
    TransformerPipeline, BOOTSTRAP_ENTRY,
};
use crate::domain::value_objects::ContentHash;
use crate::error::{ComponentryError, ComponentryResult};

/// Install use case - parameterized by its ports
pub struct InstallUseCase {
    source: Arc<dyn RegistrySource>,
    file_system: Arc<dyn FileSystem>,
    confirm: Arc<dyn Confirm>,
    pipeline: TransformerPipeline,
}

impl InstallUseCase {
    pub fn new(
        source: Arc<dyn RegistrySource>,
        file_system: Arc<dyn FileSystem>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        Self {
            source,
            file_system,
            confirm,
            pipeline: TransformerPipeline::standard(),
        }
    }

    pub fn with_pipeline(mut self, pipeline: TransformerPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Execute the install use case
    pub async fn execute(
        &self,
        config: &ProjectConfig,
        options: &InstallOptions,
    ) -> ComponentryResult<InstallResult> {
        let mut tracker = StageTracker::new();
        match self.run(config, options, &mut tracker).await {
            Ok(mut result) => {
                tracker.advance(InstallStage::Done);
                result.stage = tracker.stage();
                Ok(result)
            }
            Err(err) => {
                tracker.fail();
                tracing::error!(error = %err, stage = %tracker.stage(), "install failed");
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        config: &ProjectConfig,
        options: &InstallOptions,
        tracker: &mut StageTracker,
    ) -> ComponentryResult<InstallResult> {
        tracker.advance(InstallStage::Resolving);
        let validation = load_index(self.source.as_ref()).await?;
        let closure = resolve(&options.names, &validation.index)?;
        tracing::info!(entries = ?closure.names(), "resolved install closure");

        tracker.advance(InstallStage::Fetching);
        let entries = fetch(&closure, self.source.as_ref(), config.style()).await?;

        tracker.advance(InstallStage::Transforming);
        let bootstrap = closure.contains(BOOTSTRAP_ENTRY);
        let inputs = RenderInputs::prepare(
            &validation.index,
            config,
            bootstrap || !config.css_variables(),
        )?;
        let rendered = render_entries(&self.pipeline, &entries, &inputs.context(config))?;
        let (files, collisions) = dedupe_targets(rendered);

        let palette = inputs.palette.as_ref().filter(|_| bootstrap);
        let stylesheet = self.plan_stylesheet(config, &entries, palette).await?;
        let classified = self.classify(files, options.overwrite).await?;

        let mut result = InstallResult {
            closure: closure.names().into_iter().map(str::to_string).collect(),
            files: classified
                .iter()
                .map(|(file, action)| PlannedFile {
                    path: file.target_path().to_path_buf(),
                    entry: file.entry().to_string(),
                    source_path: file.source_path().to_string(),
                    action: *action,
                })
                .collect(),
            stylesheet,
            collisions,
            rejected: validation.rejected,
            package_dependencies: closure.package_dependencies(),
            written: false,
            stage: tracker.stage(),
        };

        if options.dry_run {
            tracing::info!("dry run, nothing written");
            return Ok(result);
        }
        if !result.has_writes() {
            tracing::info!("everything is up to date");
            return Ok(result);
        }

        tracker.advance(InstallStage::Writing);
        let pending = PendingWrite {
            create: result.count(FileAction::Create),
            update: result.count(FileAction::Update),
            stylesheet: result.stylesheet_changed(),
        };
        if !options.yes && !self.confirm.confirm(&pending) {
            return Err(ComponentryError::Aborted);
        }

        let to_write: Vec<&TransformedFile> = classified
            .iter()
            .filter(|(_, action)| action.writes())
            .map(|(file, _)| file)
            .collect();
        self.write_all(&to_write, result.stylesheet.as_ref()).await?;
        result.written = true;

        Ok(result)
    }

    /// Merge palette tokens (bootstrap only), then every entry's tokens in
    /// closure order, then base rules.
    async fn plan_stylesheet(
        &self,
        config: &ProjectConfig,
        entries: &[RegistryEntry],
        palette: Option<&Palette>,
    ) -> ComponentryResult<Option<StylesheetUpdate>> {
        let Some(path) = config.resolved_paths.stylesheet.as_deref() else {
            tracing::debug!("no stylesheet configured, skipping token merge");
            return Ok(None);
        };

        let mut tokens = SchemeTokens::new();
        if config.css_variables() {
            if let Some(palette) = palette {
                extend_tokens(&mut tokens, &palette.css_vars);
            }
            for entry in entries {
                extend_tokens(&mut tokens, &entry.css_vars);
            }
        }
        let base_rules = collect_base_rules(entries, config.css_variables());

        let update = StylesheetUpdater::new(self.file_system.as_ref())
            .update_file(path, &tokens, &base_rules)
            .await?;
        Ok(Some(update))
    }

    /// Compare each file with what is on disk.
    async fn classify(
        &self,
        files: Vec<TransformedFile>,
        overwrite: bool,
    ) -> ComponentryResult<Vec<(TransformedFile, FileAction)>> {
        let on_disk = try_join_all(
            files
                .iter()
                .map(|file| self.file_system.read_optional(file.target_path())),
        )
        .await?;

        Ok(files
            .into_iter()
            .zip(on_disk)
            .map(|(mut file, existing)| {
                let action = match existing {
                    None => FileAction::Create,
                    Some(existing) if ContentHash::from_content(&existing) == *file.hash() => {
                        FileAction::Unchanged
                    }
                    Some(_) if overwrite => FileAction::Update,
                    Some(_) => {
                        tracing::warn!(
                            path = %file.target_path().display(),
                            "file differs from the registry, skipping (use --overwrite)"
                        );
                        FileAction::Skipped
                    }
                };
                (file, action)
            })
            .collect())
    }

    async fn write_all(
        &self,
        files: &[&TransformedFile],
        stylesheet: Option<&StylesheetUpdate>,
    ) -> ComponentryResult<()> {
        let fs = self.file_system.as_ref();
        let mut writes: Vec<_> = files
            .iter()
            .map(|file| fs.write(file.target_path(), file.content()))
            .collect();
        if let Some(update) = stylesheet.filter(|u| u.is_changed()) {
            writes.push(fs.write(&update.path, &update.updated));
        }

        let count = writes.len();
        for outcome in join_all(writes).await {
            outcome?;
        }
        tracing::info!(files = count, "wrote install batch");
        Ok(())
    }
}

fn extend_tokens(tokens: &mut SchemeTokens, more: &SchemeTokens) {
    for (scheme, values) in more {
        tokens
            .entry(scheme.clone())
            .or_default()
            .extend(values.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}
