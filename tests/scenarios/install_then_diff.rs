//! Scenario: install from an on-disk registry, edit locally, diff
//!
//! Steps:
//! 1. Install `card` into an empty project
//! 2. Diff reports everything up to date
//! 3. Edit the installed card
//! 4. Diff reports the edit; reinstalling with overwrite restores it

use std::sync::Arc;

use componentry::application::{DiffStatus, DiffUseCase, InstallOptions, InstallUseCase};
use componentry::config::Config;
use componentry::domain::ports::AutoConfirm;
use componentry::domain::services::HunkTag;
use componentry::infrastructure::{LocalFs, LocalRegistry};
use tempfile::TempDir;

use crate::common::*;

struct Setup {
    _registry: TempDir,
    project: TempDir,
    install: InstallUseCase,
    diff: DiffUseCase,
}

fn setup() -> Setup {
    let registry = TempDir::new().unwrap();
    write_registry(registry.path());
    let project = TempDir::new().unwrap();

    let source = Arc::new(LocalRegistry::new(registry.path()));
    let fs = Arc::new(LocalFs::new());
    Setup {
        install: InstallUseCase::new(source.clone(), fs.clone(), Arc::new(AutoConfirm)),
        diff: DiffUseCase::new(source, fs),
        _registry: registry,
        project,
    }
}

#[tokio::test]
async fn scenario_install_edit_diff_restore() {
    let s = setup();
    let mut config = Config::default();
    config.tailwind.css = Some("app/globals.css".to_string());
    let project = config.resolve(s.project.path());

    // Step 1
    let result = s
        .install
        .execute(&project, &InstallOptions::new(["card"]))
        .await
        .unwrap();
    assert_eq!(result.closure, vec!["card", "button", "utils"]);
    assert!(result.written);

    // Step 2
    let report = s.diff.execute(&project, None).await.unwrap();
    assert_eq!(report.entries.len(), 3);
    assert!(!report.has_changes());

    // Step 3
    let card = s.project.path().join("components/ui/card.tsx");
    let installed = std::fs::read_to_string(&card).unwrap();
    let edited = installed.replace("rounded-xl", "rounded-2xl");
    std::fs::write(&card, &edited).unwrap();

    // Step 4
    let report = s.diff.execute(&project, Some("card")).await.unwrap();
    assert_eq!(report.entries.len(), 1);
    let DiffStatus::Changed(changes) = &report.entries[0].status else {
        panic!("expected a change, got {:?}", report.entries[0].status);
    };
    assert_eq!(changes[0].file_path, card);
    assert_eq!(changes[0].additions(), 1);
    assert_eq!(changes[0].deletions(), 1);

    // Unchanged + Added hunks rebuild the file on disk
    let rebuilt: String = changes[0]
        .patch
        .iter()
        .filter(|h| h.tag != HunkTag::Removed)
        .map(|h| h.value.as_str())
        .collect();
    assert_eq!(rebuilt, edited);

    let result = s
        .install
        .execute(&project, &InstallOptions::new(["card"]).with_overwrite(true))
        .await
        .unwrap();
    assert!(result.written);
    assert_eq!(std::fs::read_to_string(&card).unwrap(), installed);
}
