//! Target Path Resolver
//!
//! Maps each registry file to its destination inside the consuming project
//! and detects when two files would land on the same path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{normalize_path, ProjectConfig};
use crate::domain::entities::{FileKind, RegistryEntry, RegistryFile, TransformedFile};
use crate::error::{ComponentryError, ComponentryResult};

/// Two registry files resolved to the same destination.
///
/// The first keeps the path; the second is dropped with a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetCollision {
    pub path: PathBuf,
    /// `entry/file` that keeps the path
    pub first: String,
    /// `entry/file` that was dropped
    pub second: String,
}

/// Absolute destination for `file` of `entry`.
pub fn resolve_target_path(
    file: &RegistryFile,
    entry: &RegistryEntry,
    config: &ProjectConfig,
) -> ComponentryResult<PathBuf> {
    let cwd = config.cwd();

    if let Some(target) = file.target.as_deref() {
        let resolved = normalize_path(&cwd.join(target));
        if !resolved.starts_with(cwd) {
            return Err(ComponentryError::PathEscape {
                path: resolved,
                root: cwd.to_path_buf(),
            });
        }
        return Ok(resolved);
    }

    let kind = entry.file_kind(file);
    let paths = &config.resolved_paths;
    let dir = match kind {
        FileKind::Ui => paths.ui.as_ref(),
        FileKind::Component => paths.components.as_ref(),
        FileKind::Hook => paths.hooks.as_ref(),
        FileKind::Lib => paths.lib.as_ref(),
    }
    .ok_or_else(|| ComponentryError::TargetResolution {
        entry: entry.name.clone(),
        file: file.path.clone(),
        message: format!("no directory configured for {} files", kind_label(kind)),
    })?;

    let relative = strip_registry_prefix(&file.path, kind);
    if relative.is_empty() {
        return Err(ComponentryError::TargetResolution {
            entry: entry.name.clone(),
            file: file.path.clone(),
            message: "file path has no file name".to_string(),
        });
    }

    let resolved = normalize_path(&dir.join(relative));
    if !resolved.starts_with(dir) {
        return Err(ComponentryError::PathEscape {
            path: resolved,
            root: dir.clone(),
        });
    }
    Ok(resolved)
}

/// Drop a leading `registry/<style>/` and the kind's own directory segment.
fn strip_registry_prefix(path: &str, kind: FileKind) -> &str {
    let mut rest = path.trim_start_matches("./").trim_start_matches('/');

    if let Some(after) = rest.strip_prefix("registry/") {
        rest = after.split_once('/').map(|(_, tail)| tail).unwrap_or(after);
    }

    if let Some((head, tail)) = rest.split_once('/') {
        if kind.registry_dirs().contains(&head) {
            rest = tail;
        }
    }
    rest
}

fn kind_label(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Ui => "ui",
        FileKind::Component => "component",
        FileKind::Hook => "hook",
        FileKind::Lib => "lib",
    }
}

/// Report every destination claimed by more than one registry file.
pub fn detect_collisions(files: &[TransformedFile]) -> Vec<TargetCollision> {
    let mut owners: HashMap<&Path, String> = HashMap::new();
    let mut collisions = Vec::new();

    for file in files {
        let origin = file.origin();
        match owners.get(file.target_path()) {
            Some(first) if *first != origin => collisions.push(TargetCollision {
                path: file.target_path().to_path_buf(),
                first: first.clone(),
                second: origin,
            }),
            Some(_) => {}
            None => {
                owners.insert(file.target_path(), origin);
            }
        }
    }
    collisions
}

/// Keep the first file for every destination, returning the collisions.
pub fn dedupe_targets(files: Vec<TransformedFile>) -> (Vec<TransformedFile>, Vec<TargetCollision>) {
    let collisions = detect_collisions(&files);
    if collisions.is_empty() {
        return (files, collisions);
    }

    for collision in &collisions {
        tracing::warn!(
            path = %collision.path.display(),
            kept = %collision.first,
            dropped = %collision.second,
            "two registry files target the same path"
        );
    }

    let mut seen: Vec<PathBuf> = Vec::with_capacity(files.len());
    let kept = files
        .into_iter()
        .filter(|file| {
            if seen.iter().any(|p| p == file.target_path()) {
                false
            } else {
                seen.push(file.target_path().to_path_buf());
                true
            }
        })
        .collect();
    (kept, collisions)
}
