//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ComponentryError, ComponentryResult};

use super::types::{Config, CONFIG_FILE_NAME};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ComponentryResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ComponentryError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `components.toml` from `cwd`, or defaults when there is none.
///
/// Environment overrides are applied in both cases. A config file that
/// exists but does not parse is an error.
pub fn load_project(cwd: &Path) -> ComponentryResult<(Config, Vec<ConfigWarning>)> {
    let path = cwd.join(CONFIG_FILE_NAME);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no project config, using defaults");
        return Ok((with_env_overrides(Config::default()), Vec::new()));
    }

    let (config, warnings) = load_with_warnings(&path)?;
    for warning in &warnings {
        tracing::warn!(key = %warning.key, line = ?warning.line, "unknown config key");
    }
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (COMPONENTRY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // COMPONENTRY_REGISTRY_URL, then the legacy REGISTRY_URL
    let registry = lookup("COMPONENTRY_REGISTRY_URL").or_else(|| lookup("REGISTRY_URL"));
    if let Some(url) = registry.filter(|u| !u.trim().is_empty()) {
        config.registry = Some(url.trim().to_string());
    }

    // COMPONENTRY_STYLE
    if let Some(style) = lookup("COMPONENTRY_STYLE").filter(|s| !s.trim().is_empty()) {
        config.style = style.trim().to_string();
    }

    config
}

/// First line that assigns `key`, ignoring tables and comments.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "style",
    "icon_library",
    "registry",
    "tailwind",
    "css",
    "base_color",
    "css_variables",
    "aliases",
    "components",
    "utils",
    "ui",
    "lib",
    "hooks",
    "paths",
];

/// Closest known key within an edit distance of two.
pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(dist, _)| *dist <= 2)
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, known)| known.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
