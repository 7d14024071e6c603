//! Project configuration for a command run

use std::path::{Path, PathBuf};

use anyhow::Result;

use componentry::config::{load_project, ConfigWarning, ProjectConfig};

/// Load `components.toml` for `cwd` (or the current directory), apply the
/// `--registry` override and resolve aliases.
pub fn load_project_config(
    cwd: Option<&Path>,
    registry: Option<&str>,
    json: bool,
) -> Result<ProjectConfig> {
    let cwd = project_dir(cwd)?;
    let (mut config, warnings) = load_project(&cwd)?;
    if !json {
        print_config_warnings(&warnings);
    }

    if let Some(registry) = registry {
        config.registry = Some(registry.to_string());
    }
    Ok(config.resolve(&cwd))
}

fn project_dir(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    Ok(match cwd {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current.join(dir),
        None => current,
    })
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
