//! Configuration module for Componentry
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (COMPONENTRY_*)
//! 3. Project config (`components.toml` in the working directory)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_project, ConfigWarning};
pub use types::{
    normalize_path, resolve_alias, AliasConfig, Config, ProjectConfig, ResolvedPaths,
    TailwindConfig, CONFIG_FILE_NAME, DEFAULT_REGISTRY_URL,
};
