//! Configuration type definitions

use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ComponentryResult;

use super::loader::{self, ConfigWarning};

/// Name of the project config file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "components.toml";

/// Default registry, overridable by file, environment and CLI flag.
pub const DEFAULT_REGISTRY_URL: &str = "https://ui.shadcn.com/r";

/// Stylesheet and token settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailwindConfig {
    /// Global stylesheet, relative to the project root
    #[serde(default)]
    pub css: Option<String>,

    /// Palette entry used for tokens
    #[serde(default = "default_base_color")]
    pub base_color: String,

    /// Emit tokens as CSS variables (otherwise inline palette colours)
    #[serde(default = "default_true")]
    pub css_variables: bool,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            css: None,
            base_color: default_base_color(),
            css_variables: true,
        }
    }
}

/// Logical import prefixes used by the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    #[serde(default = "default_components_alias")]
    pub components: String,

    #[serde(default = "default_utils_alias")]
    pub utils: String,

    #[serde(default)]
    pub ui: Option<String>,

    #[serde(default)]
    pub lib: Option<String>,

    #[serde(default)]
    pub hooks: Option<String>,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            components: default_components_alias(),
            utils: default_utils_alias(),
            ui: None,
            lib: None,
            hooks: None,
        }
    }
}

impl AliasConfig {
    pub fn ui(&self) -> String {
        self.ui
            .clone()
            .unwrap_or_else(|| format!("{}/ui", self.components.trim_end_matches('/')))
    }

    pub fn lib(&self) -> String {
        self.lib.clone().unwrap_or_else(|| {
            self.utils
                .rsplit_once('/')
                .map(|(parent, _)| parent.to_string())
                .unwrap_or_else(|| "@/lib".to_string())
        })
    }

    pub fn hooks(&self) -> String {
        self.hooks.clone().unwrap_or_else(|| "@/hooks".to_string())
    }
}

/// Contents of `components.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Style preset name
    #[serde(default = "default_style")]
    pub style: String,

    /// Icon library substituted for icon placeholders
    #[serde(default = "default_icon_library")]
    pub icon_library: String,

    /// Registry URL or local directory
    #[serde(default)]
    pub registry: Option<String>,

    #[serde(default)]
    pub tailwind: TailwindConfig,

    #[serde(default)]
    pub aliases: AliasConfig,

    /// Alias prefix → physical directory (relative to the project root)
    #[serde(default = "default_paths")]
    pub paths: IndexMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: default_style(),
            icon_library: default_icon_library(),
            registry: None,
            tailwind: TailwindConfig::default(),
            aliases: AliasConfig::default(),
            paths: default_paths(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ComponentryResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ComponentryResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (COMPONENTRY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Registry location, falling back to the public default
    pub fn registry_location(&self) -> &str {
        self.registry.as_deref().unwrap_or(DEFAULT_REGISTRY_URL)
    }

    /// Resolve aliases against `cwd`, producing the config the pipeline consumes.
    pub fn resolve(self, cwd: &Path) -> ProjectConfig {
        let cwd = normalize_path(cwd);
        let physical = |alias: &str| resolve_alias(alias, &self.paths, &cwd);

        let resolved_paths = ResolvedPaths {
            components: physical(&self.aliases.components),
            ui: physical(&self.aliases.ui()),
            utils: physical(&self.aliases.utils),
            lib: physical(&self.aliases.lib()),
            hooks: physical(&self.aliases.hooks()),
            stylesheet: self.tailwind.css.as_deref().map(|css| normalize_path(&cwd.join(css))),
            cwd,
        };

        ProjectConfig {
            config: self,
            resolved_paths,
        }
    }
}

/// Physical locations derived from the aliases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub cwd: PathBuf,
    pub components: Option<PathBuf>,
    pub ui: Option<PathBuf>,
    pub utils: Option<PathBuf>,
    pub lib: Option<PathBuf>,
    pub hooks: Option<PathBuf>,
    pub stylesheet: Option<PathBuf>,
}

/// Immutable project configuration threaded through the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub config: Config,
    pub resolved_paths: ResolvedPaths,
}

impl ProjectConfig {
    /// Defaults resolved against `cwd` (no config file)
    pub fn default_for(cwd: &Path) -> Self {
        Config::default().resolve(cwd)
    }

    pub fn style(&self) -> &str {
        &self.config.style
    }

    pub fn icon_library(&self) -> &str {
        &self.config.icon_library
    }

    pub fn aliases(&self) -> &AliasConfig {
        &self.config.aliases
    }

    pub fn css_variables(&self) -> bool {
        self.config.tailwind.css_variables
    }

    pub fn base_color(&self) -> &str {
        &self.config.tailwind.base_color
    }

    pub fn cwd(&self) -> &Path {
        &self.resolved_paths.cwd
    }
}

/// Map a logical alias (`@/components/ui`) to a directory under `cwd`.
///
/// The longest matching `[paths]` prefix wins. Plain relative paths are taken
/// as project-relative. Returns `None` when nothing maps the alias.
pub fn resolve_alias(alias: &str, paths: &IndexMap<String, String>, cwd: &Path) -> Option<PathBuf> {
    let best = paths
        .iter()
        .filter(|(prefix, _)| alias.starts_with(prefix.as_str()))
        .max_by_key(|(prefix, _)| prefix.len());

    if let Some((prefix, dir)) = best {
        let rest = alias[prefix.len()..].trim_start_matches('/');
        let mut path = cwd.join(dir);
        if !rest.is_empty() {
            path = path.join(rest);
        }
        return Some(normalize_path(&path));
    }

    if alias.starts_with('@') || alias.starts_with('~') || alias.starts_with('#') {
        return None;
    }
    Some(normalize_path(&cwd.join(alias)))
}

/// Lexically clean a path: drop `.` components and fold `..`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn default_true() -> bool {
    true
}

fn default_style() -> String {
    "new-york".to_string()
}

fn default_icon_library() -> String {
    "lucide".to_string()
}

fn default_base_color() -> String {
    "neutral".to_string()
}

fn default_components_alias() -> String {
    "@/components".to_string()
}

fn default_utils_alias() -> String {
    "@/lib/utils".to_string()
}

fn default_paths() -> IndexMap<String, String> {
    let mut paths = IndexMap::new();
    paths.insert("@/".to_string(), ".".to_string());
    paths
}
