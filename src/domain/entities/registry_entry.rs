//! RegistryEntry entity - one installable unit in the registry
//!
//! Entries come out of index validation. Their files may carry content
//! inline or leave it to be fetched later from the entry's own document.

use indexmap::IndexMap;
use std::fmt;

/// token name → value, in declaration order
pub type TokenMap = IndexMap<String, String>;

/// scheme name (`light`, `dark`, …) → tokens
pub type SchemeTokens = IndexMap<String, TokenMap>;

/// Kind of registry entry (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// UI primitive (`registry:ui`)
    Ui,
    /// Composite block made of several components (`registry:block`)
    Block,
    /// Hook or utility module (`registry:hook`, `registry:lib`)
    Hook,
    /// Style preset or palette (`registry:style`)
    Style,
}

impl ItemType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "registry:ui" => Some(ItemType::Ui),
            "registry:block" => Some(ItemType::Block),
            "registry:hook" | "registry:lib" => Some(ItemType::Hook),
            "registry:style" | "registry:theme" => Some(ItemType::Style),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Ui => "registry:ui",
            ItemType::Block => "registry:block",
            ItemType::Hook => "registry:hook",
            ItemType::Style => "registry:style",
        }
    }

    /// Installable types must ship at least one file.
    pub fn requires_files(&self) -> bool {
        !matches!(self, ItemType::Style)
    }

    /// File kind used when a file does not declare its own.
    pub fn default_file_kind(&self) -> FileKind {
        match self {
            ItemType::Ui => FileKind::Ui,
            ItemType::Block => FileKind::Component,
            ItemType::Hook => FileKind::Hook,
            ItemType::Style => FileKind::Lib,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory hint for where a file lands in the consuming project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Ui,
    Component,
    Hook,
    Lib,
}

impl FileKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "registry:ui" => Some(FileKind::Ui),
            "registry:component" | "registry:block" | "registry:page" => {
                Some(FileKind::Component)
            }
            "registry:hook" => Some(FileKind::Hook),
            "registry:lib" => Some(FileKind::Lib),
            _ => None,
        }
    }

    /// Leading registry directory segments conventionally used for this kind.
    pub fn registry_dirs(&self) -> &'static [&'static str] {
        match self {
            FileKind::Ui => &["ui"],
            FileKind::Component => &["components", "blocks", "block"],
            FileKind::Hook => &["hooks"],
            FileKind::Lib => &["lib"],
        }
    }
}

/// A file shipped by a registry entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryFile {
    /// Registry-relative path, e.g. `ui/button.tsx`
    pub path: String,
    /// Inline content; `None` until fetched
    pub content: Option<String>,
    /// Explicit kind; falls back to the entry's default
    pub kind: Option<FileKind>,
    /// Explicit project-relative destination
    pub target: Option<String>,
}

impl RegistryFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: Some(content.into()),
            kind: None,
            target: None,
        }
    }

    pub fn lazy(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: None,
            kind: None,
            target: None,
        }
    }

    pub fn with_kind(mut self, kind: FileKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }
}

/// A base-layer requirement: `selector { @apply <apply>; }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseRule {
    pub selector: String,
    pub apply: String,
}

impl BaseRule {
    pub fn new(selector: impl Into<String>, apply: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            apply: apply.into(),
        }
    }
}

/// One named, installable unit in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub name: String,
    pub item_type: ItemType,
    pub files: Vec<RegistryFile>,
    /// External runtime packages (opaque)
    pub dependencies: Vec<String>,
    /// Names of other entries this one needs
    pub registry_dependencies: Vec<String>,
    pub css_vars: SchemeTokens,
    pub base_layer: Vec<BaseRule>,
    /// Style presets only: `cn-*` token → concrete classes
    pub style_map: IndexMap<String, String>,
    /// Palettes only: scheme → token → utility colour (`slate-950`)
    pub inline_colors: SchemeTokens,
}

impl RegistryEntry {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            item_type,
            files: Vec::new(),
            dependencies: Vec::new(),
            registry_dependencies: Vec::new(),
            css_vars: SchemeTokens::new(),
            base_layer: Vec::new(),
            style_map: IndexMap::new(),
            inline_colors: SchemeTokens::new(),
        }
    }

    pub fn with_file(mut self, file: RegistryFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn with_registry_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry_dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_css_vars(mut self, scheme: &str, tokens: &[(&str, &str)]) -> Self {
        let map = self.css_vars.entry(scheme.to_string()).or_default();
        for (k, v) in tokens {
            map.insert((*k).to_string(), (*v).to_string());
        }
        self
    }

    pub fn with_base_rule(mut self, rule: BaseRule) -> Self {
        self.base_layer.push(rule);
        self
    }

    /// Kind of a file, falling back to this entry's default.
    pub fn file_kind(&self, file: &RegistryFile) -> FileKind {
        file.kind.unwrap_or_else(|| self.item_type.default_file_kind())
    }

    /// True when every file already has content.
    pub fn is_fully_loaded(&self) -> bool {
        self.files.iter().all(RegistryFile::has_content)
    }
}
