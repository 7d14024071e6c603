//! Error types for Componentry
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for Componentry operations
pub type ComponentryResult<T> = Result<T, ComponentryError>;

/// A malformed registry entry, reported with the offending field path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}: {message}")]
pub struct SchemaError {
    /// Location of the offending value, e.g. `[3].cssVars.light.background`
    pub path: String,
    pub message: String,
}

impl SchemaError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Main error type for Componentry operations
#[derive(Error, Debug)]
pub enum ComponentryError {
    /// A registry entry failed validation
    #[error("invalid registry entry at {0}")]
    Schema(#[from] SchemaError),

    /// The registry index document itself could not be understood
    #[error("registry index is unparsable: {message}")]
    IndexUnparsable { message: String },

    /// A requested name or dependency is absent from the index
    #[error("{}", unknown_dependency_message(.name, .referrer.as_deref()))]
    UnknownDependency {
        name: String,
        referrer: Option<String>,
    },

    /// Network or IO failure while retrieving registry content
    #[error("failed to fetch '{resource}': {message}")]
    Fetch { resource: String, message: String },

    /// A file could not be mapped to a destination inside the project
    #[error("cannot resolve target for '{file}' of entry '{entry}': {message}")]
    TargetResolution {
        entry: String,
        file: String,
        message: String,
    },

    /// The configured base palette is not in the registry
    #[error("palette '{name}' not found in registry (expected a registry:style entry)")]
    PaletteNotFound { name: String },

    /// The global stylesheet could not be parsed
    #[error("stylesheet parse error at line {line}: {message}")]
    StylesheetParse { line: usize, message: String },

    /// Project configuration is invalid
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Path escapes project boundary (security issue)
    #[error("path '{path}' escapes project boundary '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// File system port error
    #[error("{0}")]
    FileSystem(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Install was declined at the confirmation prompt
    #[error("install aborted by user")]
    Aborted,
}

fn unknown_dependency_message(name: &str, referrer: Option<&str>) -> String {
    match referrer {
        Some(parent) => format!("unknown dependency '{}' (required by '{}')", name, parent),
        None => format!("unknown registry entry '{}'", name),
    }
}

impl ComponentryError {
    /// Name of the entry or resource the error is about, when there is one.
    pub fn subject(&self) -> Option<&str> {
        match self {
            ComponentryError::UnknownDependency { name, .. } => Some(name),
            ComponentryError::Fetch { resource, .. } => Some(resource),
            ComponentryError::TargetResolution { entry, .. } => Some(entry),
            ComponentryError::PaletteNotFound { name } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_dependency_with_referrer() {
        let err = ComponentryError::UnknownDependency {
            name: "popover".to_string(),
            referrer: Some("combobox".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "unknown dependency 'popover' (required by 'combobox')"
        );
    }

    #[test]
    fn test_error_display_unknown_requested_entry() {
        let err = ComponentryError::UnknownDependency {
            name: "buton".to_string(),
            referrer: None,
        };
        assert_eq!(err.to_string(), "unknown registry entry 'buton'");
    }

    #[test]
    fn test_error_display_schema() {
        let err: ComponentryError =
            SchemaError::new("[2].cssVars.light.background", "expected string").into();
        assert_eq!(
            err.to_string(),
            "invalid registry entry at [2].cssVars.light.background: expected string"
        );
    }

    #[test]
    fn test_subject_names_fetch_resource() {
        let err = ComponentryError::Fetch {
            resource: "button".to_string(),
            message: "timed out".to_string(),
        };
        assert_eq!(err.subject(), Some("button"));
    }
}
