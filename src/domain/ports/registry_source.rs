//! RegistrySource port - where index and entry documents come from
//!
//! Documents are returned as raw JSON; validation happens in the domain.

use async_trait::async_trait;
use thiserror::Error;

use crate::error::ComponentryError;

/// Errors from a registry transport
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("not found at {url}")]
    NotFound { url: String },

    #[error("unauthorized (401) at {url}")]
    Unauthorized { url: String },

    #[error("forbidden (403) at {url}")]
    Forbidden { url: String },

    #[error("registry responded {status} at {url}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("invalid JSON from {url}: {message}")]
    InvalidJson { url: String, message: String },

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Wrap into the crate error, naming the resource being fetched.
    pub fn for_resource(self, resource: impl Into<String>) -> ComponentryError {
        ComponentryError::Fetch {
            resource: resource.into(),
            message: self.to_string(),
        }
    }
}

/// A registry that can serve its index and per-entry documents
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Human-readable location (URL or directory)
    fn location(&self) -> &str;

    /// The catalogue document (`index.json`)
    async fn fetch_index(&self) -> Result<serde_json::Value, SourceError>;

    /// One entry document with inline file content (`styles/{style}/{name}.json`)
    async fn fetch_entry(&self, style: &str, name: &str) -> Result<serde_json::Value, SourceError>;
}
