//! Componentry - registry-driven component installer
//!
//! Componentry resolves UI components from a registry (index plus per-entry
//! documents), fetches their sources, rewrites them for the target project
//! (import aliases, style tokens, icon library) and merges the design tokens
//! they need into the project's global stylesheet. It can also diff installed
//! components against the registry.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{DiffReport, DiffUseCase, InstallOptions, InstallResult, InstallUseCase};
pub use config::{Config, ProjectConfig};
pub use error::{ComponentryError, ComponentryResult, SchemaError};
