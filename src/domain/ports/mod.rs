//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirm;
pub mod file_system;
pub mod registry_source;

pub use confirm::{AutoConfirm, Confirm, Decline, PendingWrite};
pub use file_system::{FileSystem, FsError, FsResult};
pub use registry_source::{RegistrySource, SourceError};
