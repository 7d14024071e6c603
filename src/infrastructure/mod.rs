//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (local disk, in-memory)
//! - `registry/` - Registry sources (HTTP, local directory)
//! - `confirm` - Interactive install confirmation

pub mod confirm;
pub mod fs;
pub mod registry;

pub use confirm::InteractiveConfirm;
pub use fs::{LocalFs, MemoryFs};
pub use registry::{open_source, HttpRegistry, LocalRegistry};
