//! Domain Layer
//!
//! Registry model and install logic, independent of where the registry
//! lives or how files reach the disk.
//!
//! ## Structure
//!
//! - `entities/` - Registry entries, the index, closures, palettes
//! - `value_objects/` - Immutable value types (content hashes)
//! - `services/` - Validation, resolution, transformation, merging, diffing
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - file and network access goes through ports
//! 2. **Pure Functions** - services are stateless and testable
//! 3. **Ports & Adapters** - infrastructure plugs in behind traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
