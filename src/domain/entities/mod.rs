//! Domain Entities
//!
//! - `RegistryEntry` - one installable unit from the registry
//! - `RegistryIndex` - the validated catalogue
//! - `ResolvedClosure` - entries needed to install a request
//! - `Palette` - concrete token values for a colour scheme
//! - `TransformedFile` - a registry file rendered for the project

mod closure;
mod palette;
mod registry_entry;
mod registry_index;
mod transformed_file;

pub use closure::ResolvedClosure;
pub use palette::Palette;
pub use registry_entry::{
    BaseRule, FileKind, ItemType, RegistryEntry, RegistryFile, SchemeTokens, TokenMap,
};
pub use registry_index::RegistryIndex;
pub use transformed_file::TransformedFile;
