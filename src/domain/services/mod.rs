//! Domain Services
//!
//! Pure business logic that operates on domain entities. Only the
//! stylesheet updater touches I/O, and only through the `FileSystem` port.

pub mod differ;
pub mod index_validator;
pub mod palette_resolver;
pub mod stylesheet;
pub mod target_path;
pub mod transformer;
pub mod tree_resolver;

pub use differ::{Change, Differ, Hunk, HunkTag};
pub use index_validator::{validate, validate_entry, IndexValidation};
pub use palette_resolver::{resolve_palette, DEFAULT_RADIUS};
pub use stylesheet::{
    collect_base_rules, default_base_rules, merge_stylesheet, StylesheetUpdate, StylesheetUpdater,
};
pub use target_path::{dedupe_targets, detect_collisions, resolve_target_path, TargetCollision};
pub use transformer::{TransformContext, Transformer, TransformerPipeline};
pub use tree_resolver::{dependency_name, resolve, BOOTSTRAP_ENTRY};
