//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InstallUseCase` - resolve, fetch, transform and write entries
//! - `DiffUseCase` - compare installed entries with the registry
//!
//! ## Services
//!
//! - `fetcher` - index loading and concurrent content fetching
//! - `render` - transform context and per-file rendering

pub mod diff;
pub mod fetcher;
pub mod install;
pub mod render;
pub mod stage;

pub use diff::{diff_entry, diff_files, DiffFailure, DiffReport, DiffStatus, DiffUseCase, EntryDiff};
pub use fetcher::{fetch, fetch_entry, load_index};
pub use install::{FileAction, InstallOptions, InstallResult, InstallUseCase, PlannedFile};
pub use render::{render_entries, RenderInputs};
pub use stage::{InstallStage, StageTracker};
