//! Install Use Case
//!
//! Resolve, fetch, transform and write registry entries into a project.

mod options;
mod result;
mod use_case;


pub use options::InstallOptions;
pub use result::{FileAction, InstallResult, PlannedFile};
pub use use_case::InstallUseCase;
