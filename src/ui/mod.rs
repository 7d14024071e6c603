//! Terminal output for the CLI
//!
//! Text views render to `String` so they can be tested without a terminal;
//! `json` writes NDJSON events for `--json` runs.

pub mod components;
pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;

pub use context::UiContext;
