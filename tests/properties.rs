//! Property tests for Componentry.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "terminates", "idempotent" and "preserves input".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/closure.rs"]
mod closure;

#[path = "properties/stylesheet.rs"]
mod stylesheet;
