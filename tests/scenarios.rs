//! Scenario tests for Componentry.
//!
//! Scenarios test complete user workflows end-to-end.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/dependency_cycle.rs"]
mod dependency_cycle;

#[path = "scenarios/fresh_stylesheet.rs"]
mod fresh_stylesheet;

#[path = "scenarios/install_then_diff.rs"]
mod install_then_diff;
