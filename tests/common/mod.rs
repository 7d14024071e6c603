//! Common test utilities for Componentry CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and registry directories plus a CLI runner
//! - Fixtures: a small on-disk registry and project config

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
