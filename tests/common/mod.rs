// tests/common/mod.rs
//! Shared helpers for CLI tests.

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
