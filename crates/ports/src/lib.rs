//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`snapshot`]: the serialized tree record and the port that supplies it
//!
//! The domain and use-case layers only see these traits, never a concrete loader.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod snapshot;
