// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod snapshot;

pub use snapshot::{SnapshotFile, SnapshotFormat};
