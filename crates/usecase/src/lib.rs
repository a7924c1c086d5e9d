//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: load a snapshot through a port and list one path of it
//! - [`dto`]: request/response types for the use-case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{ListRequest, ListingOutput};
pub use orchestrator::{ListTree, record_to_entry};
