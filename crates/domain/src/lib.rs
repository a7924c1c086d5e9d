//! # Domain
//!
//! The listing core: an immutable [`model::Entry`] tree and the pure stages that turn
//! it into `ls` output lines.
//!
//! - [`listing::resolve`]: walk a slash-separated path to a target entry
//! - [`listing::select`]: pick the rows to show for that target
//! - [`listing::arrange`]: type filter, time sort, reverse, hidden suppression
//! - [`listing::render`]: short and long (`-l`) line formatting

#![allow(clippy::multiple_crate_versions)]

pub mod listing;
pub mod model;
pub mod options;
pub mod value_objects;

pub use listing::Lister;
pub use model::{Entry, EntryMeta};
pub use options::{ListOptions, TypeFilter};
