pub mod entities;

pub use entities::{Entry, EntryMeta};
