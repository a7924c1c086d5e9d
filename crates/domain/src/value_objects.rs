//! Value objects re-exported from the shared kernel.

pub use treels_shared_kernel::value_objects::{EntryName, FileSize, ModificationTime, Permissions};
