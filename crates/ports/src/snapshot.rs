// crates/ports/src/snapshot.rs
use serde::{Deserialize, Serialize};
use treels_shared_kernel::Result;

/// DTO for one record of a serialized tree, as found in the snapshot file.
///
/// `contents` present (even empty) marks a directory; absent marks a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    pub size: u64,
    pub time_modified: i64,
    pub permissions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<NodeRecord>>,
}

/// Port for obtaining the whole snapshot tree.
pub trait TreeSource {
    /// Human-readable origin used in logs and error context.
    fn describe(&self) -> String;

    fn load(&self) -> Result<NodeRecord>;
}
