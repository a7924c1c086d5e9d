// crates/infra/src/snapshot.rs
use std::path::{Path, PathBuf};

use treels_ports::snapshot::{NodeRecord, TreeSource};
use treels_shared_kernel::Result;

use crate::persistence::FileReader;

/// Serialization formats a snapshot file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl SnapshotFormat {
    /// Picks a format from the file extension; anything unrecognised is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase) {
            #[cfg(feature = "yaml")]
            Some(ext) if ext == "yaml" || ext == "yml" => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Decodes a whole tree from `bytes`.
    pub fn parse(self, bytes: &[u8]) -> Result<NodeRecord> {
        match self {
            Self::Json => Ok(serde_json::from_slice(bytes)?),
            #[cfg(feature = "yaml")]
            Self::Yaml => Ok(serde_yaml::from_slice(bytes)?),
        }
    }
}

/// Snapshot stored in a file on disk.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
    format: SnapshotFormat,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = SnapshotFormat::from_path(&path);
        Self { path, format }
    }
}

impl TreeSource for SnapshotFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<NodeRecord> {
        log::debug!("loading {:?} snapshot from {}", self.format, self.path.display());
        let bytes = FileReader::read_to_end(&self.path)?;
        self.format.parse(&bytes)
    }
}
