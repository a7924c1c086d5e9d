//! Snapshot fixtures written to temporary directories.

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;

/// The `interpreter` tree used throughout the listing tests.
pub fn interpreter_tree() -> Value {
    json!({
        "name": "interpreter",
        "size": 4096,
        "time_modified": 1699957865,
        "permissions": "-rw-r--r--",
        "contents": [
            {"name": ".gitignore", "size": 8911, "time_modified": 1699941437, "permissions": "drwxr-xr-x"},
            {"name": "LICENSE", "size": 1071, "time_modified": 1699941437, "permissions": "drwxr-xr-x"},
            {"name": "README.md", "size": 83, "time_modified": 1699941437, "permissions": "drwxr-xr-x"},
            {
                "name": "ast",
                "size": 4096,
                "time_modified": 1699957739,
                "permissions": "-rw-r--r--",
                "contents": [
                    {"name": "go.mod", "size": 225, "time_modified": 1699957780, "permissions": "-rw-r--r--"},
                    {"name": "ast.go", "size": 837, "time_modified": 1699957719, "permissions": "drwxr-xr-x"}
                ]
            }
        ]
    })
}

/// A snapshot file on disk; removed when dropped.
pub struct SnapshotFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl SnapshotFixture {
    pub fn write(name: &str, body: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(name);
        fs::write(&path, body).expect("write snapshot");
        Self { _dir: dir, path }
    }

    pub fn interpreter() -> Self {
        Self::write("tree.json", &interpreter_tree().to_string())
    }

    /// The binary pointed at this snapshot, with a pinned time zone and no
    /// inherited snapshot variable.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_treels"));
        cmd.env("TZ", "UTC").env_remove("TREELS_TREE").arg("--tree").arg(&self.path);
        cmd
    }
}
