// src/version.rs
//! Version string reported by `treels --version`.

/// Taken from `CARGO_PKG_VERSION` so it tracks the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
