use treels_shared_kernel::{DomainError, DomainResult};

use crate::model::Entry;

/// Where a requested path landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Listing target: a directory, or the root itself when no path was given.
    Target(&'a Entry),
    /// The path ran into a file. It is listed alone under `./<path>` and is always
    /// shown, hidden or not.
    FileOverride { entry: &'a Entry, display_name: String },
}

/// Walks `path` from `root`, matching one child name per `/`-separated segment.
///
/// Once a file is reached the remaining segments are not consumed: `LICENSE/extra`
/// resolves to `LICENSE` displayed as `./LICENSE/extra`.
///
/// # Errors
///
/// Returns [`DomainError::PathNotFound`] when a segment names no child of the current
/// directory.
pub fn resolve<'a>(root: &'a Entry, path: &str) -> DomainResult<Resolution<'a>> {
    if path.is_empty() {
        return Ok(Resolution::Target(root));
    }

    let mut current = root;
    for segment in path.split('/') {
        if !current.is_dir() {
            log::debug!("'{path}' collapsed onto file '{}'", current.name());
            break;
        }
        current = current
            .child(segment)
            .ok_or_else(|| DomainError::PathNotFound { path: path.to_string() })?;
    }

    if current.is_dir() {
        Ok(Resolution::Target(current))
    } else {
        Ok(Resolution::FileOverride { entry: current, display_name: format!("./{path}") })
    }
}
