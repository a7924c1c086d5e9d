// src/config.rs
use std::path::{Path, PathBuf};

use treels_domain::ListOptions;
use treels_shared_kernel::{PresentationError, PresentationResult};
use treels_usecase::ListRequest;

use crate::cli::Args;

/// Snapshot file name looked up when neither `--tree` nor `TREELS_TREE` is given.
pub const DEFAULT_SNAPSHOT: &str = "example_structure.json";

/// What the binary should do for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `--help`: print usage, load nothing.
    Help,
    List(Config),
}

/// Fully resolved settings for a listing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub snapshot: PathBuf,
    pub request: ListRequest,
}

impl From<&Args> for ListOptions {
    fn from(args: &Args) -> Self {
        Self {
            show_all: args.all,
            long_format: args.long,
            reverse: args.reverse,
            sort_by_time: args.time,
            filter: args.filter.map(Into::into),
            human_readable: args.human_readable,
        }
    }
}

impl From<&Args> for ListRequest {
    fn from(args: &Args) -> Self {
        Self { path: args.path.clone().unwrap_or_default(), options: ListOptions::from(args) }
    }
}

/// Places searched for [`DEFAULT_SNAPSHOT`]: next to the executable, then the
/// working directory.
pub fn default_candidates() -> Vec<PathBuf> {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_SNAPSHOT)));
    let in_cwd = std::env::current_dir().ok().map(|cwd| cwd.join(DEFAULT_SNAPSHOT));
    beside_exe.into_iter().chain(in_cwd).collect()
}

/// Picks the snapshot to load: the explicit path if any, else the first existing
/// candidate.
///
/// # Errors
///
/// Returns [`PresentationError::SnapshotNotFound`] when nothing explicit was given and
/// no candidate exists.
pub fn locate_snapshot(explicit: Option<&Path>, candidates: &[PathBuf]) -> PresentationResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .cloned()
        .ok_or_else(|| PresentationError::SnapshotNotFound {
            searched: candidates
                .iter()
                .map(|c| c.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Convert parsed CLI arguments into a [`Command`], searching `candidates` for a
/// default snapshot.
///
/// # Errors
///
/// Returns `Err` when no snapshot can be located.
pub fn build_command_with(args: &Args, candidates: &[PathBuf]) -> PresentationResult<Command> {
    if args.help {
        return Ok(Command::Help);
    }
    let snapshot = locate_snapshot(args.tree.as_deref(), candidates)?;
    log::debug!("using snapshot {}", snapshot.display());
    Ok(Command::List(Config { snapshot, request: ListRequest::from(args) }))
}

/// [`build_command_with`] over [`default_candidates`].
///
/// # Errors
///
/// See [`build_command_with`].
pub fn build_command(args: &Args) -> PresentationResult<Command> {
    build_command_with(args, &default_candidates())
}
