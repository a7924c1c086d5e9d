// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::value_enum::CliFilter;

/// Top-level CLI arguments parsed via clap.
///
/// clap's own help flag is disabled: `-h` means human-readable sizes, as in `ls`, and
/// `--help` prints the fixed usage text from [`crate::presentation::HELP`].
#[derive(Parser, Debug)]
#[command(
    name = "treels",
    version = crate::VERSION,
    about = "ls over a static JSON snapshot of a directory tree",
    disable_help_flag = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// List all files and directories, including hidden ones
    #[arg(short = 'A')]
    pub all: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    pub long: bool,

    /// Reverse order
    #[arg(short = 'r')]
    pub reverse: bool,

    /// Sort by modification time, oldest first
    #[arg(short = 't')]
    pub time: bool,

    /// Only list files or only list directories
    #[arg(long, value_enum)]
    pub filter: Option<CliFilter>,

    /// Show human-readable sizes (with -l)
    #[arg(short = 'h')]
    pub human_readable: bool,

    /// Show this help message and exit
    #[arg(long)]
    pub help: bool,

    /// Snapshot file to list
    #[arg(long, env = "TREELS_TREE", value_hint = ValueHint::FilePath)]
    pub tree: Option<PathBuf>,

    /// Path inside the snapshot; defaults to the root
    pub path: Option<String>,
}
