// src/presentation.rs
use std::io::Write;

use treels_shared_kernel::{DomainError, InfraResult};
use treels_usecase::ListingOutput;

/// Fixed usage summary printed for `--help`.
pub const HELP: &str = "\
Usage: treels [OPTIONS] [PATH]

-A:      List all files and directories, including hidden ones
-l:      Use a long listing format
-r:      Reverse order
-t:      Sort by modification time, oldest first
-h:      Show human-readable sizes (with -l)
--filter {file, dir}: Filter the output based on the given option (file or dir)
--tree FILE: Snapshot to list (default: $TREELS_TREE, then example_structure.json)
-V, --version: Print version and exit
--help:  Show this help message and exit
";

pub fn write_help<W: Write>(out: &mut W) -> InfraResult<()> {
    out.write_all(HELP.as_bytes())?;
    Ok(())
}

pub fn write_listing<W: Write>(out: &mut W, listing: &ListingOutput) -> InfraResult<()> {
    for line in &listing.lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// `ls`-style diagnostic; goes to the same stream as the listing.
pub fn write_domain_error<W: Write>(out: &mut W, err: &DomainError) -> InfraResult<()> {
    writeln!(out, "error: {err}")?;
    Ok(())
}

/// Pushes buffered output to the terminal; a failure here is a failed run.
pub fn finish<W: Write>(out: &mut W) -> InfraResult<()> {
    out.flush()?;
    Ok(())
}
