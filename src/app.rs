// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use treels_infra::SnapshotFile;
use treels_shared_kernel::TreeLsError;
use treels_usecase::ListTree;

use crate::{
    cli::Args,
    config::{self, Command},
    presentation,
};

/// Runs one invocation, writing everything user-facing to `out` and flushing it.
///
/// A path that does not resolve is reported on `out` and still counts as success;
/// configuration, snapshot loading and output failures return `Err`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    dispatch(args, out)?;
    presentation::finish(out).context("flushing output")
}

fn dispatch<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = match config::build_command(args).map_err(TreeLsError::from)? {
        Command::Help => return presentation::write_help(out).context("writing help"),
        Command::List(config) => config,
    };

    let source = SnapshotFile::new(&config.snapshot);
    match ListTree::new(&source).run(&config.request) {
        Ok(listing) => presentation::write_listing(out, &listing).context("writing listing"),
        Err(err) => match err.as_domain() {
            Some(domain) => {
                log::debug!("listing failed: {domain}");
                presentation::write_domain_error(out, domain).context("writing error")
            }
            None => Err(err.into()),
        },
    }
}
