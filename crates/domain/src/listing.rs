//! Path resolution, selection, arrangement and rendering.

pub mod arrange;
pub mod render;
pub mod resolve;
pub mod select;

use std::fmt::Display;

use chrono::{Local, TimeZone};
use treels_shared_kernel::DomainResult;

pub use arrange::arrange;
pub use render::Renderer;
pub use resolve::{Resolution, resolve};
pub use select::{Row, select};

use crate::{model::Entry, options::ListOptions};

/// Runs the whole listing pipeline against a loaded tree.
///
/// Holds no state besides the time zone, so one `Lister` can serve any number of
/// calls over the same tree.
#[derive(Debug, Clone)]
pub struct Lister<Tz = Local> {
    tz: Tz,
}

impl Lister<Local> {
    pub fn new() -> Self {
        Self { tz: Local }
    }
}

impl Default for Lister<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz> Lister<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn with_time_zone(tz: Tz) -> Self {
        Self { tz }
    }

    /// Lists `path` under `root` as `ls` would, one string per output line.
    ///
    /// # Errors
    ///
    /// Returns [`treels_shared_kernel::DomainError::PathNotFound`] when `path` does not
    /// resolve; no lines are produced in that case.
    pub fn list(&self, root: &Entry, path: &str, options: &ListOptions) -> DomainResult<Vec<String>> {
        let resolution = resolve(root, path)?;
        let rows = arrange(select(&resolution), options);
        log::debug!("listing '{path}': {} row(s) after arrange", rows.len());
        Ok(Renderer::new(self.tz.clone(), options).lines(&rows))
    }
}
