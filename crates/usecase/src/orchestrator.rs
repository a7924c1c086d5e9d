use std::fmt::Display;

use chrono::{Local, TimeZone};
use treels_domain::{Entry, EntryMeta, Lister};
use treels_ports::snapshot::{NodeRecord, TreeSource};
use treels_shared_kernel::{ErrorContext, Result};

use crate::dto::{ListRequest, ListingOutput};

/// Loads a tree through a [`TreeSource`] and lists one path of it.
pub struct ListTree<'a, Tz = Local> {
    source: &'a dyn TreeSource,
    lister: Lister<Tz>,
}

impl<'a> ListTree<'a, Local> {
    pub fn new(source: &'a dyn TreeSource) -> Self {
        Self { source, lister: Lister::new() }
    }
}

impl<'a, Tz> ListTree<'a, Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn with_time_zone(source: &'a dyn TreeSource, tz: Tz) -> Self {
        Self { source, lister: Lister::with_time_zone(tz) }
    }

    /// # Errors
    ///
    /// Infrastructure errors from the source, wrapped with its description, or
    /// [`treels_shared_kernel::DomainError::PathNotFound`] when the path does not resolve.
    pub fn run(&self, request: &ListRequest) -> Result<ListingOutput> {
        let tree = self.load_tree()?;
        let lines = self.lister.list(&tree, &request.path, &request.options)?;
        Ok(ListingOutput { lines })
    }

    fn load_tree(&self) -> Result<Entry> {
        let record = self
            .source
            .load()
            .with_context(|| format!("loading snapshot {}", self.source.describe()))?;
        log::debug!("loaded snapshot {} (root '{}')", self.source.describe(), record.name);
        Ok(record_to_entry(record))
    }
}

/// Converts the serialized record into the domain tree, fixing each node's kind.
pub fn record_to_entry(record: NodeRecord) -> Entry {
    let meta = EntryMeta::new(record.name, record.size, record.time_modified, record.permissions);
    match record.contents {
        Some(children) => {
            Entry::directory(meta, children.into_iter().map(record_to_entry).collect())
        }
        None => Entry::file(meta),
    }
}
