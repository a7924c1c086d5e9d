use super::select::Row;
use crate::options::ListOptions;

/// Applies `--filter`, `-t`, `-r` and hidden suppression, in that order.
///
/// The time sort is stable, so entries sharing a timestamp keep their declared order.
pub fn arrange<'a>(mut rows: Vec<Row<'a>>, options: &ListOptions) -> Vec<Row<'a>> {
    if let Some(filter) = options.filter {
        rows.retain(|row| filter.matches(row.entry));
    }
    if options.sort_by_time {
        rows.sort_by_key(|row| row.entry.meta().time_modified);
    }
    if options.reverse {
        rows.reverse();
    }
    if !options.show_all {
        rows.retain(|row| row.pinned || !row.is_hidden());
    }
    rows
}
