use std::fmt::Display;

use chrono::TimeZone;

use super::select::Row;
use crate::options::ListOptions;

/// Formats rows as `ls` lines, with timestamps shown in `tz`.
#[derive(Debug, Clone)]
pub struct Renderer<Tz> {
    tz: Tz,
    long_format: bool,
    human_readable: bool,
}

impl<Tz> Renderer<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(tz: Tz, options: &ListOptions) -> Self {
        Self { tz, long_format: options.long_format, human_readable: options.human_readable }
    }

    pub fn line(&self, row: &Row<'_>) -> String {
        if !self.long_format {
            return row.name.to_string();
        }

        let meta = row.entry.meta();
        let mode = meta.permissions.mode(row.entry.is_dir());
        let size = if self.human_readable {
            meta.size.to_human()
        } else {
            meta.size.bytes().to_string()
        };
        let mtime = meta.time_modified.format_in(&self.tz);
        format!("{mode} {size} {mtime} {}", row.name)
    }

    pub fn lines(&self, rows: &[Row<'_>]) -> Vec<String> {
        rows.iter().map(|row| self.line(row)).collect()
    }
}
