// crates/shared-kernel/src/value_objects/file_info.rs
use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Name of one entry as stored in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct EntryName(String);

impl EntryName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dot-prefixed names are hidden unless `-A` is given.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.0.starts_with('.')
    }
}

impl From<String> for EntryName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for EntryName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for EntryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}
impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FileSize {
    const UNITS: [&'static str; 5] = ["B", "KB", "MB", "GB", "TB"];

    /// Returns a base-2 human readable representation (B, KB, MB, GB, TB).
    ///
    /// Plain bytes keep their integer value; every larger unit is printed with one
    /// decimal digit. Values past 1024 TB stay in TB.
    pub fn to_human(self) -> String {
        let bytes = self.bytes();
        if bytes < 1024 {
            return format!("{bytes} B");
        }

        let mut value = bytes as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < Self::UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        format!("{value:.1} {}", Self::UNITS[unit])
    }
}

/// Stored permission string such as `drwxr-xr-x`.
///
/// Only the trailing rwx triad is meaningful; the leading type flag is re-derived from
/// the entry kind when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Permissions(String);

impl Permissions {
    const TRIAD_LEN: usize = 9;

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last nine characters of the stored string, or all of it when shorter.
    pub fn triad(&self) -> &str {
        let len = self.0.chars().count();
        if len <= Self::TRIAD_LEN {
            return &self.0;
        }
        self.0
            .char_indices()
            .nth(len - Self::TRIAD_LEN)
            .map_or(self.0.as_str(), |(idx, _)| &self.0[idx..])
    }

    /// Mode column for `ls -l`: type flag followed by the triad.
    pub fn mode(&self, is_dir: bool) -> String {
        let flag = if is_dir { 'd' } else { '-' };
        let mut mode = String::with_capacity(1 + Self::TRIAD_LEN);
        mode.push(flag);
        mode.push_str(self.triad());
        mode
    }
}

impl From<String> for Permissions {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Permissions {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix timestamp in seconds, as recorded in the snapshot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct ModificationTime(i64);

impl ModificationTime {
    /// `ls -l` timestamp layout: `Nov  4 09:05`.
    pub const LS_FORMAT: &'static str = "%b %e %H:%M";

    pub const fn from_unix(seconds: i64) -> Self {
        Self(seconds)
    }

    pub const fn unix_seconds(self) -> i64 {
        self.0
    }

    /// Converts to a zoned timestamp, `None` when outside chrono's range.
    pub fn in_zone<Tz: TimeZone>(self, tz: &Tz) -> Option<DateTime<Tz>> {
        DateTime::from_timestamp(self.0, 0).map(|utc| utc.with_timezone(tz))
    }

    /// Renders in `tz` using [`Self::LS_FORMAT`]; out-of-range values fall back to the
    /// raw seconds.
    pub fn format_in<Tz>(self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.in_zone(tz)
            .map_or_else(|| self.0.to_string(), |dt| dt.format(Self::LS_FORMAT).to_string())
    }
}

impl From<i64> for ModificationTime {
    fn from(seconds: i64) -> Self {
        Self::from_unix(seconds)
    }
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
