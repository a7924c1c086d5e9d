// crates/domain/src/options.rs
use crate::model::Entry;

/// Entry kind accepted by `--filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    File,
    Dir,
}

impl TypeFilter {
    #[inline]
    pub fn matches(self, entry: &Entry) -> bool {
        match self {
            Self::File => !entry.is_dir(),
            Self::Dir => entry.is_dir(),
        }
    }
}

/// Display switches for one listing call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ListOptions {
    /// `-A`
    pub show_all: bool,
    /// `-l`
    pub long_format: bool,
    /// `-r`
    pub reverse: bool,
    /// `-t`
    pub sort_by_time: bool,
    /// `--filter`
    pub filter: Option<TypeFilter>,
    /// `-h`; only affects long format.
    pub human_readable: bool,
}
