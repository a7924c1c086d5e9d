use crate::value_objects::{EntryName, FileSize, ModificationTime, Permissions};

/// Metadata every snapshot record carries, regardless of kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    pub name: EntryName,
    pub size: FileSize,
    pub time_modified: ModificationTime,
    pub permissions: Permissions,
}

impl EntryMeta {
    pub fn new(
        name: impl Into<EntryName>,
        size: u64,
        time_modified: i64,
        permissions: impl Into<Permissions>,
    ) -> Self {
        Self {
            name: name.into(),
            size: FileSize::new(size),
            time_modified: ModificationTime::from_unix(time_modified),
            permissions: permissions.into(),
        }
    }
}

/// One node of the snapshot tree.
///
/// The kind is fixed when the tree is built: a record with a `contents` array is a
/// directory even if the array is empty, and the stored permission flag plays no part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File(EntryMeta),
    Directory { meta: EntryMeta, children: Vec<Entry> },
}

impl Entry {
    pub fn file(meta: EntryMeta) -> Self {
        Self::File(meta)
    }

    pub fn directory(meta: EntryMeta, children: Vec<Entry>) -> Self {
        Self::Directory { meta, children }
    }

    pub fn meta(&self) -> &EntryMeta {
        match self {
            Self::File(meta) | Self::Directory { meta, .. } => meta,
        }
    }

    pub fn name(&self) -> &EntryName {
        &self.meta().name
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Children in declared order; `None` for files.
    pub fn children(&self) -> Option<&[Entry]> {
        match self {
            Self::File(_) => None,
            Self::Directory { children, .. } => Some(children),
        }
    }

    /// First child whose name matches exactly.
    pub fn child(&self, name: &str) -> Option<&Entry> {
        self.children()?.iter().find(|child| child.name().as_str() == name)
    }
}
