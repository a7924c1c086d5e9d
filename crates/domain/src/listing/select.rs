use super::resolve::Resolution;
use crate::model::Entry;

/// One candidate line of output, borrowing from the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub entry: &'a Entry,
    /// Name shown in the listing; differs from the stored name only for a file override.
    pub name: &'a str,
    /// Set for the file-override row, which skips hidden suppression.
    pub pinned: bool,
}

impl<'a> Row<'a> {
    pub fn plain(entry: &'a Entry) -> Self {
        Self { entry, name: entry.name().as_str(), pinned: false }
    }

    /// Judged on the stored name, never on an override's `./` display name.
    pub fn is_hidden(&self) -> bool {
        self.entry.name().is_hidden()
    }
}

/// Rows for a resolved target: a directory's children, or the entry itself.
///
/// Always returns a new vector of references, so reordering it never touches the
/// tree.
pub fn select<'r>(resolution: &'r Resolution<'_>) -> Vec<Row<'r>> {
    match resolution {
        Resolution::FileOverride { entry, display_name } => {
            vec![Row { entry: *entry, name: display_name.as_str(), pinned: true }]
        }
        Resolution::Target(entry) => match entry.children() {
            Some(children) => children.iter().map(Row::plain).collect(),
            None => vec![Row::plain(*entry)],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryMeta;

    fn file(name: &str) -> Entry {
        Entry::file(EntryMeta::new(name, 1, 0, "-rw-r--r--"))
    }

    #[test]
    fn directory_yields_children_in_order() {
        let dir = Entry::directory(
            EntryMeta::new("d", 0, 0, "drwxr-xr-x"),
            vec![file("b"), file("a"), file("c")],
        );
        let res = Resolution::Target(&dir);
        let names: Vec<_> = select(&res).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = Entry::directory(EntryMeta::new("d", 0, 0, "drwxr-xr-x"), vec![]);
        let res = Resolution::Target(&dir);
        assert!(select(&res).is_empty());
    }

    #[test]
    fn file_root_lists_itself_unpinned() {
        let solo = file(".solo");
        let res = Resolution::Target(&solo);
        let rows = select(&res);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, ".solo");
        assert!(!rows[0].pinned);
    }

    #[test]
    fn file_override_is_pinned_with_display_name() {
        let target = file(".env");
        let res = Resolution::FileOverride { entry: &target, display_name: "./.env".into() };
        let rows = select(&res);
        assert_eq!(rows, vec![Row { entry: &target, name: "./.env", pinned: true }]);
    }

    #[test]
    fn hidden_follows_stored_name_not_display_name() {
        let visible = file("main.go");
        let res = Resolution::FileOverride { entry: &visible, display_name: "./main.go".into() };
        assert!(!select(&res)[0].is_hidden());
        assert!(Row::plain(&file(".git")).is_hidden());
        assert!(!Row::plain(&file("a.b")).is_hidden());
    }
}
