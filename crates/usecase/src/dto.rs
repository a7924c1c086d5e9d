use treels_domain::ListOptions;

/// What to list and how.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    /// Slash-separated path inside the snapshot; empty lists the root.
    pub path: String,
    pub options: ListOptions,
}

/// Rendered `ls` lines, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOutput {
    pub lines: Vec<String>,
}
