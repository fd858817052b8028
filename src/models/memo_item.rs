/// One blank-line-separated block of a memo. Transient, never persisted:
/// tasks are derived from selected items by `db::queries::insert_tasks_from_selection`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoItem {
    /// 1-based position among the blocks.
    pub index: usize,
    /// First line of the block, capped at 120 characters.
    pub title: String,
    /// Remaining lines joined with single spaces, capped at 500 characters.
    pub details: String,
}
