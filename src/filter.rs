use crate::model::{BookmarkDocument, ReadingListEntry};

/// Entries of every Reading List folder, in document order.
///
/// Other folders are skipped without looking at their children. When several
/// folders carry the Reading List marker their entries are concatenated.
pub fn reading_list_entries(
    doc: &BookmarkDocument,
) -> impl Iterator<Item = &ReadingListEntry> + '_ {
    doc.children
        .iter()
        .filter(|folder| folder.is_reading_list())
        .flat_map(|folder| folder.children.iter())
}
