use crate::model::ReadingListEntry;
use std::io::{self, Write};

pub const DOCUMENT_HEADER: &str = "# Bookmarks\n\n";

pub fn entry_to_markdown(entry: &ReadingListEntry) -> String {
    let mut md = format!("## {}\n\n### {}\n\n", entry.title(), entry.url_string);
    let preview = entry.preview_text();
    if !preview.is_empty() {
        md.push_str(&format!("> {preview}\n\n"));
    }
    md
}

/// Writes the document header followed by one section per entry.
///
/// Returns the number of entries written.
pub fn write_markdown<'a, W, I>(out: &mut W, entries: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a ReadingListEntry>,
{
    out.write_all(DOCUMENT_HEADER.as_bytes())?;
    let mut written = 0;
    for entry in entries {
        out.write_all(entry_to_markdown(entry).as_bytes())?;
        written += 1;
    }
    Ok(written)
}
