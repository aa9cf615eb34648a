use crate::decode;
use crate::error::{Error, Result};
use crate::filter::reading_list_entries;
use crate::locate::Locations;
use crate::model::BookmarkDocument;
use crate::progress;
use crate::render;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub entries: usize,
    pub output: PathBuf,
}

/// Reads the bookmarks file and writes the Reading List as Markdown.
///
/// The output is only created once the bookmarks decode successfully. A write
/// failure may leave a partial file behind.
pub fn export_reading_list(locations: &Locations) -> Result<ExportSummary> {
    debug!(bookmarks = %locations.bookmarks.display(), "reading bookmarks");
    let spinner = progress::spinner("Reading bookmarks…");
    let doc = decode::from_path(&locations.bookmarks);
    progress::finish(spinner);
    let doc = doc?;
    debug!(
        folders = doc.children.len(),
        version = doc.format_version,
        "decoded bookmarks"
    );

    let entries = write_output(&doc, &locations.output)?;
    info!(entries, output = %locations.output.display(), "wrote reading list");
    Ok(ExportSummary {
        entries,
        output: locations.output.clone(),
    })
}

/// Renders `doc` into `out`, returning the number of entries written.
pub fn render_document<W: Write>(
    doc: &BookmarkDocument,
    out: &mut W,
) -> std::io::Result<usize> {
    for folder in doc.children.iter().filter(|f| f.is_reading_list()) {
        debug!(title = %folder.title, entries = folder.children.len(), "found reading list");
    }
    let entries = reading_list_entries(doc).inspect(|entry| {
        trace!(
            url = %entry.url_string,
            added = %entry.list_metadata.date_added().format(&Rfc3339).unwrap_or_default(),
            "entry"
        );
    });
    render::write_markdown(out, entries)
}

fn write_output(doc: &BookmarkDocument, path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|e| Error::io("create output", path, e))?;
    let mut writer = BufWriter::new(file);
    let entries =
        render_document(doc, &mut writer).map_err(|e| Error::io("write output", path, e))?;
    writer
        .into_inner()
        .map_err(|e| Error::io("flush output", path, e.into_error()))?;
    Ok(entries)
}
