use crate::error::{Error, Result};
use crate::model::BookmarkDocument;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Decodes a binary or XML property list into a [`BookmarkDocument`].
///
/// Unknown keys are ignored and missing keys take their default value. A key
/// whose value has the wrong type fails the whole decode.
pub fn from_reader<R: Read + Seek>(
    reader: R,
) -> std::result::Result<BookmarkDocument, plist::Error> {
    plist::from_reader(reader)
}

pub fn from_bytes(bytes: &[u8]) -> std::result::Result<BookmarkDocument, plist::Error> {
    plist::from_bytes(bytes)
}

pub fn from_path(path: &Path) -> Result<BookmarkDocument> {
    let file = File::open(path).map_err(|e| Error::io("open bookmarks", path, e))?;
    from_reader(BufReader::new(file)).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}
