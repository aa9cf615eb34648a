use serde::Deserialize;
use std::collections::HashMap;
use std::time::SystemTime;
use time::OffsetDateTime;

/// Folder titles containing this marker hold the Reading List.
pub const READING_LIST_MARKER: &str = "com.apple.ReadingList";

/// Root of `Bookmarks.plist`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BookmarkDocument {
    #[serde(rename = "WebBookmarkUUID")]
    pub uuid: String,
    #[serde(rename = "WebBookmarkFileVersion")]
    pub format_version: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "WebBookmarkType")]
    pub bookmark_type: String,
    #[serde(rename = "Children")]
    pub children: Vec<BookmarkFolder>,
}

/// A top-level grouping such as "BookmarksBar" or "com.apple.ReadingList".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BookmarkFolder {
    #[serde(rename = "WebBookmarkUUID")]
    pub uuid: String,
    #[serde(rename = "WebBookmarkType")]
    pub bookmark_type: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "URLString")]
    pub url_string: String,
    #[serde(rename = "WebBookmarkIdentifier")]
    pub identifier: String,
    #[serde(rename = "Children")]
    pub children: Vec<ReadingListEntry>,
}

impl BookmarkFolder {
    pub fn is_reading_list(&self) -> bool {
        self.title.contains(READING_LIST_MARKER)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadingListEntry {
    #[serde(rename = "WebBookmarkUUID")]
    pub uuid: String,
    #[serde(rename = "WebBookmarkType")]
    pub bookmark_type: String,
    #[serde(rename = "URLString")]
    pub url_string: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(rename = "URIDictionary")]
    pub uri_attributes: HashMap<String, String>,
    #[serde(rename = "ReadingList")]
    pub list_metadata: ReadingListMetadata,
    #[serde(rename = "ReadingListNonSync")]
    pub non_sync_metadata: ReadingListNonSyncMetadata,
}

impl ReadingListEntry {
    /// Display title saved with the page, empty when Safari stored none.
    pub fn title(&self) -> &str {
        self.uri_attributes
            .get("title")
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn preview_text(&self) -> &str {
        &self.list_metadata.preview_text
    }
}

/// Metadata recorded when the page was added to the Reading List.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadingListMetadata {
    #[serde(rename = "DateAdded")]
    pub date_added: Option<plist::Date>,
    #[serde(rename = "PreviewText")]
    pub preview_text: String,
}

impl ReadingListMetadata {
    pub fn date_added(&self) -> OffsetDateTime {
        plist_date_or_epoch(self.date_added)
    }
}

/// Fetch bookkeeping Safari keeps per device. Decoded but never rendered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadingListNonSyncMetadata {
    #[serde(rename = "siteName")]
    pub site_name: String,
    #[serde(rename = "FetchResult")]
    pub fetch_result: i64,
    #[serde(rename = "PreviewText")]
    pub preview_text: String,
    #[serde(rename = "DateLastFetched")]
    pub date_last_fetched: Option<plist::Date>,
    #[serde(rename = "didAttemptToFetchIconFromImageUrlKey")]
    pub did_attempt_to_fetch_icon: bool,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "neverFetchMetadata")]
    pub never_fetch_metadata: bool,
}

impl ReadingListNonSyncMetadata {
    pub fn date_last_fetched(&self) -> OffsetDateTime {
        plist_date_or_epoch(self.date_last_fetched)
    }
}

fn plist_date_or_epoch(date: Option<plist::Date>) -> OffsetDateTime {
    date.map(|d| OffsetDateTime::from(SystemTime::from(d)))
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
}
