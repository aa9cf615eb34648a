mod cli;
mod decode;
mod error;
mod export;
mod filter;
mod locate;
mod model;
mod progress;
mod render;

pub use decode::{from_bytes, from_path, from_reader};
pub use error::{Error, Result};
pub use export::{ExportSummary, export_reading_list, render_document};
pub use filter::reading_list_entries;
pub use locate::{BOOKMARKS_RELATIVE_PATH, Locations, OUTPUT_FILE_NAME};
pub use model::{
    BookmarkDocument, BookmarkFolder, READING_LIST_MARKER, ReadingListEntry, ReadingListMetadata,
    ReadingListNonSyncMetadata,
};
pub use render::{entry_to_markdown, write_markdown};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    init_logging();
    let locations = Locations::discover().context("locate Safari bookmarks")?;

    cli::dispatch(args, &locations)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
