use crate::export;
use crate::locate::Locations;
use anyhow::Context;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "reading-list-md",
    about = "Back up the Safari Reading List as Markdown.",
    long_about = "Reads ~/Library/Safari/Bookmarks.plist and writes every Reading List entry \
                  to Bookmarks.md in the current directory, overwriting it if present.",
    version,
    after_help = r#"Set RUST_LOG=debug to trace which folders and entries were exported.

macOS may require Full Disk Access for the terminal to read Safari's bookmarks.
"#
)]
pub struct Args {}

pub fn dispatch(_args: Args, locations: &Locations) -> anyhow::Result<()> {
    export::export_reading_list(locations).with_context(|| {
        format!(
            "export reading list from {}",
            locations.bookmarks.display()
        )
    })?;
    Ok(())
}
