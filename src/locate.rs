use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Where Safari keeps bookmarks, relative to the user's home directory.
pub const BOOKMARKS_RELATIVE_PATH: &str = "Library/Safari/Bookmarks.plist";

pub const OUTPUT_FILE_NAME: &str = "Bookmarks.md";

/// Input and output paths for one export, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    pub bookmarks: PathBuf,
    pub output: PathBuf,
}

impl Locations {
    pub fn new(home: &Path, working_dir: &Path) -> Self {
        Self {
            bookmarks: home.join(BOOKMARKS_RELATIVE_PATH),
            output: working_dir.join(OUTPUT_FILE_NAME),
        }
    }

    /// Resolves paths for the current user and process.
    ///
    /// Fails on anything but macOS, since the bookmarks path only exists there.
    pub fn discover() -> Result<Self> {
        if !cfg!(target_os = "macos") {
            return Err(Error::Environment("only runs on macOS".to_string()));
        }
        let home = home_dir()?;
        let cwd = std::env::current_dir()
            .map_err(|e| Error::io("resolve working directory", ".", e))?;
        Ok(Self::new(&home, &cwd))
    }
}

fn home_dir() -> Result<PathBuf> {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => Err(Error::Environment("HOME not set".to_string())),
    }
}
