//! Directory listing.
//!
//! Stage 1 of the manifest pipeline. Lists the entries directly under the
//! source directory, dropping dotfiles:
//!
//! ```text
//! static/wallpapers/
//! ├── .DS_Store        # skipped
//! ├── aurora.jpg       # listed
//! ├── dunes.png        # listed
//! └── credits.txt      # listed (non-images still get a record)
//! ```
//!
//! The listing is not recursive and not sorted: names come back in the order
//! the filesystem yields them, and the manifest preserves that order.
//!
//! Names are returned as raw `OsString`s so entries whose names are not valid
//! UTF-8 can still be opened; only the manifest's `filename` is lossy.

use crate::naming;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// List the non-hidden entry names directly under `dir`, in listing order.
///
/// Fails if `dir` does not exist, is not a directory, or cannot be read.
pub fn list_entries(dir: &Path) -> Result<Vec<OsString>, ScanError> {
    let read_error = |source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let name = entry.file_name();
        if !naming::is_hidden(&name.to_string_lossy()) {
            names.push(name);
        }
    }
    Ok(names)
}
