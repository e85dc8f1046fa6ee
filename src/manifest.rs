//! Manifest serialization and atomic writing.
//!
//! Stage 3 of the pipeline. The manifest is a JSON array of [`FileRecord`]
//! objects, pretty-printed with two-space indentation:
//!
//! ```text
//! [
//!   {
//!     "filename": "a.png",
//!     "size": "2.00",
//!     "width": 512,
//!     "height": 256
//!   }
//! ]
//! ```
//!
//! The file is written to a sibling `<name>.tmp` first and then renamed over
//! the destination, so a failed run never leaves a half-written manifest. The
//! parent directory is not created.

use crate::types::FileRecord;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Cannot write manifest {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Serialize records as the manifest's pretty-printed JSON.
pub fn to_json(records: &[FileRecord]) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write the manifest to `path`, replacing any previous file.
pub fn write_manifest(records: &[FileRecord], path: &Path) -> Result<(), ManifestError> {
    let json = to_json(records)?;

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, json).map_err(|source| ManifestError::Write {
        path: temp_path.clone(),
        source,
    })?;

    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(ManifestError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// `static/files.json` → `static/files.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("manifest"));
    name.push(".tmp");
    path.with_file_name(name)
}
