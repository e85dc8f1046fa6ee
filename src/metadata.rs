//! Per-entry metadata extraction.
//!
//! Stage 2 of the manifest pipeline. For every listed entry:
//!
//! 1. **Size** — `fs::metadata` gives the byte count, which is rendered as
//!    megabytes with exactly two decimals (see [`format_size_mb`]).
//! 2. **Dimensions** — only for the allow-listed extensions in
//!    [`DIMENSION_EXTENSIONS`]. The whole file is read into memory and handed
//!    to an [`ImageBackend`]. Every other entry gets 0×0 without being opened.
//!
//! ## Decode failures
//!
//! A file with an allow-listed extension whose bytes cannot be decoded is
//! handled according to [`DecodePolicy`]: `Abort` surfaces
//! [`MetadataError::Decode`], `Zero` records the entry as 0×0. I/O failures
//! (the entry vanished, or `x.png` is a directory) are always errors.

use crate::config::DecodePolicy;
use crate::imaging::{BackendError, Dimensions, ImageBackend};
use crate::naming;
use crate::types::FileRecord;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions (lowercase, without the dot) whose dimensions are decoded.
pub const DIMENSION_EXTENSIONS: &[&str] = &["jpg", "png", "gif"];

const BYTES_PER_MB: u128 = 1024 * 1024;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Cannot stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: BackendError,
    },
}

/// Build the manifest record for one entry of `dir`.
///
/// The file is opened through the raw `name`; the record's `filename` is its
/// lossy UTF-8 rendering.
pub fn extract(
    dir: &Path,
    name: impl AsRef<OsStr>,
    backend: &dyn ImageBackend,
    policy: DecodePolicy,
) -> Result<FileRecord, MetadataError> {
    let path = dir.join(name.as_ref());
    let name = name.as_ref().to_string_lossy();
    let stats = fs::metadata(&path).map_err(|source| MetadataError::Stat {
        path: path.clone(),
        source,
    })?;
    let size = format_size_mb(stats.len());

    let dims = if has_dimension_extension(&name) {
        read_dimensions(&path, backend, policy)?
    } else {
        Dimensions::ZERO
    };

    Ok(FileRecord::new(name.into_owned(), size, dims.width, dims.height))
}

/// Whether an entry name has one of the [`DIMENSION_EXTENSIONS`].
pub fn has_dimension_extension(name: &str) -> bool {
    naming::lowercase_extension(name)
        .is_some_and(|ext| DIMENSION_EXTENSIONS.contains(&ext.as_str()))
}

fn read_dimensions(
    path: &Path,
    backend: &dyn ImageBackend,
    policy: DecodePolicy,
) -> Result<Dimensions, MetadataError> {
    let data = fs::read(path).map_err(|source| MetadataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    match backend.identify(&data) {
        Ok(dims) => Ok(dims),
        Err(_) if policy == DecodePolicy::Zero => Ok(Dimensions::ZERO),
        Err(source) => Err(MetadataError::Decode {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Render a byte count as megabytes with two decimals, rounding half up.
///
/// Computed in integer hundredths so ties like 0.125 MB round to `"0.13"`
/// rather than following float formatting's tie rules.
///
/// ```text
/// 100        → "0.00"
/// 1_048_576  → "1.00"
/// 1_500_000  → "1.43"
/// ```
pub fn format_size_mb(bytes: u64) -> String {
    let hundredths = (u128::from(bytes) * 100 + BYTES_PER_MB / 2) / BYTES_PER_MB;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
