//! The end-to-end manifest pipeline: list → extract → write.
//!
//! Each stage returns its own error type; [`PipelineError`] wraps them so an
//! embedding caller can match on the failing stage or on the coarser
//! [`ErrorKind`].
//!
//! Extraction runs on rayon's pool. The indexed `par_iter().collect()` keeps
//! results in listing order regardless of which worker finishes first.

use crate::config::ManifestConfig;
use crate::imaging::ImageBackend;
use crate::manifest::{self, ManifestError};
use crate::metadata::{self, MetadataError};
use crate::scan::{self, ScanError};
use crate::types::FileRecord;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Coarse classification of a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source directory, an entry, or the output path was unusable.
    Filesystem,
    /// An allow-listed image could not be decoded.
    Decode,
    /// The records could not be serialized.
    Serialize,
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Scan(_) => ErrorKind::Filesystem,
            PipelineError::Metadata(MetadataError::Decode { .. }) => ErrorKind::Decode,
            PipelineError::Metadata(_) => ErrorKind::Filesystem,
            PipelineError::Manifest(ManifestError::Serialize(_)) => ErrorKind::Serialize,
            PipelineError::Manifest(ManifestError::Write { .. }) => ErrorKind::Filesystem,
        }
    }
}

/// List and extract every entry without writing anything.
pub fn collect_records(
    config: &ManifestConfig,
    backend: &dyn ImageBackend,
) -> Result<Vec<FileRecord>, PipelineError> {
    let names = scan::list_entries(&config.source_dir)?;
    let records = names
        .par_iter()
        .map(|name| {
            metadata::extract(&config.source_dir, name, backend, config.on_decode_error)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Run the full pipeline and write the manifest to `config.output_path`.
///
/// Nothing is written unless every entry was extracted successfully.
pub fn run(
    config: &ManifestConfig,
    backend: &dyn ImageBackend,
) -> Result<Vec<FileRecord>, PipelineError> {
    let records = collect_records(config, backend)?;
    manifest::write_manifest(&records, &config.output_path)?;
    Ok(records)
}
