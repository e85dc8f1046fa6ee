//! The manifest record shared by the extractor, the writer and the CLI output.
//!
//! Field names and order are part of the file format consumed by the
//! front-end: `filename`, `size`, `width`, `height`.

use serde::{Deserialize, Serialize};

/// One entry of the manifest.
///
/// `size` is a string on purpose: the front-end displays it verbatim and
/// needs the trailing zeros (`"2.00"`, not `2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Base name including extension, e.g. `sunset.jpg`.
    pub filename: String,
    /// Size in megabytes with exactly two decimals.
    pub size: String,
    /// Pixel width, 0 for entries that are not decoded images.
    pub width: u32,
    /// Pixel height, 0 for entries that are not decoded images.
    pub height: u32,
}

impl FileRecord {
    pub fn new(
        filename: impl Into<String>,
        size: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            filename: filename.into(),
            size: size.into(),
            width,
            height,
        }
    }

    /// Whether the record carries real pixel dimensions.
    pub fn has_dimensions(&self) -> bool {
        self.width != 0 || self.height != 0
    }
}
