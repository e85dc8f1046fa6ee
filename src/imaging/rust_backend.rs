//! Pure Rust dimension reader built on the `image` crate.
//!
//! | Format | Decoder |
//! |---|---|
//! | JPEG | `image` (`jpeg` feature) |
//! | PNG | `image` (`png` feature) |
//! | GIF | `image` (`gif` feature) |
//!
//! Only the header is parsed: [`ImageReader::into_dimensions`] stops once the
//! decoder knows the canvas size. The format is sniffed from the bytes, not
//! taken from the file extension, so a PNG saved as `.jpg` still reports its
//! real size.
//!
//! Sniffing recognizes more formats than the three decoders compiled in. A
//! WebP or BMP file renamed to `.png` is detected, then fails with
//! [`BackendError::DecodeFailed`] because its decoder is disabled.

use super::backend::{BackendError, Dimensions, ImageBackend};
use image::ImageReader;
use std::io::Cursor;

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, data: &[u8]) -> Result<Dimensions, BackendError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| BackendError::DecodeFailed(e.to_string()))?;
        if reader.format().is_none() {
            return Err(BackendError::UnknownFormat);
        }
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| BackendError::DecodeFailed(e.to_string()))?;
        Ok(Dimensions { width, height })
    }
}
