//! Shared test utilities for the wallpaper-manifest test suite.
//!
//! Provides synthetic image encoders, fixture directory builders and lookup
//! helpers over the extracted records.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! populate_gallery(tmp.path());
//! let config = ManifestConfig::new(tmp.path(), "out.json");
//! let records = collect_records(&config, &RustBackend::new()).unwrap();
//!
//! assert_eq!(find_record(&records, "sunset.jpg").width, 160);
//! assert_eq!(record_names(&records), listed_names(tmp.path()));
//! ```

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use crate::types::FileRecord;

// =========================================================================
// Fixture setup
// =========================================================================

/// Encode a synthetic `width`×`height` image in memory.
///
/// GIF goes through RGBA since that is what the GIF encoder takes natively;
/// JPEG has no alpha channel so everything else uses RGB.
pub fn encode_image(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
    let img = match format {
        ImageFormat::Gif => DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        })),
        _ => DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        })),
    };
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

/// Write `prefix` followed by zero bytes so the file is exactly `len` bytes.
pub fn write_padded(path: &Path, prefix: &[u8], len: usize) {
    assert!(prefix.len() <= len, "prefix longer than target length");
    let mut data = prefix.to_vec();
    data.resize(len, 0);
    std::fs::write(path, data).unwrap();
}

/// A small gallery: three decodable images, one text file and one dotfile.
///
/// | Entry | Dimensions |
/// |---|---|
/// | `sunset.jpg` | 160×90 |
/// | `tile.png` | 32×32 |
/// | `spinner.gif` | 16×16 |
/// | `notes.txt` | — |
/// | `.DS_Store` | hidden |
pub fn populate_gallery(dir: &Path) {
    std::fs::write(dir.join("sunset.jpg"), encode_image(ImageFormat::Jpeg, 160, 90)).unwrap();
    std::fs::write(dir.join("tile.png"), encode_image(ImageFormat::Png, 32, 32)).unwrap();
    std::fs::write(dir.join("spinner.gif"), encode_image(ImageFormat::Gif, 16, 16)).unwrap();
    std::fs::write(dir.join("notes.txt"), "shot on film").unwrap();
    std::fs::write(dir.join(".DS_Store"), "finder junk").unwrap();
}

// =========================================================================
// Listing order
// =========================================================================

/// Every entry name in raw `read_dir` order, dotfiles included.
pub fn raw_listing(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

/// Non-hidden entry names in `read_dir` order; what the manifest should list.
pub fn listed_names(dir: &Path) -> Vec<String> {
    raw_listing(dir)
        .into_iter()
        .filter(|n| !n.starts_with('.'))
        .collect()
}

// =========================================================================
// Record lookups — panics with a clear message on miss
// =========================================================================

/// Find a record by filename. Panics if not found.
pub fn find_record<'a>(records: &'a [FileRecord], filename: &str) -> &'a FileRecord {
    records
        .iter()
        .find(|r| r.filename == filename)
        .unwrap_or_else(|| {
            let names = record_names(records);
            panic!("record '{filename}' not found. Available: {names:?}")
        })
}

/// All record filenames in manifest order.
pub fn record_names(records: &[FileRecord]) -> Vec<String> {
    records.iter().map(|r| r.filename.clone()).collect()
}
