//! Entry-name helpers shared by the lister and the metadata extractor.
//!
//! Everything here works on the bare entry name (`a.png`, `.DS_Store`), never
//! on a full path, so the rules are the same no matter where the source
//! directory lives:
//!
//! - `.DS_Store` → hidden, skipped by the lister
//! - `Beach.JPG` → extension `jpg`
//! - `archive.tar.gz` → extension `gz` (only the last component counts)
//! - `README` → no extension

use std::path::Path;

/// Whether an entry is a dotfile. Dotfiles never reach the manifest.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Lowercased extension of an entry name, without the leading dot.
///
/// Returns `None` for names without an extension.
pub fn lowercase_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
}
