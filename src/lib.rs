//! # Wallpaper Manifest
//!
//! Build-time helper for a static site: scans a directory of image assets and
//! writes a JSON manifest of each entry's name, size and pixel dimensions, so
//! the front-end can lay out a gallery without probing files at request time.
//!
//! # Architecture: Linear Pipeline
//!
//! ```text
//! 1. List      static/wallpapers/  →  entry names   (dotfiles dropped)
//! 2. Extract   entry names         →  FileRecords   (size + dimensions)
//! 3. Write     FileRecords         →  files.json    (atomic replace)
//! ```
//!
//! Every stage returns a `Result`. Any failure aborts the run before the
//! manifest is touched, so the previous manifest survives a bad run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — lists the source directory, skipping dotfiles |
//! | [`metadata`] | Stage 2 — file size formatting and dimension decoding for `.jpg`/`.png`/`.gif` |
//! | [`manifest`] | Stage 3 — JSON serialization and write-then-rename |
//! | [`pipeline`] | Chains the three stages; classifies failures |
//! | [`config`] | Paths, decode policy and worker count, with TOML loading |
//! | [`types`] | [`FileRecord`](types::FileRecord), the manifest entry |
//! | [`naming`] | Dotfile and extension rules on bare entry names |
//! | [`imaging`] | [`ImageBackend`](imaging::ImageBackend) trait and the `image`-crate implementation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Listing Order Is Manifest Order
//!
//! Entries are not sorted. The manifest follows `read_dir` order, and
//! parallel extraction collects through an indexed iterator so that order is
//! preserved exactly.
//!
//! ## Size As A String
//!
//! `size` is megabytes with exactly two decimals, serialized as a string so
//! `"2.00"` keeps its trailing zeros. Rounding is half-up, computed in integer
//! arithmetic.
//!
//! ## Malformed Images Abort By Default
//!
//! A `.jpg`, `.png` or `.gif` that cannot be decoded stops the run. Setting
//! `on_decode_error = "zero"` (or passing `--lenient`) records it as 0×0
//! instead. Filesystem errors are fatal either way.

pub mod config;
pub mod imaging;
pub mod manifest;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
