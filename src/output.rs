//! CLI output formatting.
//!
//! A normal run prints a single confirmation line. With `--verbose` the
//! records are listed first, one per line, in manifest order:
//!
//! ```text
//! 001 aurora.jpg  3.41 MB  3840x2160
//! 002 credits.txt  0.00 MB  -
//! Manifest written to ./static/files.json (2 entries, 1 image)
//! ```
//!
//! Format functions are pure and return strings for testability; the
//! `print_*` wrappers write them to stdout.

use crate::types::FileRecord;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn dimensions_label(record: &FileRecord) -> String {
    if record.has_dimensions() {
        format!("{}x{}", record.width, record.height)
    } else {
        "-".to_string()
    }
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// One line per record: index, filename, size, dimensions.
pub fn format_records(records: &[FileRecord]) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{} {}  {} MB  {}",
                format_index(i + 1),
                r.filename,
                r.size,
                dimensions_label(r)
            )
        })
        .collect()
}

/// The confirmation line naming the manifest path.
pub fn format_success(output_path: &Path, records: &[FileRecord]) -> String {
    let images = records.iter().filter(|r| r.has_dimensions()).count();
    format!(
        "Manifest written to {} ({}, {})",
        output_path.display(),
        count(records.len(), "entry", "entries"),
        count(images, "image", "images")
    )
}

pub fn print_records(records: &[FileRecord]) {
    for line in format_records(records) {
        println!("{}", line);
    }
}

pub fn print_success(output_path: &Path, records: &[FileRecord]) {
    println!("{}", format_success(output_path, records));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<FileRecord> {
        vec![
            FileRecord::new("aurora.jpg", "3.41", 3840, 2160),
            FileRecord::new("credits.txt", "0.00", 0, 0),
        ]
    }

    #[test]
    fn records_listed_in_order_with_index() {
        let lines = format_records(&records());
        assert_eq!(
            lines,
            vec![
                "001 aurora.jpg  3.41 MB  3840x2160",
                "002 credits.txt  0.00 MB  -",
            ]
        );
    }

    #[test]
    fn no_records_no_lines() {
        assert!(format_records(&[]).is_empty());
    }

    #[test]
    fn success_names_output_path() {
        let line = format_success(Path::new("./static/files.json"), &records());
        assert_eq!(
            line,
            "Manifest written to ./static/files.json (2 entries, 1 image)"
        );
    }

    #[test]
    fn success_singular_entry() {
        let line = format_success(
            Path::new("out.json"),
            &[FileRecord::new("a.txt", "0.00", 0, 0)],
        );
        assert_eq!(line, "Manifest written to out.json (1 entry, 0 images)");
    }
}
