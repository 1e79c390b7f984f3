//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// Assert that `haystack` contains `needle` exactly `expected` times
pub fn assert_occurrences(haystack: &str, needle: &str, expected: usize) {
    let found = haystack.matches(needle).count();
    assert_eq!(
        found, expected,
        "Expected {expected} occurrences of {needle:?}, found {found}"
    );
}

/// Assert the file is a well-formed SVG document
pub fn assert_svg_file(path: &Path) -> String {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    assert!(
        content.starts_with("<?xml") && content.contains("<svg") && content.trim_end().ends_with("</svg>"),
        "Expected SVG document in {}, got: {}",
        path.display(),
        &content[..200.min(content.len())]
    );
    content
}

/// Assert the file starts with the PNG signature
pub fn assert_png_file(path: &Path) -> Vec<u8> {
    let data = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    assert!(
        data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG signature in {}",
        path.display()
    );
    data
}

/// Sorted file names in a directory, empty if it does not exist
pub fn file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
