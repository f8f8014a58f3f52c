//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::{Path, PathBuf};

pub use batchsub::{
    BatchReplacer, Encoding, Error, ReplacementMap, Strategy, substitute, substitute_in_file,
};
use tempfile::TempDir;

/// Path to a fixture under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
        .join(name)
}

/// Copy a fixture directory into a fresh temp directory.
pub fn temp_fixture(name: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    for entry in std::fs::read_dir(fixture_path(name)).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), dir.path().join(entry.file_name())).unwrap();
    }
    dir
}

/// Sorted file names in a directory.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Map of `count` keys `<kNNN>` to values `[vNNN]`.
pub fn numbered_map(count: usize) -> ReplacementMap {
    (0..count)
        .map(|i| (format!("<k{:03}>", i), format!("[v{:03}]", i)))
        .collect()
}

/// Build a replacer or fail the test.
pub fn replacer(map: &ReplacementMap, strategy: Strategy) -> BatchReplacer {
    BatchReplacer::with_strategy(map, strategy).unwrap()
}

/// Assert two texts are equal, with a diff on failure.
pub fn assert_text_eq(actual: &str, expected: &str) {
    similar_asserts::assert_eq!(actual, expected);
}
