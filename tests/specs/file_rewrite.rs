//! File rewrite specs.

use crate::prelude::*;

/// > Rewriting a file yields the substituted content and leaves no
/// > temporary file behind.
#[test]
fn rewrite_round_trip_leaves_no_temp_file() {
    let dir = temp_fixture("rewrite");
    let path = dir.path().join("input.txt");
    let map = ReplacementMap::from([("lonely", "alone"), ("a.b", "dot")]);

    substitute_in_file(&map, &path, "{key} -> {value}", Encoding::Utf8).unwrap();

    let expected = std::fs::read_to_string(dir.path().join("expected.txt")).unwrap();
    assert_text_eq(&std::fs::read_to_string(&path).unwrap(), &expected);
    assert_eq!(
        dir_entries(dir.path()),
        vec!["batchsub.toml", "expected.txt", "input.txt"]
    );
}

/// > A config file drives the same rewrite.
#[test]
fn config_driven_rewrite() {
    let dir = temp_fixture("rewrite");
    let config = batchsub::config::load(&dir.path().join("batchsub.toml")).unwrap();
    let path = dir.path().join("input.txt");

    let stats = config.rewriter().unwrap().rewrite(&path).unwrap();

    let expected = std::fs::read_to_string(dir.path().join("expected.txt")).unwrap();
    assert_text_eq(&std::fs::read_to_string(&path).unwrap(), &expected);
    assert_eq!(stats.lines, 3);
    assert_eq!(stats.replacements, 2);
}

/// > I/O failures surface to the caller unchanged.
#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let map = ReplacementMap::from([("a", "b")]);

    let err = substitute_in_file(&map, &dir.path().join("nope"), "{value}", Encoding::Utf8)
        .unwrap_err();

    match err {
        Error::Io { source, .. } => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected io error, got {:?}", other),
    }
}

/// > Each line is processed independently.
#[test]
fn lines_are_independent() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("two-lines.txt");
    std::fs::write(&path, "ab\ncd\n").unwrap();
    let map = ReplacementMap::from([("b\nc", "X"), ("d", "D")]);

    substitute_in_file(&map, &path, "{value}", Encoding::Utf8).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "ab\ncD\n");
}
