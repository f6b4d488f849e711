//! Tests for catalog loading

use super::super::loader::{load_catalog, load_or_empty, read_catalog};
use super::{create_temp_file, create_test_catalog};
use crate::Error;
use crate::app::models::RecordKind;
use crate::app::services::record_parser::Dispatcher;
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_load_mixed_catalog() {
    let temp_file = create_temp_file(&create_test_catalog());
    let result = load_catalog(temp_file.path(), &Dispatcher::default()).unwrap();

    let names: Vec<_> = result.catalog.iter().map(|r| r.name()).collect();
    assert_eq!(names, ["Mars", "Earth", "Ceres", "Kepler 22 b"]);

    let kinds: Vec<_> = result.catalog.iter().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        [
            RecordKind::Generic,
            RecordKind::Habitable,
            RecordKind::Mining,
            RecordKind::Generic
        ]
    );
    assert!(!result.source_missing);
}

#[test]
fn test_load_stats() {
    let temp_file = create_temp_file(&create_test_catalog());
    let stats = load_catalog(temp_file.path(), &Dispatcher::default())
        .unwrap()
        .stats;

    assert_eq!(stats.total_lines, 7);
    assert_eq!(stats.skipped_lines, 2);
    assert_eq!(stats.records_parsed, 4);
    assert_eq!(stats.lines_rejected, 1);
    assert_eq!(stats.count(RecordKind::Generic), 2);
    assert_eq!(stats.errors.len(), 1);
    assert!(stats.errors[0].starts_with("Line 6: "));
    assert!(stats.errors[0].contains("insufficient data"));
}

#[test]
fn test_bad_line_does_not_stop_later_lines() {
    let content = "garbage line\n\"Unclosed 2000.01.01 1 1\n\"Mars\" 1659.09.03 3389.5 6.42e23\n";
    let result = read_catalog(Cursor::new(content), &Dispatcher::default()).unwrap();

    assert_eq!(result.catalog.len(), 1);
    assert_eq!(result.stats.lines_rejected, 2);
    assert!(result.stats.errors[1].contains("parse error"));
}

#[test]
fn test_invalid_utf8_line_is_skipped() {
    let mut content = b"\"Mars\" 1659.09.03 3389.5 6.42e23\n".to_vec();
    content.extend_from_slice(b"\xff\xfe broken\n");
    content.extend_from_slice(b"\"Venus\" 1610.01.01 6051.8 4.87e24\n");

    let result = read_catalog(Cursor::new(content), &Dispatcher::default()).unwrap();

    assert_eq!(result.catalog.len(), 2);
    assert_eq!(result.stats.lines_rejected, 1);
    assert!(result.stats.errors[0].contains("UTF-8"));
}

#[test]
fn test_missing_file_is_distinct_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("planets.txt");

    let err = load_catalog(&path, &Dispatcher::default()).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn test_missing_file_loads_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("planets.txt");

    let result = load_or_empty(&path, &Dispatcher::default()).unwrap();
    assert!(result.source_missing);
    assert!(result.catalog.is_empty());
    assert_eq!(result.stats.total_lines, 0);
}

#[test]
fn test_empty_file() {
    let result = read_catalog(Cursor::new(""), &Dispatcher::default()).unwrap();
    assert!(result.catalog.is_empty());
    assert!(result.stats.is_clean());
}
