//! Tests for ordered parser dispatch

use super::super::dispatcher::{DispatchOutcome, Dispatcher, ParserEntry};
use super::super::parsers::{parse_generic, parse_habitable};
use super::{CERES_MINING, EARTH_HABITABLE, MARS_GENERIC};
use crate::app::models::RecordKind;
use crate::error::ReasonCode;

#[test]
fn test_default_priority_order() {
    let dispatcher = Dispatcher::default();
    assert_eq!(
        dispatcher.order(),
        [RecordKind::Habitable, RecordKind::Mining, RecordKind::Generic]
    );
}

#[test]
fn test_each_variant_is_recognized() {
    let dispatcher = Dispatcher::default();

    let kind = |line: &str| dispatcher.parse_line(line).map(|r| r.kind());

    assert_eq!(kind(MARS_GENERIC), Some(RecordKind::Generic));
    assert_eq!(kind(EARTH_HABITABLE), Some(RecordKind::Habitable));
    assert_eq!(kind(CERES_MINING), Some(RecordKind::Mining));
}

#[test]
fn test_habitable_wins_over_generic() {
    // the first four fields alone would also satisfy the generic parser
    let outcome = Dispatcher::default().dispatch(EARTH_HABITABLE);

    match outcome {
        DispatchOutcome::Parsed(record) => {
            assert_eq!(record.kind(), RecordKind::Habitable);
            assert!(record.fields().contains_key("temperature"));
        }
        other => panic!("expected parsed record, got {:?}", other),
    }
}

#[test]
fn test_numeric_mining_fields_are_claimed_by_habitable() {
    let record = Dispatcher::default()
        .parse_line(r#""Vesta" 1807.03.29 262.7 2.59e20 "5" "3""#)
        .unwrap();

    assert_eq!(record.kind(), RecordKind::Habitable);
}

#[test]
fn test_unquoted_hash_field_stays_mining() {
    let record = Dispatcher::default()
        .parse_line(r#""Kepler-62f" 2013.04.18 9000 2e25 "water" #2"#)
        .unwrap();

    assert_eq!(record.kind(), RecordKind::Mining);
    assert_eq!(record.fields().text("difficulty"), Some("#2"));
}

#[test]
fn test_blank_and_comment_lines_are_skipped() {
    let dispatcher = Dispatcher::default();

    assert_eq!(dispatcher.dispatch(""), DispatchOutcome::Skipped);
    assert_eq!(dispatcher.dispatch("   \n"), DispatchOutcome::Skipped);
    assert_eq!(
        dispatcher.dispatch("# name date radius mass"),
        DispatchOutcome::Skipped
    );
    assert_eq!(
        dispatcher.dispatch("   # indented note"),
        DispatchOutcome::Skipped
    );
}

#[test]
fn test_rejected_line_reports_every_parser() {
    let outcome = Dispatcher::default().dispatch(r#""Mars" 1659.09.03 3389.5"#);

    let DispatchOutcome::Rejected(failures) = &outcome else {
        panic!("expected rejection, got {:?}", outcome);
    };

    let kinds: Vec<_> = failures.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        [RecordKind::Habitable, RecordKind::Mining, RecordKind::Generic]
    );
    assert!(
        failures
            .iter()
            .all(|f| f.error.reason == ReasonCode::InsufficientData)
    );

    let summary = outcome.rejection_summary().unwrap();
    assert!(summary.starts_with("habitable: insufficient data"));
    assert!(summary.contains("generic: insufficient data"));
}

#[test]
fn test_invalid_mining_line_falls_back_to_generic() {
    // habitable fails on the text fields, mining on the empty resource
    let record = Dispatcher::default()
        .parse_line(r#""Ceres" 1801.01.01 946.0 9.4e20 "" "easy""#)
        .unwrap();

    assert_eq!(record.kind(), RecordKind::Generic);
    assert!(!record.fields().contains_key("resource"));
}

#[test]
fn test_bad_radius_is_rejected_by_all() {
    let outcome = Dispatcher::default().dispatch(r#""Mars" 1659.09.03 -3389.5 6.42e23"#);

    let DispatchOutcome::Rejected(failures) = outcome else {
        panic!("expected rejection");
    };
    let generic = failures
        .iter()
        .find(|f| f.kind == RecordKind::Generic)
        .unwrap();
    assert_eq!(generic.error.reason, ReasonCode::InvalidValues);
}

#[test]
fn test_custom_priority_order() {
    let dispatcher = Dispatcher::with_entries(vec![
        ParserEntry::new(RecordKind::Habitable, 5, parse_habitable),
        ParserEntry::new(RecordKind::Generic, 1, parse_generic),
    ]);

    assert_eq!(
        dispatcher.order(),
        [RecordKind::Generic, RecordKind::Habitable]
    );
    assert_eq!(
        dispatcher.parse_line(EARTH_HABITABLE).map(|r| r.kind()),
        Some(RecordKind::Generic)
    );
}

#[test]
fn test_outcome_record_accessor() {
    let dispatcher = Dispatcher::default();

    assert!(dispatcher.dispatch("# comment").record().is_none());
    assert!(dispatcher.dispatch("garbage").record().is_none());
    assert!(dispatcher.dispatch(MARS_GENERIC).rejection_summary().is_none());
}
