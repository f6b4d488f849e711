//! Test utilities for record parser testing
//!
//! Sample catalog lines shared across the parser test modules.

use crate::error::{InvalidRecordData, ReasonCode};

mod dispatcher_tests;

pub const MARS_GENERIC: &str = r#""Mars" 1659.09.03 3389.5 6.42e23"#;
pub const EARTH_HABITABLE: &str = r#""Earth" 0001.01.01 6371.0 5.97e24 15.0 0.9"#;
pub const CERES_MINING: &str = r#""Ceres" 1801.01.01 946.0 9.4e20 "water ice" "easy""#;

/// Assert that a parse result failed with the given reason code
pub fn assert_reason<T: std::fmt::Debug>(
    result: Result<T, InvalidRecordData>,
    expected: ReasonCode,
) {
    match result {
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
        Err(e) => assert_eq!(e.reason, expected, "unexpected failure: {}", e),
    }
}
