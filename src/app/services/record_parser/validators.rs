//! Field validation utilities for catalog records
//!
//! Conversion failures (a token that is not a number) and semantic failures
//! (a number that is out of range) map to different reason codes.

use crate::constants::{DISCOVERY_DATE_FORMAT, DISCOVERY_DATE_PATTERN};
use crate::error::InvalidRecordData;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DISCOVERY_DATE_PATTERN).expect("discovery date pattern is a valid regex")
});

/// Check that `text` is `YYYY.MM.DD` and names a real calendar day
pub fn is_valid_date(text: &str) -> bool {
    DATE_SHAPE.is_match(text) && NaiveDate::parse_from_str(text, DISCOVERY_DATE_FORMAT).is_ok()
}

/// Validate a discovery date, reporting `invalid_values` on failure
pub fn validate_discovery_date(text: &str) -> Result<(), InvalidRecordData> {
    if is_valid_date(text) {
        Ok(())
    } else {
        Err(InvalidRecordData::invalid_values(format!(
            "invalid discovery date '{}' (expected a real date as YYYY.MM.DD)",
            text
        )))
    }
}

/// Parse a numeric token (decimal or exponential notation)
///
/// `inf`, `NaN` and values that overflow to infinity are not numbers here.
pub fn parse_number(field_name: &str, token: &str) -> Result<f64, InvalidRecordData> {
    let value = token.trim().parse::<f64>().map_err(|e| {
        InvalidRecordData::number_conversion(format!(
            "invalid number for {}: '{}' ({})",
            field_name, token, e
        ))
    })?;

    if !value.is_finite() {
        return Err(InvalidRecordData::number_conversion(format!(
            "invalid number for {}: '{}' (not a finite value)",
            field_name, token
        )));
    }

    Ok(value)
}

/// Require a finite value
pub fn ensure_finite(field_name: &str, value: f64) -> Result<(), InvalidRecordData> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidRecordData::invalid_values(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )))
    }
}

/// Require a strictly positive, finite value
pub fn ensure_positive(field_name: &str, value: f64) -> Result<(), InvalidRecordData> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(InvalidRecordData::invalid_values(format!(
            "{} must be positive, got {}",
            field_name, value
        )))
    }
}

/// Require text that is non-empty after trimming
pub fn ensure_not_blank(field_name: &str, value: &str) -> Result<(), InvalidRecordData> {
    if value.trim().is_empty() {
        Err(InvalidRecordData::invalid_values(format!(
            "{} cannot be empty",
            field_name
        )))
    } else {
        Ok(())
    }
}

/// Require text without line breaks
pub fn ensure_single_line(field_name: &str, value: &str) -> Result<(), InvalidRecordData> {
    if value.contains(['\n', '\r']) {
        Err(InvalidRecordData::invalid_values(format!(
            "{} cannot contain line breaks",
            field_name
        )))
    } else {
        Ok(())
    }
}
