//! Human-readable and JSON catalog reports
//!
//! Formatting works only from [`Record::fields`](crate::app::models::Record::fields):
//! optional segments are emitted when their keys are present, never by
//! matching on the record variant.

use crate::Result;
use crate::app::models::{Catalog, FieldMap, FieldValue};
use crate::constants::{EXPONENT_LOWER_THRESHOLD, EXPONENT_UPPER_THRESHOLD, fields};

/// Format a number the way catalog files write them
///
/// Large and tiny magnitudes use exponent form (`6.42e23`), everything else
/// plain decimal. Both forms parse back to the identical `f64`.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite()
        && magnitude != 0.0
        && (magnitude >= EXPONENT_UPPER_THRESHOLD || magnitude < EXPONENT_LOWER_THRESHOLD)
    {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

fn value_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Number(number) => format_number(*number),
    }
}

fn field(data: &FieldMap, key: &str) -> String {
    data.get(key).map(value_text).unwrap_or_default()
}

/// Describe one record on a single line
pub fn describe(data: &FieldMap) -> String {
    let mut output = format!(
        "{}: discovered {}, radius {} km, mass: {}",
        field(data, fields::NAME),
        field(data, fields::DATE),
        field(data, fields::RADIUS),
        field(data, fields::MASS),
    );

    if data.contains_key(fields::TEMPERATURE) {
        output.push_str(&format!(
            ", temperature: {}°C, habitability: {}",
            field(data, fields::TEMPERATURE),
            field(data, fields::HABITABILITY),
        ));
    }

    if data.contains_key(fields::RESOURCE) {
        output.push_str(&format!(
            ", resource: {}, mining difficulty: {}",
            field(data, fields::RESOURCE),
            field(data, fields::DIFFICULTY),
        ));
    }

    if data.contains_key(fields::DISTANCE) {
        output.push_str(&format!(
            ", distance to Sun: {} km",
            field(data, fields::DISTANCE)
        ));
    }

    output
}

/// Numbered listing of the whole catalog
pub fn render_listing(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "The catalog is empty".to_string();
    }

    catalog
        .iter()
        .enumerate()
        .map(|(i, record)| format!("{}. {}", i + 1, describe(&record.fields())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON array of field projections
pub fn render_json(catalog: &Catalog) -> Result<String> {
    let projections: Vec<FieldMap> = catalog.iter().map(|record| record.fields()).collect();
    Ok(serde_json::to_string_pretty(&projections)?)
}
