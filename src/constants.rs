//! Application constants for the planet catalog
//!
//! Default file locations, line-format markers, record arity and the field
//! keys shared by the record projection and the reporter.

// =============================================================================
// File and Line Format Constants
// =============================================================================

/// Catalog file read and written when no `--file` is given
pub const DEFAULT_DATA_FILE: &str = "planets.txt";

/// Lines whose first non-whitespace character is this marker are ignored
pub const COMMENT_MARKER: char = '#';

/// Discovery date format as understood by chrono (`YYYY.MM.DD`)
pub const DISCOVERY_DATE_FORMAT: &str = "%Y.%m.%d";

/// Discovery date shape, checked before calendar validation
pub const DISCOVERY_DATE_PATTERN: &str = r"^[0-9]{4}\.[0-9]{2}\.[0-9]{2}$";

// =============================================================================
// Record Arity
// =============================================================================

/// Minimum token counts per record variant
pub mod arity {
    /// name, date, radius, mass
    pub const GENERIC: usize = 4;

    /// base fields + temperature, habitability score
    pub const HABITABLE: usize = 6;

    /// base fields + resource, difficulty
    pub const MINING: usize = 6;
}

// =============================================================================
// Projection Keys
// =============================================================================

/// Field names produced by `Record::fields`
pub mod fields {
    pub const NAME: &str = "name";
    pub const DATE: &str = "date";
    pub const RADIUS: &str = "radius";
    pub const MASS: &str = "mass";
    pub const DISTANCE: &str = "distance";
    pub const TEMPERATURE: &str = "temperature";
    pub const HABITABILITY: &str = "habitability";
    pub const RESOURCE: &str = "resource";
    pub const DIFFICULTY: &str = "difficulty";
}

// =============================================================================
// Reporting
// =============================================================================

/// Magnitudes at or above this are printed in exponent form
pub const EXPONENT_UPPER_THRESHOLD: f64 = 1e7;

/// Non-zero magnitudes below this are printed in exponent form
pub const EXPONENT_LOWER_THRESHOLD: f64 = 1e-4;

/// Check whether a raw line is blank or a comment
pub fn is_ignorable_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}
