//! Test utilities for catalog loading and saving

use std::io::Write;
use tempfile::NamedTempFile;

mod loader_tests;

/// A small catalog covering every variant, comments and one bad line
pub fn create_test_catalog() -> String {
    r#"# name date radius mass [extra]
"Mars" 1659.09.03 3389.5 6.42e23

"Earth" 0001.01.01 6371.0 5.97e24 15.0 0.9
"Ceres" 1801.01.01 946.0 9.4e20 "water ice" "easy"
"Broken" 1659.09.03 3389.5
"Kepler 22 b" 2011.12.05 15290 2.2e25"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
