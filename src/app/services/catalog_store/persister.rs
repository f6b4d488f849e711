//! Catalog file saving
//!
//! Records are written in the same line format the loader reads, so a saved
//! catalog loads back to equal records. Text fields are always double-quoted;
//! embedded quotes and backslashes are escaped. The distance to the Sun has
//! no slot in the line format and is not written.
//!
//! [`append_record`] adds one line and leaves everything already in the file
//! (comments, rejected lines) untouched. [`save_catalog`] rewrites the file
//! from the parsed records only.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::info;

use crate::app::models::{Catalog, Record};
use crate::app::services::report::format_number;
use crate::{Error, Result};

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Serialize one record as a catalog line (without trailing newline)
pub fn format_record(record: &Record) -> String {
    let base = record.base();
    let mut line = format!(
        "{} {} {} {}",
        quote(base.name()),
        base.discovery_date(),
        format_number(base.radius()),
        format_number(base.mass()),
    );

    match record {
        Record::Generic(_) => {}
        Record::Habitable(planet) => {
            line.push_str(&format!(
                " {} {}",
                format_number(planet.temperature()),
                format_number(planet.habitability_score())
            ));
        }
        Record::Mining(planet) => {
            line.push_str(&format!(
                " {} {}",
                quote(planet.resource()),
                quote(planet.difficulty())
            ));
        }
    }

    line
}

/// Write every record of the catalog, one per line
pub fn write_catalog<W: Write>(mut writer: W, catalog: &Catalog) -> Result<()> {
    for record in catalog {
        writeln!(writer, "{}", format_record(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Overwrite `path` with the catalog contents
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

    write_catalog(BufWriter::new(file), catalog)?;

    info!("Saved {} records to {}", catalog.len(), path.display());
    Ok(())
}

/// Append one record to `path`, creating the file when missing
pub fn append_record(path: &Path, record: &Record) -> Result<()> {
    let mut line = String::new();
    if ends_without_newline(path)? {
        line.push('\n');
    }
    line.push_str(&format_record(record));
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(format!("Failed to open {} for appending", path.display()), e))?;
    file.write_all(line.as_bytes())?;

    info!("Appended '{}' to {}", record.name(), path.display());
    Ok(())
}

/// True when `path` exists, is non-empty and its last byte is not a newline
fn ends_without_newline(path: &Path) -> Result<bool> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::io(format!("Failed to open {}", path.display()), e)),
    };

    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
