//! Loader for externally produced comparison data.
//!
//! Reference files are two numeric columns without a header, e.g. the points
//! exported from a numerical model of the same section. They are only drawn
//! next to the analytic curves and never enter a calculation.

use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{MechError, MechResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub source: PathBuf,
    pub points: Vec<(f64, f64)>,
}

impl ReferenceData {
    pub fn x(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.0).collect()
    }

    pub fn y(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.1).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Reads a reference file from disk.
pub fn load_reference<P: AsRef<Path>>(path: P) -> MechResult<ReferenceData> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MechError::io(path, e))?;
    parse_reference(file, path)
}

/// Parses two comma separated columns; `source` is only used in error messages.
pub fn parse_reference<R: Read>(reader: R, source: &Path) -> MechResult<ReferenceData> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);
    let mut points = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| malformed(source, e.position().map_or(0, |p| p.line()), e.to_string()))?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != 2 {
            return Err(malformed(source, line, format!("expected 2 columns, found {}", record.len())));
        }
        let value = |i: usize| -> MechResult<f64> {
            record[i]
                .parse::<f64>()
                .map_err(|e| malformed(source, line, format!("column {}: '{}' {}", i + 1, &record[i], e)))
        };
        points.push((value(0)?, value(1)?));
    }
    Ok(ReferenceData {
        source: source.to_path_buf(),
        points,
    })
}

fn malformed(source: &Path, line: u64, reason: String) -> MechError {
    MechError::Reference {
        path: source.to_path_buf(),
        line,
        reason,
    }
}
