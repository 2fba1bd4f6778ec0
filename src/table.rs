//! Delimited table export of evaluated fields.

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{MechError, MechResult};

/// Writes `rows` as CSV with a header row taken from the serialized field names.
pub fn write_rows<W, T>(writer: W, rows: &[T]) -> MechResult<()>
where
    W: Write,
    T: Serialize,
{
    let mut wtr = csv::Writer::from_writer(writer);
    serialize_rows(&mut wtr, rows)?;
    wtr.flush().map_err(|e| MechError::Csv(e.into()))?;
    Ok(())
}

fn serialize_rows<W: Write, T: Serialize>(wtr: &mut csv::Writer<W>, rows: &[T]) -> MechResult<()> {
    for row in rows {
        wtr.serialize(row)?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes `rows` into it.
pub fn write_table<P, T>(path: P, rows: &[T]) -> MechResult<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| MechError::io(path, e))?;
    let mut wtr = csv::Writer::from_writer(file);
    serialize_rows(&mut wtr, rows)?;
    wtr.flush().map_err(|e| MechError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::QnPoint;
    use crate::material::{GroundProperties, LiningProperties};
    use crate::tunnel::{InterfaceCondition, LoadState, TunnelSolution};

    #[test]
    fn test_response_field_header() {
        let ground = GroundProperties::new(5e7, 1.791e7).unwrap();
        let lining = LiningProperties::new(2.5e10, 0.15, 0.125, 5.0).unwrap();
        let load = LoadState::new(6e5, 0.5).unwrap();
        let field = TunnelSolution::new(&ground, &lining, InterfaceCondition::NoSlip, &load)
            .unwrap()
            .field(3)
            .unwrap();
        let mut buf = Vec::new();
        write_rows(&mut buf, field.samples()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "theta_deg,ua,va,sigR,tauRT,T,M");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("0.0,"));
        assert!(lines[3].starts_with("90.0,"));
    }

    #[test]
    fn test_qn_rows() {
        let rows = [QnPoint { n: -1.0, q: 0.0 }, QnPoint { n: 0.0, q: 2.5 }];
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "N,Q\n-1.0,0.0\n0.0,2.5\n");
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let rows = [QnPoint { n: 0.0, q: 0.0 }];
        let err = write_table("/nonexistent-dir/for/sure/table.csv", &rows).unwrap_err();
        assert_eq!(err.code(), "IO");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_flush_reports_path() {
        // Opening /dev/full succeeds; every write to it fails with ENOSPC.
        let device = Path::new("/dev/full");
        if !device.exists() {
            return;
        }
        let rows = [QnPoint { n: 1.0, q: 2.0 }];
        let err = write_table(device, &rows).unwrap_err();
        assert_eq!(err.code(), "IO");
        assert!(err.to_string().contains("/dev/full"), "{}", err);
    }
}
