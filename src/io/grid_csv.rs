// src/io/grid_csv.rs

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::grid::GridEntry;

/// Writes the enriched table, one row per tile, with a header row.
pub fn write_entries(path: &Path, entries: &[GridEntry]) -> Result<()> {
    let writer = csv::Writer::from_path(path)?;
    write_to(writer, entries)?;
    log::info!("wrote {} grid rows to {}", entries.len(), path.display());
    Ok(())
}

pub fn write_to<W: Write>(mut writer: csv::Writer<W>, entries: &[GridEntry]) -> Result<()> {
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{build_entries, BucketPolicy};
    use crate::model::{PropertyTable, DEFAULT_COLUMN};

    #[test]
    fn header_and_rows() {
        let table = PropertyTable::from_values([("Cu", 1.0), ("Ag", 2.0), ("Au", 3.0), ("Rg", 4.0)])
            .unwrap()
            .fill_missing(None);
        let entries = build_entries(&table, DEFAULT_COLUMN, BucketPolicy::default(), None).unwrap();

        let mut buf = Vec::new();
        write_to(csv::Writer::from_writer(&mut buf), &entries).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "symbol,row,column,atomic_number,value,text,bucket");
        assert_eq!(lines.len(), 1 + 118);
        assert!(lines.contains(&"Au,6,11,79,3.0,3.0,low"));
        assert!(lines.contains(&"Rg,7,11,111,4.0,4.0,high"));
        assert!(lines.contains(&"H,1,1,1,,,"));
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.csv");
        let table = PropertyTable::from_values([("N", 14.0)]).unwrap();
        let entries = build_entries(&table, DEFAULT_COLUMN, BucketPolicy::default(), Some(2)).unwrap();
        write_entries(&path, &entries).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("N,2,15,7,14.0,14.00,low\n"));
    }
}
