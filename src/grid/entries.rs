// src/grid/entries.rs

use serde::Serialize;

use super::classify::{classify, Bucket, BucketPolicy};
use super::coordinates::grid_position;
use crate::error::Result;
use crate::model::PropertyTable;

/// One tile of the heat map, ready for the plotting backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridEntry {
    pub symbol: &'static str,
    pub row: u8,
    pub column: u8,
    pub atomic_number: u8,
    pub value: Option<f64>,
    pub text: String,
    pub bucket: Option<Bucket>,
}

/// `None` prints the shortest round-trip form (`1.0`, `3.25`). Whole numbers
/// keep their `.0`, and very large or small magnitudes use Rust's exponent
/// form without sign or padding (`1e16`, `1e-5`).
pub fn format_value(value: Option<f64>, precision: Option<usize>) -> String {
    match (value, precision) {
        (None, _) => String::new(),
        (Some(v), None) => format!("{:?}", v),
        (Some(v), Some(p)) => format!("{:.*}", p, v),
    }
}

/// Joins coordinates, values and buckets, one entry per table row.
pub fn build_entries(
    table: &PropertyTable,
    column: &str,
    policy: BucketPolicy,
    precision: Option<usize>,
) -> Result<Vec<GridEntry>> {
    let values = table.column(column)?;
    let buckets = classify(table, column, policy)?;

    let entries: Vec<GridEntry> = values
        .into_iter()
        .zip(buckets)
        .map(|((element, value), (_, bucket))| {
            let pos = grid_position(element);
            GridEntry {
                symbol: element.symbol,
                row: pos.row,
                column: pos.column,
                atomic_number: element.atomic_number,
                value,
                text: format_value(value, precision),
                bucket,
            }
        })
        .collect();

    log::debug!("built {} grid entries for '{}'", entries.len(), column);
    Ok(entries)
}

/// Min and max of the finite values, the domain of the fill gradient.
pub fn value_range(entries: &[GridEntry]) -> Option<(f64, f64)> {
    entries
        .iter()
        .filter_map(|e| e.value)
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::elements;
    use crate::model::DEFAULT_COLUMN;
    use std::collections::HashSet;

    #[test]
    fn full_table_round_trip() {
        let table = PropertyTable::from_values(
            elements::all().iter().map(|e| (e.symbol, f64::from(e.atomic_number) * 0.5)),
        )
        .unwrap();
        let filled = table.fill_missing(None);
        assert_eq!(filled, table);

        let entries = build_entries(&filled, DEFAULT_COLUMN, BucketPolicy::default(), None).unwrap();
        assert_eq!(entries.len(), elements::ELEMENT_COUNT);

        let symbols: HashSet<_> = entries.iter().map(|e| e.symbol).collect();
        assert_eq!(symbols.len(), elements::ELEMENT_COUNT);
        assert!(entries.iter().all(|e| e.bucket.is_some()));

        let fe = entries.iter().find(|e| e.symbol == "Fe").unwrap();
        assert_eq!((fe.row, fe.column, fe.atomic_number), (4, 8, 26));
        assert_eq!(fe.value, Some(13.0));
        assert_eq!(fe.text, "13.0");
    }

    #[test]
    fn partial_table_keeps_only_its_rows() {
        let table = PropertyTable::from_values([("La", 6.15), ("Lr", 0.0)]).unwrap();
        let entries = build_entries(&table, DEFAULT_COLUMN, BucketPolicy::default(), Some(1)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!((entries[0].row, entries[0].column), (9, 4));
        assert_eq!(entries[0].text, "6.2");
        assert_eq!((entries[1].row, entries[1].column), (10, 18));
        assert_eq!(entries[1].bucket, Some(Bucket::Low));
    }

    #[test]
    fn formatting() {
        assert_eq!(format_value(Some(1.0), None), "1.0");
        assert_eq!(format_value(Some(3.25), None), "3.25");
        assert_eq!(format_value(Some(3.25), Some(0)), "3");
        assert_eq!(format_value(None, Some(2)), "");
        assert_eq!(format_value(Some(1e16), None), "1e16");
        assert_eq!(format_value(Some(0.00001), None), "1e-5");
    }

    #[test]
    fn range_skips_missing() {
        let table = PropertyTable::from_values([("H", -2.0), ("O", 4.0)]).unwrap().fill_missing(None);
        let entries = build_entries(&table, DEFAULT_COLUMN, BucketPolicy::default(), None).unwrap();
        assert_eq!(value_range(&entries), Some((-2.0, 4.0)));
        assert_eq!(value_range(&[]), None);
    }
}
