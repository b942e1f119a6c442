// src/model/property_table.rs

use std::collections::BTreeMap;

use super::elements::{self, ElementRecord};
use crate::error::{HeatmapError, Result};

/// Column name used when a table is built from bare (symbol, value) pairs.
pub const DEFAULT_COLUMN: &str = "property";

/// Per-element property values, one row per element symbol.
///
/// Rows are keyed by atomic number so iteration always runs in table order.
/// Every row holds exactly one slot per column; a `None` slot is a missing value.
/// Symbols are validated on the way in, so an unknown or repeated element can
/// never end up in a table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyTable {
    columns: Vec<String>,
    rows: BTreeMap<u8, Vec<Option<f64>>>,
}

impl PropertyTable {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Result<Self> {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(HeatmapError::invalid_input("a property table needs at least one column"));
        }
        for (i, c) in columns.iter().enumerate() {
            if columns[..i].contains(c) {
                return Err(HeatmapError::invalid_input(format!("column '{}' appears twice", c)));
            }
        }
        Ok(Self { columns, rows: BTreeMap::new() })
    }

    /// Single-column table from (symbol, value) pairs.
    pub fn single_column<S: AsRef<str>>(
        column: &str,
        values: impl IntoIterator<Item = (S, Option<f64>)>,
    ) -> Result<Self> {
        let mut table = Self::new([column])?;
        for (symbol, value) in values {
            table.insert(symbol.as_ref(), vec![value])?;
        }
        Ok(table)
    }

    /// Shorthand for a fully populated single-column table named [`DEFAULT_COLUMN`].
    pub fn from_values<S: AsRef<str>>(values: impl IntoIterator<Item = (S, f64)>) -> Result<Self> {
        Self::single_column(DEFAULT_COLUMN, values.into_iter().map(|(s, v)| (s, Some(v))))
    }

    pub fn insert(&mut self, symbol: &str, values: Vec<Option<f64>>) -> Result<()> {
        let element = elements::by_symbol(symbol).ok_or_else(|| HeatmapError::InvalidElement {
            symbol: symbol.to_string(),
        })?;
        if values.len() != self.columns.len() {
            return Err(HeatmapError::ColumnMismatch {
                symbol: symbol.to_string(),
                expected: self.columns.len(),
                found: values.len(),
            });
        }
        if self.rows.contains_key(&element.atomic_number) {
            return Err(HeatmapError::DuplicateElement { symbol: symbol.to_string() });
        }
        self.rows.insert(element.atomic_number, values);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| HeatmapError::UnknownColumn { column: column.to_string() })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        elements::by_symbol(symbol).is_some_and(|e| self.rows.contains_key(&e.atomic_number))
    }

    /// Value of `column` for `symbol`; `None` when the element, the column or the value is missing.
    pub fn value(&self, symbol: &str, column: &str) -> Option<f64> {
        let idx = self.column_index(column).ok()?;
        let e = elements::by_symbol(symbol)?;
        self.rows.get(&e.atomic_number).and_then(|row| row[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static ElementRecord, &[Option<f64>])> + '_ {
        self.rows.iter().filter_map(|(z, values)| {
            elements::by_number(*z).map(|e| (e, values.as_slice()))
        })
    }

    /// One column as (element, value) pairs in atomic-number order.
    pub fn column(&self, column: &str) -> Result<Vec<(&'static ElementRecord, Option<f64>)>> {
        let idx = self.column_index(column)?;
        Ok(self.iter().map(|(e, values)| (e, values[idx])).collect())
    }

    /// Returns a copy covering every known element.
    ///
    /// Rows already present are kept as they are; each absent element gets
    /// `default` in every column. Applying this twice is the same as once.
    pub fn fill_missing(&self, default: Option<f64>) -> Self {
        let width = self.columns.len();
        let mut rows: BTreeMap<u8, Vec<Option<f64>>> = elements::all()
            .iter()
            .filter(|e| !self.rows.contains_key(&e.atomic_number))
            .map(|e| (e.atomic_number, vec![default; width]))
            .collect();

        let added = rows.len();
        rows.extend(self.rows.iter().map(|(z, v)| (*z, v.clone())));
        log::debug!("filled {} missing elements with {:?}", added, default);

        Self { columns: self.columns.clone(), rows }
    }

    pub fn covers_all_elements(&self) -> bool {
        self.rows.len() == elements::ELEMENT_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_symbol() {
        let err = PropertyTable::from_values([("H", 1.0), ("Xx", 2.0)]).unwrap_err();
        assert!(matches!(err, HeatmapError::InvalidElement { ref symbol } if symbol == "Xx"));
    }

    #[test]
    fn rejects_duplicate_symbol() {
        let err = PropertyTable::from_values([("Fe", 1.0), ("Fe", 2.0)]).unwrap_err();
        assert!(matches!(err, HeatmapError::DuplicateElement { .. }));
    }

    #[test]
    fn rejects_short_rows() {
        let mut t = PropertyTable::new(["a", "b"]).unwrap();
        let err = t.insert("O", vec![Some(1.0)]).unwrap_err();
        assert!(matches!(err, HeatmapError::ColumnMismatch { expected: 2, found: 1, .. }));
    }

    #[test]
    fn rejects_repeated_column_names() {
        assert!(PropertyTable::new(["a", "a"]).is_err());
        assert!(PropertyTable::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn fill_on_empty_table_covers_everything() {
        let t = PropertyTable::new([DEFAULT_COLUMN]).unwrap();
        let filled = t.fill_missing(Some(0.0));
        assert_eq!(filled.len(), elements::ELEMENT_COUNT);
        assert!(filled.covers_all_elements());
        for (_, values) in filled.iter() {
            assert_eq!(values, &[Some(0.0)]);
        }
    }

    #[test]
    fn fill_keeps_existing_rows() {
        let t = PropertyTable::from_values([("Fe", 7.87), ("Cu", 8.96)]).unwrap();
        let filled = t.fill_missing(None);
        assert_eq!(filled.value("Fe", DEFAULT_COLUMN), Some(7.87));
        assert_eq!(filled.value("Cu", DEFAULT_COLUMN), Some(8.96));
        assert_eq!(filled.value("Au", DEFAULT_COLUMN), None);
        assert!(filled.contains("Au"));
        assert!(!t.contains("Au"));
    }

    #[test]
    fn fill_is_idempotent() {
        let t = PropertyTable::from_values([("H", 1.0), ("He", 2.0)]).unwrap();
        let once = t.fill_missing(Some(-1.0));
        let twice = once.fill_missing(Some(-1.0));
        assert_eq!(once, twice);

        // A different default cannot touch an already complete table.
        assert_eq!(once.fill_missing(Some(99.0)), once);
    }

    #[test]
    fn column_lookup() {
        let mut t = PropertyTable::new(["density", "melting_point"]).unwrap();
        t.insert("Al", vec![Some(2.70), Some(933.47)]).unwrap();
        t.insert("H", vec![None, Some(13.99)]).unwrap();

        let mp = t.column("melting_point").unwrap();
        assert_eq!(mp[0].0.symbol, "H");
        assert_eq!(mp[1], (elements::by_symbol("Al").unwrap(), Some(933.47)));
        assert!(matches!(t.column("boiling_point"), Err(HeatmapError::UnknownColumn { .. })));
    }
}
