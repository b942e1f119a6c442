// src/io/mod.rs
pub mod csv_table;
pub mod grid_csv;
pub mod json;
pub mod xlsx;

use std::path::Path;

use crate::error::{HeatmapError, Result};
use crate::model::PropertyTable;

pub use grid_csv::write_entries;

/// Where the element symbols are and, for workbooks, which sheet to read.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSource {
    pub symbol_column: String,
    pub sheet: Option<String>,
}

impl Default for TableSource {
    fn default() -> Self {
        Self {
            symbol_column: "element".to_string(),
            sheet: None,
        }
    }
}

pub fn load_table(path: &Path, source: &TableSource) -> Result<PropertyTable> {
    let p = path.to_string_lossy().to_lowercase();

    let loaded = if p.ends_with(".csv") || p.ends_with(".txt") {
        csv_table::parse(path, source)
    } else if p.ends_with(".xlsx") || p.ends_with(".xlsm") || p.ends_with(".xls") || p.ends_with(".ods") {
        xlsx::parse(path, source)
    } else if p.ends_with(".json") {
        json::parse(path, source)
    } else {
        // Fallback to CSV for unknown extensions
        csv_table::parse(path, source)
    };
    let table = loaded?;

    log::info!(
        "loaded {} elements x {} columns from {}",
        table.len(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// A cell as read from any of the table formats.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawCell {
    Number(f64),
    Text(String),
    Empty,
}

impl RawCell {
    fn to_value(&self) -> std::result::Result<Option<f64>, String> {
        match self {
            RawCell::Number(n) => Ok(Some(*n)),
            RawCell::Empty => Ok(None),
            RawCell::Text(s) => parse_number(s),
        }
    }

    fn as_symbol(&self) -> Option<String> {
        match self {
            RawCell::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

/// Empty cells and the usual missing-value spellings read as `None`.
pub(crate) fn parse_number(text: &str) -> std::result::Result<Option<f64>, String> {
    let t = text.trim();
    if t.is_empty() || ["nan", "na", "n/a", "null", "none", "-"].contains(&t.to_lowercase().as_str()) {
        return Ok(None);
    }
    t.parse::<f64>()
        .map(Some)
        .map_err(|_| format!("'{}' is not a number", t))
}

/// Builds a table from a header row and data rows. The symbol column is
/// located by name; every other header becomes a property column.
/// Rows without a symbol are skipped.
pub(crate) fn table_from_rows(
    headers: &[String],
    rows: impl IntoIterator<Item = Vec<RawCell>>,
    source: &TableSource,
) -> Result<PropertyTable> {
    let symbol_idx = headers
        .iter()
        .position(|h| h.trim() == source.symbol_column)
        .ok_or_else(|| HeatmapError::UnknownColumn {
            column: source.symbol_column.clone(),
        })?;

    let columns: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != symbol_idx)
        .map(|(i, h)| (i, h.trim()))
        .collect();
    let mut table = PropertyTable::new(columns.iter().map(|(_, h)| *h))?;

    for (i, row) in rows.into_iter().enumerate() {
        // Header is row 1
        let row_no = i + 2;
        let Some(symbol) = row.get(symbol_idx).and_then(RawCell::as_symbol) else {
            continue;
        };

        let mut values = Vec::with_capacity(columns.len());
        for (idx, name) in &columns {
            let cell = row.get(*idx).unwrap_or(&RawCell::Empty);
            let value = cell.to_value().map_err(|message| HeatmapError::Parse {
                row: row_no,
                column: name.to_string(),
                message,
            })?;
            values.push(value);
        }
        table.insert(&symbol, values)?;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_spellings() {
        assert_eq!(parse_number(" 2.5 "), Ok(Some(2.5)));
        assert_eq!(parse_number(""), Ok(None));
        assert_eq!(parse_number("NaN"), Ok(None));
        assert_eq!(parse_number("NA"), Ok(None));
        assert_eq!(parse_number("null"), Ok(None));
        assert!(parse_number("dense").is_err());
    }

    #[test]
    fn rows_without_symbol_are_skipped() {
        let headers = vec!["element".to_string(), "x".to_string()];
        let rows = vec![
            vec![RawCell::Text("H".into()), RawCell::Number(1.0)],
            vec![RawCell::Empty, RawCell::Number(2.0)],
            vec![RawCell::Text("He".into())],
        ];
        let t = table_from_rows(&headers, rows, &TableSource::default()).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.value("H", "x"), Some(1.0));
        assert_eq!(t.value("He", "x"), None);
    }

    #[test]
    fn missing_symbol_column() {
        let headers = vec!["symbol".to_string(), "x".to_string()];
        let err = table_from_rows(&headers, Vec::new(), &TableSource::default()).unwrap_err();
        assert!(matches!(err, HeatmapError::UnknownColumn { ref column } if column == "element"));
    }

    #[test]
    fn dispatch_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("t.csv");
        fs::write(&csv_path, "element,x\nNa,1\n").unwrap();
        let json_path = dir.path().join("t.json");
        fs::write(&json_path, r#"[{"element": "Na", "x": 1}]"#).unwrap();

        let a = load_table(&csv_path, &TableSource::default()).unwrap();
        let b = load_table(&json_path, &TableSource::default()).unwrap();
        assert_eq!(a, b);
    }
}
