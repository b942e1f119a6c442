// src/io/json.rs

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use super::{table_from_rows, RawCell, TableSource};
use crate::error::{HeatmapError, Result};
use crate::model::{PropertyTable, DEFAULT_COLUMN};

/// Accepts either a list of records, `[{"element": "Fe", "density": 7.87}, ...]`,
/// or a flat object `{"Fe": 7.87, ...}` which becomes the `property` column.
pub fn parse(path: &Path, source: &TableSource) -> Result<PropertyTable> {
    let value: Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    from_value(&value, source)
}

pub fn from_value(value: &Value, source: &TableSource) -> Result<PropertyTable> {
    match value {
        Value::Array(records) => from_records(records, source),
        Value::Object(map) => {
            let mut table = PropertyTable::new([DEFAULT_COLUMN])?;
            for (i, (symbol, v)) in map.iter().enumerate() {
                let cell = to_cell(v).map_err(|message| HeatmapError::Parse {
                    row: i + 1,
                    column: symbol.clone(),
                    message,
                })?;
                let value = cell.to_value().map_err(|message| HeatmapError::Parse {
                    row: i + 1,
                    column: symbol.clone(),
                    message,
                })?;
                table.insert(symbol, vec![value])?;
            }
            Ok(table)
        }
        _ => Err(HeatmapError::invalid_input("expected a JSON array of records or an object")),
    }
}

fn to_cell(v: &Value) -> std::result::Result<RawCell, String> {
    match v {
        Value::Null => Ok(RawCell::Empty),
        Value::Number(n) => n.as_f64().map(RawCell::Number).ok_or_else(|| format!("{} out of range", n)),
        Value::String(s) => Ok(RawCell::Text(s.clone())),
        other => Err(format!("unsupported value {}", other)),
    }
}

fn from_records(records: &[Value], source: &TableSource) -> Result<PropertyTable> {
    // Header = symbol column first, then every other key in first-seen order
    let mut headers = vec![source.symbol_column.clone()];
    for record in records {
        let obj = record
            .as_object()
            .ok_or_else(|| HeatmapError::invalid_input("every record must be a JSON object"))?;
        for key in obj.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let mut rows = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let mut row = Vec::with_capacity(headers.len());
        for header in &headers {
            let cell = match record.get(header) {
                Some(v) => to_cell(v).map_err(|message| HeatmapError::Parse {
                    row: i + 2,
                    column: header.clone(),
                    message,
                })?,
                None => RawCell::Empty,
            };
            row.push(cell);
        }
        rows.push(row);
    }

    table_from_rows(&headers, rows, source)
}
