// src/io/xlsx.rs

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use super::{table_from_rows, RawCell, TableSource};
use crate::error::{HeatmapError, Result};
use crate::model::PropertyTable;

pub fn parse(path: &Path, source: &TableSource) -> Result<PropertyTable> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match &source.sheet {
        Some(name) => workbook.worksheet_range(name)?,
        None => {
            // First sheet by default
            let first = workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| HeatmapError::invalid_input("workbook has no sheets"))?;
            log::debug!("reading sheet '{}' of {}", first, path.display());
            workbook.worksheet_range(&first)?
        }
    };

    table_from_range(&range, source)
}

fn to_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Int(n) => RawCell::Number(*n as f64),
        Data::Float(n) => RawCell::Number(*n),
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Empty | Data::Error(_) => RawCell::Empty,
        other => RawCell::Text(other.to_string()),
    }
}

/// First row of the range is the header.
pub fn table_from_range(range: &Range<Data>, source: &TableSource) -> Result<PropertyTable> {
    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| HeatmapError::invalid_input("sheet is empty"))?
        .iter()
        .map(|c| c.to_string())
        .collect();

    let data = rows.map(|r| r.iter().map(to_cell).collect::<Vec<_>>());
    table_from_rows(&headers, data, source)
}
