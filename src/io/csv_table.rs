// src/io/csv_table.rs

use std::path::Path;

use csv::ReaderBuilder;

use super::{table_from_rows, RawCell, TableSource};
use crate::error::Result;
use crate::model::PropertyTable;

pub fn parse(path: &Path, source: &TableSource) -> Result<PropertyTable> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;
    read(reader, source)
}

pub fn parse_str(text: &str, source: &TableSource) -> Result<PropertyTable> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());
    read(reader, source)
}

fn read<R: std::io::Read>(mut reader: csv::Reader<R>, source: &TableSource) -> Result<PropertyTable> {
    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<RawCell> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    RawCell::Empty
                } else {
                    RawCell::Text(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    table_from_rows(&headers, rows, source)
}
