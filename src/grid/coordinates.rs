// src/grid/coordinates.rs

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::model::elements::{self, ElementRecord};

/// Rows 1..=7 hold the main table; the f-block strips live below a blank row 8.
pub const MAIN_GRID_ROWS: u8 = 7;
pub const LANTHANIDE_ROW: u8 = 9;
pub const ACTINIDE_ROW: u8 = 10;
pub const GROUP_COUNT: u8 = 18;

// Column of the strip = Z - offset, so La and Ac both start under group 4.
const LANTHANIDE_OFFSET: u8 = 53;
const ACTINIDE_OFFSET: u8 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPosition {
    pub row: u8,
    pub column: u8,
}

/// Row, column and atomic number keyed by element symbol.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTables {
    pub rows: HashMap<&'static str, u8>,
    pub columns: HashMap<&'static str, u8>,
    pub numbers: HashMap<&'static str, u8>,
}

impl CoordinateTables {
    pub fn position(&self, symbol: &str) -> Option<GridPosition> {
        Some(GridPosition {
            row: *self.rows.get(symbol)?,
            column: *self.columns.get(symbol)?,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

static COORDINATES: OnceLock<CoordinateTables> = OnceLock::new();

/// Shared tables, computed on first use.
pub fn coordinate_tables() -> &'static CoordinateTables {
    COORDINATES.get_or_init(build_coordinate_tables)
}

/// Where an element is drawn.
///
/// Group 3 of periods 6 and 7 is the whole f-block; drawing it at column 3
/// would stack fifteen tiles on one cell, so each series is laid out as its own
/// strip (rows 9 and 10) running from column 4 to 18.
pub fn grid_position(element: &ElementRecord) -> GridPosition {
    match (element.period, element.group) {
        (6, 3) => GridPosition {
            row: LANTHANIDE_ROW,
            column: element.atomic_number - LANTHANIDE_OFFSET,
        },
        (7, 3) => GridPosition {
            row: ACTINIDE_ROW,
            column: element.atomic_number - ACTINIDE_OFFSET,
        },
        (period, group) => GridPosition { row: period, column: group },
    }
}

pub fn build_coordinate_tables() -> CoordinateTables {
    let mut tables = CoordinateTables::default();
    for element in elements::all() {
        let pos = grid_position(element);
        tables.rows.insert(element.symbol, pos.row);
        tables.columns.insert(element.symbol, pos.column);
        tables.numbers.insert(element.symbol, element.atomic_number);
    }
    tables
}

pub fn position_of(symbol: &str) -> Option<GridPosition> {
    coordinate_tables().position(symbol)
}

/// Group number printed above the topmost tile of its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupLabel {
    pub group: u8,
    pub row: u8,
}

/// One label per group, positioned at the smallest main-grid row of that group.
pub fn group_labels() -> Vec<GroupLabel> {
    let mut top: [Option<u8>; GROUP_COUNT as usize] = [None; GROUP_COUNT as usize];
    for element in elements::all() {
        let pos = grid_position(element);
        if pos.row > MAIN_GRID_ROWS {
            continue;
        }
        let slot = &mut top[usize::from(pos.column) - 1];
        *slot = Some(slot.map_or(pos.row, |r| r.min(pos.row)));
    }

    top.iter()
        .zip(1..=GROUP_COUNT)
        .filter_map(|(row, group)| row.map(|row| GroupLabel { group, row }))
        .collect()
}
