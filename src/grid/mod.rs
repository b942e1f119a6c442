// src/grid/mod.rs
//! Element-to-tile mapping and contrast bucketing for the heat map.

pub mod classify;
pub mod coordinates;
pub mod entries;

pub use classify::{classify, thresholds, Bucket, BucketPolicy, Thresholds};
pub use coordinates::{
    build_coordinate_tables, coordinate_tables, group_labels, grid_position, position_of,
    CoordinateTables, GridPosition, GroupLabel,
};
pub use entries::{build_entries, format_value, value_range, GridEntry};
