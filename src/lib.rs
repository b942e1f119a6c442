//! Periodic-table heat maps.
//!
//! A [`PropertyTable`] of per-element values is completed with a default for
//! the elements it lacks, every element is given a tile position (lanthanides
//! and actinides in their own strips under the main table), values are split
//! into low/high contrast buckets, and the result is drawn with `plotters`
//! onto a cairo surface.

pub mod config;
pub mod error;
pub mod grid;
pub mod heatmap;
pub mod io;
pub mod model;
pub mod rendering;
pub mod utils;

pub use error::{HeatmapError, Result};
pub use heatmap::{HeatmapFigure, PeriodicTableHeatMap, PlotOptions};
pub use model::PropertyTable;
