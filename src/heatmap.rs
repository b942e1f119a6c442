// src/heatmap.rs

use std::path::Path;

use serde::Serialize;

use crate::config::{Config, ExportFormat, RenderStyle};
use crate::error::{HeatmapError, Result};
use crate::grid::{self, BucketPolicy, GridEntry, GroupLabel};
use crate::model::PropertyTable;
use crate::rendering::{self, Colormap};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotOptions {
    pub show_number: bool,
    pub show_values: bool,
    pub policy: BucketPolicy,
    pub precision: Option<usize>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            show_number: true,
            show_values: true,
            policy: BucketPolicy::default(),
            precision: None,
        }
    }
}

impl PlotOptions {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        Ok(Self {
            show_number: cfg.show_number,
            show_values: cfg.show_values,
            policy: cfg.bucket_policy()?,
            precision: cfg.value_precision,
        })
    }
}

/// Everything the plotting backend needs to draw one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapFigure {
    pub column: String,
    pub entries: Vec<GridEntry>,
    pub group_labels: Vec<GroupLabel>,
    /// Domain of the fill gradient; `None` if the column has no finite value.
    pub value_range: Option<(f64, f64)>,
    pub options: PlotOptions,
}

/// Heat map of per-element properties laid out as a periodic table.
///
/// The property table is completed once, at construction: elements it does
/// not mention are added with `default_value` in every column.
#[derive(Debug, Clone)]
pub struct PeriodicTableHeatMap {
    table: PropertyTable,
    colormap: Colormap,
    last_plot: Option<HeatmapFigure>,
}

impl PeriodicTableHeatMap {
    pub fn new(table: &PropertyTable, colormap: &str, default_value: Option<f64>) -> Result<Self> {
        let colormap = Colormap::from_name(colormap)?;
        Ok(Self {
            table: table.fill_missing(default_value),
            colormap,
            last_plot: None,
        })
    }

    pub fn table(&self) -> &PropertyTable {
        &self.table
    }

    pub fn colormap(&self) -> &Colormap {
        &self.colormap
    }

    pub fn last_plot(&self) -> Option<&HeatmapFigure> {
        self.last_plot.as_ref()
    }

    /// Lays out `column` and keeps the result as the figure `save_fig` writes.
    pub fn plot(&mut self, column: &str, options: PlotOptions) -> Result<&HeatmapFigure> {
        let entries = grid::build_entries(&self.table, column, options.policy, options.precision)?;
        let value_range = grid::value_range(&entries);

        let figure = HeatmapFigure {
            column: column.to_string(),
            entries,
            group_labels: grid::group_labels(),
            value_range,
            options,
        };
        let figure = self.last_plot.insert(figure);
        Ok(&*figure)
    }

    pub fn save_fig(&self, path: &Path, format: ExportFormat, style: &RenderStyle) -> Result<()> {
        let figure = self.last_plot.as_ref().ok_or(HeatmapError::NoPlot)?;
        rendering::export_figure(figure, &self.colormap, style, path, format)
    }
}
