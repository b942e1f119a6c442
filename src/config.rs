// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::grid::BucketPolicy;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum ExportFormat {
  Pdf,
  Png,
  Svg,
}

impl ExportFormat {
  /// Guess from the file extension (case-insensitive).
  pub fn from_path(path: &Path) -> Option<Self> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
      "pdf" => Some(Self::Pdf),
      "png" => Some(Self::Png),
      "svg" => Some(Self::Svg),
      _ => None,
    }
  }

  pub fn extension(self) -> &'static str {
    match self {
      Self::Pdf => "pdf",
      Self::Png => "png",
      Self::Svg => "svg",
    }
  }
}

// --- RenderStyle ---

/// Figure geometry and colours. Sizes of text are in points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
  /// Width, height in inches.
  pub figure_size: (f64, f64),
  /// Only used for raster output.
  pub dpi: f64,
  pub tile_border: f64,
  pub border_color: (f64, f64, f64),
  pub background_color: (f64, f64, f64),
  /// Fill of tiles without a value.
  pub missing_color: (f64, f64, f64),
  pub low_text_color: (f64, f64, f64),
  pub high_text_color: (f64, f64, f64),
  /// Group and period numbers.
  pub label_color: (f64, f64, f64),
  pub symbol_font_size: f64,
  pub detail_font_size: f64,
  pub label_font_size: f64,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      figure_size: (12.0, 8.0),
      dpi: 100.0,
      tile_border: 2.0,
      border_color: (1.0, 1.0, 1.0),
      background_color: (1.0, 1.0, 1.0),
      missing_color: (0.5, 0.5, 0.5),
      low_text_color: (0.0, 0.0, 0.0),
      high_text_color: (0.827, 0.827, 0.827),
      label_color: (0.5, 0.5, 0.5),
      symbol_font_size: 14.0,
      detail_font_size: 7.0,
      label_font_size: 9.0,
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  pub colormap: String,
  pub default_export_format: ExportFormat,
  pub show_number: bool,
  pub show_values: bool,
  /// Split point of the low/high text-contrast buckets.
  pub contrast_quantile: f64,
  /// Decimals printed under each symbol; `None` keeps the shortest exact form.
  pub value_precision: Option<usize>,
  pub style: RenderStyle,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      colormap: "YlGnBu".to_string(),
      default_export_format: ExportFormat::Pdf,
      show_number: true,
      show_values: true,
      contrast_quantile: 0.75,
      value_precision: None,
      style: RenderStyle::default(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/pthm/settings.json)
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    if path.exists() {
      match Self::load_from(&path) {
        Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
        Err(e) => {
          log::warn!("ignoring unreadable config {}: {}", path.display(), e);
          (Self::default(), format!("Error reading config: {}", e))
        }
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  pub fn load_from(path: &Path) -> Result<Self> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    let path = Self::get_path();
    match self.save_to(&path) {
      Ok(()) => format!("Config saved to {:?}", path),
      Err(e) => format!("Failed to save config: {}", e),
    }
  }

  pub fn save_to(&self, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, self)?;
    Ok(())
  }

  pub fn bucket_policy(&self) -> Result<BucketPolicy> {
    BucketPolicy::new(self.contrast_quantile)
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "pthm") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
