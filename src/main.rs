use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use pthm::config::{Config, ExportFormat};
use pthm::io::{self, TableSource};
use pthm::utils::{logger, report};
use pthm::{PeriodicTableHeatMap, PlotOptions, Result};

#[derive(Debug, Parser)]
#[command(
    name = "pthm",
    about = "Draw a periodic-table heat map of one per-element property",
    version
)]
struct Cli {
    /// Property table (.csv, .xlsx, .json).
    input: PathBuf,

    /// Property column to plot.
    #[arg(short, long)]
    column: String,

    /// Figure to write; format follows the extension unless --format is given.
    #[arg(short, long)]
    output: PathBuf,

    #[arg(long)]
    format: Option<ExportFormat>,

    /// Colormap name, e.g. YlGnBu, viridis_r.
    #[arg(long)]
    cmap: Option<String>,

    /// Value given to elements missing from the table.
    #[arg(long)]
    default_value: Option<f64>,

    /// Column holding the element symbols.
    #[arg(long, default_value = "element")]
    element_column: String,

    /// Worksheet to read from a workbook (first sheet by default).
    #[arg(long)]
    sheet: Option<String>,

    #[arg(long)]
    no_number: bool,

    #[arg(long)]
    no_values: bool,

    /// Split point of the low/high text-contrast buckets.
    #[arg(long)]
    quantile: Option<f64>,

    /// Decimals printed for each value.
    #[arg(long)]
    precision: Option<usize>,

    /// Also write the enriched tile table as CSV.
    #[arg(long)]
    dump_grid: Option<PathBuf>,

    /// Settings file; defaults to the per-user config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a text summary of the plotted values.
    #[arg(long)]
    summary: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Command-line flags override the settings file.
    fn apply(&self, cfg: &mut Config) {
        if let Some(cmap) = &self.cmap {
            cfg.colormap = cmap.clone();
        }
        if let Some(q) = self.quantile {
            cfg.contrast_quantile = q;
        }
        if self.precision.is_some() {
            cfg.value_precision = self.precision;
        }
        if self.no_number {
            cfg.show_number = false;
        }
        if self.no_values {
            cfg.show_values = false;
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => {
            let (cfg, msg) = Config::load();
            log::debug!("{}", msg);
            cfg
        }
    };
    cli.apply(&mut cfg);

    let source = TableSource {
        symbol_column: cli.element_column.clone(),
        sheet: cli.sheet.clone(),
    };
    let table = io::load_table(&cli.input, &source)?;

    let mut heatmap = PeriodicTableHeatMap::new(&table, &cfg.colormap, cli.default_value)?;
    let figure = heatmap.plot(&cli.column, PlotOptions::from_config(&cfg)?)?;

    if cli.summary {
        print!("{}", report::figure_summary(figure, &cli.input.display().to_string()));
    }
    if let Some(path) = &cli.dump_grid {
        io::write_entries(path, &figure.entries)?;
    }

    let format = cli
        .format
        .or_else(|| ExportFormat::from_path(&cli.output))
        .unwrap_or(cfg.default_export_format);
    heatmap.save_fig(&cli.output, format, &cfg.style)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let _ = logger::init(level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
