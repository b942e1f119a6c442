// src/rendering/export.rs

use std::fs::{self, File};
use std::path::Path;

use cairo::{Context, Format, ImageSurface, PdfSurface, SvgSurface};
use plotters::drawing::IntoDrawingArea;
use plotters_cairo::CairoBackend;

use super::colormap::Colormap;
use super::heatmap::draw_heatmap;
use crate::config::{ExportFormat, RenderStyle};
use crate::error::{HeatmapError, Result};
use crate::heatmap::HeatmapFigure;

const POINTS_PER_INCH: f64 = 72.0;

fn render_err<E: std::fmt::Debug>(e: E) -> HeatmapError {
    HeatmapError::Render(format!("{:?}", e))
}

/// Figure size in device units: points for vector output, pixels for PNG.
pub fn canvas_size(style: &RenderStyle, format: ExportFormat) -> (u32, u32) {
    let (w_in, h_in) = style.figure_size;
    let per_inch = match format {
        ExportFormat::Png => style.dpi,
        ExportFormat::Pdf | ExportFormat::Svg => POINTS_PER_INCH,
    };
    (
        (w_in * per_inch).round().max(1.0) as u32,
        (h_in * per_inch).round().max(1.0) as u32,
    )
}

// Runs the plotters chart on top of an existing cairo context
fn draw_on_context(
    cr: &Context,
    size: (u32, u32),
    figure: &HeatmapFigure,
    colormap: &Colormap,
    style: &RenderStyle,
    scale: f64,
) -> Result<()> {
    let backend = CairoBackend::new(cr, size).map_err(render_err)?;
    let root = backend.into_drawing_area();
    draw_heatmap(&root, figure, colormap, style, scale).map_err(|e| HeatmapError::Render(e.to_string()))
}

// --- File Export Entry Point ---
pub fn export_figure(
    figure: &HeatmapFigure,
    colormap: &Colormap,
    style: &RenderStyle,
    path: &Path,
    format: ExportFormat,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let (width, height) = canvas_size(style, format);

    match format {
        ExportFormat::Pdf => {
            let surface = PdfSurface::new(f64::from(width), f64::from(height), path).map_err(render_err)?;
            let cr = Context::new(&surface).map_err(render_err)?;
            draw_on_context(&cr, (width, height), figure, colormap, style, 1.0)?;
            surface.finish();
        }
        ExportFormat::Svg => {
            let surface = SvgSurface::new(f64::from(width), f64::from(height), Some(path)).map_err(render_err)?;
            let cr = Context::new(&surface).map_err(render_err)?;
            draw_on_context(&cr, (width, height), figure, colormap, style, 1.0)?;
            surface.finish();
        }
        ExportFormat::Png => {
            let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32).map_err(render_err)?;
            {
                let cr = Context::new(&surface).map_err(render_err)?;
                let scale = style.dpi / POINTS_PER_INCH;
                draw_on_context(&cr, (width, height), figure, colormap, style, scale)?;
            }
            let mut file = File::create(path)?;
            surface.write_to_png(&mut file).map_err(render_err)?;
        }
    }

    log::info!(
        "exported '{}' heat map ({}x{} {}) to {}",
        figure.column,
        width,
        height,
        format.extension(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatmap::{PeriodicTableHeatMap, PlotOptions};
    use crate::model::{PropertyTable, DEFAULT_COLUMN};

    fn plotted() -> PeriodicTableHeatMap {
        let table = PropertyTable::from_values([("C", 2.26), ("Si", 2.33), ("Ge", 5.32)]).unwrap();
        let mut hm = PeriodicTableHeatMap::new(&table, "YlGnBu", None).unwrap();
        hm.plot(DEFAULT_COLUMN, PlotOptions::default()).unwrap();
        hm
    }

    #[test]
    fn canvas_sizes() {
        let style = RenderStyle::default();
        assert_eq!(canvas_size(&style, ExportFormat::Pdf), (864, 576));
        assert_eq!(canvas_size(&style, ExportFormat::Svg), (864, 576));
        assert_eq!(canvas_size(&style, ExportFormat::Png), (1200, 800));
    }

    #[test]
    fn writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("density.pdf");
        plotted().save_fig(&path, ExportFormat::Pdf, &RenderStyle::default()).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("density.png");
        let mut style = RenderStyle::default();
        style.figure_size = (4.0, 3.0);
        style.dpi = 50.0;
        plotted().save_fig(&path, ExportFormat::Png, &style).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("density.svg");
        plotted().save_fig(&path, ExportFormat::Svg, &RenderStyle::default()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("<svg"));
    }
}
