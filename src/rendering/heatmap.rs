// src/rendering/heatmap.rs

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::Rectangle;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, FontDesc, FontFamily, FontStyle, RGBColor, TextStyle};

use super::colormap::Colormap;
use super::layout::TileLayout;
use crate::config::RenderStyle;
use crate::grid::coordinates::MAIN_GRID_ROWS;
use crate::grid::Bucket;
use crate::heatmap::HeatmapFigure;

// Offsets in grid units from the tile centre.
const NUMBER_NUDGE: (f64, f64) = (-0.3, 0.3);
const VALUE_NUDGE: (f64, f64) = (0.0, -0.3);
const GROUP_LABEL_LIFT: f64 = 0.525;

pub(crate) fn rgb((r, g, b): (f64, f64, f64)) -> RGBColor {
    let c = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(c(r), c(g), c(b))
}

fn text_style(size_pt: f64, scale: f64, color: &RGBColor, h: HPos, v: VPos) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, size_pt * scale, FontStyle::Normal)
        .color(color)
        .pos(Pos::new(h, v))
}

// --- Helper Function: Draws the heat map to ANY Backend (Screen, PDF, SVG) ---
/// `scale` converts the style's point sizes to backend pixels (1.0 for
/// vector surfaces, dpi / 72 for bitmaps).
pub fn draw_heatmap<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &HeatmapFigure,
    colormap: &Colormap,
    style: &RenderStyle,
    scale: f64,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&rgb(style.background_color))?;

    let (w, h) = root.dim_in_pixel();
    let layout = TileLayout::fit(w, h);
    log::debug!("heat map canvas {}x{} px, tile {:.1} px", w, h, layout.unit);

    let border = rgb(style.border_color);
    let missing = rgb(style.missing_color);
    let low_text = rgb(style.low_text_color);
    let high_text = rgb(style.high_text_color);
    let label_color = rgb(style.label_color);

    let symbol_style = |c: &RGBColor| text_style(style.symbol_font_size, scale, c, HPos::Center, VPos::Center);
    let detail_style = |c: &RGBColor| text_style(style.detail_font_size, scale, c, HPos::Center, VPos::Center);

    // 1. Tiles
    for entry in &figure.entries {
        let fill = match (entry.value, figure.value_range) {
            (Some(v), Some(range)) if v.is_finite() => colormap.map_value(v, range),
            _ => missing,
        };
        root.draw(&Rectangle::new(
            layout.tile_rect(entry.row, entry.column, 0.0),
            border.filled(),
        ))?;
        root.draw(&Rectangle::new(
            layout.tile_rect(entry.row, entry.column, style.tile_border * scale / 2.0),
            fill.filled(),
        ))?;
    }

    // 2. Text on tiles, coloured by contrast bucket
    for entry in &figure.entries {
        let text_color = match entry.bucket {
            Some(Bucket::High) => &high_text,
            _ => &low_text,
        };

        root.draw_text(
            entry.symbol,
            &symbol_style(text_color),
            layout.tile_center(entry.row, entry.column),
        )?;

        if figure.options.show_number {
            let (dx, dy) = NUMBER_NUDGE;
            root.draw_text(
                &entry.atomic_number.to_string(),
                &detail_style(text_color),
                layout.nudge(entry.row, entry.column, dx, dy),
            )?;
        }

        if figure.options.show_values && !entry.text.is_empty() {
            let (dx, dy) = VALUE_NUDGE;
            root.draw_text(
                &entry.text,
                &detail_style(text_color),
                layout.nudge(entry.row, entry.column, dx, dy),
            )?;
        }
    }

    // 3. Group numbers above each column, period numbers on the left
    let group_style = text_style(style.label_font_size, scale, &label_color, HPos::Center, VPos::Bottom);
    for label in &figure.group_labels {
        root.draw_text(
            &label.group.to_string(),
            &group_style,
            layout.nudge(label.row, label.group, 0.0, GROUP_LABEL_LIFT),
        )?;
    }

    let period_style = text_style(style.label_font_size, scale, &label_color, HPos::Right, VPos::Center);
    for period in 1..=MAIN_GRID_ROWS {
        root.draw_text(&period.to_string(), &period_style, layout.nudge(period, 0, 0.4, 0.0))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatmap::PeriodicTableHeatMap;
    use crate::model::{PropertyTable, DEFAULT_COLUMN};
    use plotters::backend::SVGBackend;
    use plotters::drawing::IntoDrawingArea;

    fn render_svg(heatmap: &mut PeriodicTableHeatMap, show_values: bool) -> String {
        let mut options = crate::heatmap::PlotOptions::default();
        options.show_values = show_values;
        heatmap.plot(DEFAULT_COLUMN, options).unwrap();
        let figure = heatmap.last_plot().unwrap();

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (1200, 800)).into_drawing_area();
            draw_heatmap(&root, figure, heatmap.colormap(), &RenderStyle::default(), 1.0).unwrap();
        }
        svg
    }

    // Contents of every <text> element, trimmed of the line breaks the SVG backend adds.
    fn text_bodies(svg: &str) -> Vec<String> {
        svg.split("<text")
            .skip(1)
            .filter_map(|chunk| {
                let body = chunk.split_once('>')?.1;
                Some(body.split_once("</text>")?.0.trim().to_string())
            })
            .collect()
    }

    #[test]
    fn svg_contains_symbols_numbers_and_values() {
        let table = PropertyTable::from_values([("Fe", 7.87), ("Au", 19.3)]).unwrap();
        let mut hm = PeriodicTableHeatMap::new(&table, "YlGnBu", None).unwrap();
        let svg = render_svg(&mut hm, true);

        let texts = text_bodies(&svg);
        for expected in ["Fe", "Og", "79", "19.3", "7.87"] {
            assert!(texts.iter().any(|t| t == expected), "missing text {}", expected);
        }
        // One outer and one inner rectangle per element.
        assert!(svg.matches("<rect").count() >= 2 * 118);
    }

    #[test]
    fn values_can_be_hidden() {
        let table = PropertyTable::from_values([("Fe", 7.87), ("Au", 19.3)]).unwrap();
        let mut hm = PeriodicTableHeatMap::new(&table, "YlGnBu", None).unwrap();
        let svg = render_svg(&mut hm, false);
        let texts = text_bodies(&svg);
        assert!(texts.iter().any(|t| t == "Au"));
        assert!(texts.iter().any(|t| t == "79"));
        assert!(!texts.iter().any(|t| t == "19.3" || t == "7.87"));
    }

    #[test]
    fn colours_from_unit_tuples() {
        assert_eq!(rgb((1.0, 0.5, 0.0)), RGBColor(255, 128, 0));
        assert_eq!(rgb((2.0, -1.0, 0.827)), RGBColor(255, 0, 211));
    }
}
