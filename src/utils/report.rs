// src/utils/report.rs

use crate::grid::Bucket;
use crate::heatmap::HeatmapFigure;

const LISTED: usize = 10;

/// Text summary of a plotted figure: coverage, range, and the highest values.
pub fn figure_summary(figure: &HeatmapFigure, filename: &str) -> String {
    let with_value = figure.entries.iter().filter(|e| e.value.is_some()).count();
    let count = |bucket: Bucket| figure.entries.iter().filter(|e| e.bucket == Some(bucket)).count();
    let (low, high) = (count(Bucket::Low), count(Bucket::High));

    let mut out = String::new();
    out.push_str(&format!("File: {}\n", filename));
    out.push_str(&format!("Property: {}\n", figure.column));
    out.push_str(&format!(
        "Elements: {} ({} with values, {} missing)\n",
        figure.entries.len(),
        with_value,
        figure.entries.len() - with_value
    ));
    match figure.value_range {
        Some((lo, hi)) => out.push_str(&format!("Range: {} .. {}\n", lo, hi)),
        None => out.push_str("Range: n/a\n"),
    }
    out.push_str(&format!(
        "Contrast split at q{}: {} high, {} low\n",
        figure.options.policy.quantile(),
        high,
        low
    ));

    let mut ranked: Vec<_> = figure
        .entries
        .iter()
        .filter_map(|e| e.value.map(|v| (e, v)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!(
        "{:<8} {:<8} {:<8} {:<12} {:<6}\n",
        "Z", "Element", "Tile", "Value", "Bucket"
    ));
    out.push_str("--------------------------------------------------\n");

    for (e, _) in ranked.iter().take(LISTED) {
        out.push_str(&format!(
            "{:<8} {:<8} {:<8} {:<12} {:<6}\n",
            e.atomic_number,
            e.symbol,
            format!("{},{}", e.row, e.column),
            e.text,
            e.bucket.map_or("-", Bucket::as_str)
        ));
    }

    if ranked.len() > LISTED {
        out.push_str(&format!("... and {} more values.\n", ranked.len() - LISTED));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatmap::{PeriodicTableHeatMap, PlotOptions};
    use crate::model::{PropertyTable, DEFAULT_COLUMN};

    #[test]
    fn summary_lists_highest_first() {
        let table = PropertyTable::from_values([("H", 1.0), ("He", 2.0), ("Li", 3.0), ("Be", 4.0)]).unwrap();
        let mut hm = PeriodicTableHeatMap::new(&table, "YlGnBu", None).unwrap();
        let fig = hm.plot(DEFAULT_COLUMN, PlotOptions::default()).unwrap();

        let text = figure_summary(fig, "light.csv");
        assert!(text.contains("File: light.csv"));
        assert!(text.contains("Elements: 118 (4 with values, 114 missing)"));
        assert!(text.contains("Range: 1 .. 4"));
        assert!(text.contains("1 high, 3 low"));

        let be = text.find("Be ").unwrap();
        let h = text.find("\n1 ").unwrap();
        assert!(be < h);
        assert!(!text.contains("more values"));
    }

    #[test]
    fn infinite_values_are_in_neither_bucket() {
        let table = PropertyTable::from_values([("Li", 1.0), ("Na", 2.0), ("K", f64::INFINITY)]).unwrap();
        let mut hm = PeriodicTableHeatMap::new(&table, "YlGnBu", None).unwrap();
        let fig = hm.plot(DEFAULT_COLUMN, PlotOptions::default()).unwrap();

        let text = figure_summary(fig, "alkali.csv");
        assert!(text.contains("Elements: 118 (3 with values, 115 missing)"));
        assert!(text.contains("1 high, 1 low"));
    }
}
