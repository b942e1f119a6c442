// src/rendering/layout.rs

use crate::grid::coordinates::{ACTINIDE_ROW, GROUP_COUNT};

/// Data-space window drawn by the figure: one spare column on the left for the
/// period numbers, and half a row below the actinide strip.
pub const X_MIN: f64 = -0.5;
pub const X_MAX: f64 = GROUP_COUNT as f64 + 0.5;
pub const Y_MIN: f64 = 0.0;
pub const Y_MAX: f64 = ACTINIDE_ROW as f64 + 0.5;

/// Maps grid coordinates (column, row) to device pixels.
///
/// One grid unit has the same length on both axes, and rows grow downwards so
/// period 1 is at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    pub unit: f64,
    pub origin: (f64, f64),
}

impl TileLayout {
    /// Largest square-unit layout that fits `width` x `height`, centred.
    pub fn fit(width: u32, height: u32) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        let (span_x, span_y) = (X_MAX - X_MIN, Y_MAX - Y_MIN);
        let unit = (w / span_x).min(h / span_y);
        Self {
            unit,
            origin: ((w - span_x * unit) / 2.0, (h - span_y * unit) / 2.0),
        }
    }

    pub fn to_pixel(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (self.origin.0 + (x - X_MIN) * self.unit).round() as i32,
            (self.origin.1 + (y - Y_MIN) * self.unit).round() as i32,
        )
    }

    pub fn tile_center(&self, row: u8, column: u8) -> (i32, i32) {
        self.to_pixel(f64::from(column), f64::from(row))
    }

    /// Point offset from a tile centre by grid units; positive `up` moves towards row 1.
    pub fn nudge(&self, row: u8, column: u8, right: f64, up: f64) -> (i32, i32) {
        self.to_pixel(f64::from(column) + right, f64::from(row) - up)
    }

    /// Opposite corners of a tile, shrunk by `inset` pixels on every side.
    pub fn tile_rect(&self, row: u8, column: u8, inset: f64) -> [(i32, i32); 2] {
        let half = 0.5 * self.unit - inset;
        let (cx, cy) = (
            self.origin.0 + (f64::from(column) - X_MIN) * self.unit,
            self.origin.1 + (f64::from(row) - Y_MIN) * self.unit,
        );
        [
            ((cx - half).round() as i32, (cy - half).round() as i32),
            ((cx + half).round() as i32, (cy + half).round() as i32),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_width_limited_canvas() {
        // 19 x 10.5 units into 1900 x 2000 px: width limits, unit = 100.
        let l = TileLayout::fit(1900, 2000);
        assert_eq!(l.unit, 100.0);
        assert_eq!(l.origin, (0.0, 475.0));
    }

    #[test]
    fn fits_height_limited_canvas() {
        let l = TileLayout::fit(1900, 840);
        assert_eq!(l.unit, 80.0);
        assert_eq!(l.origin, (190.0, 0.0));
    }

    #[test]
    fn rows_grow_downwards() {
        let l = TileLayout::fit(1900, 1050);
        let (x1, y1) = l.tile_center(1, 1);
        let (x2, y2) = l.tile_center(2, 18);
        assert!(y2 > y1);
        assert!(x2 > x1);
        assert_eq!((x1, y1), (150, 100));
    }

    #[test]
    fn tiles_are_square_and_inset() {
        let l = TileLayout::fit(1900, 1050);
        let [(x0, y0), (x1, y1)] = l.tile_rect(9, 4, 2.0);
        assert_eq!(x1 - x0, 96);
        assert_eq!(y1 - y0, 96);
        assert_eq!((x0, y0), (402, 852));
    }

    #[test]
    fn nudge_up_moves_towards_row_one() {
        let l = TileLayout::fit(1900, 1050);
        let (_, y) = l.tile_center(3, 3);
        let (_, y_up) = l.nudge(3, 3, 0.0, 0.3);
        assert_eq!(y - y_up, 30);
    }
}
