// src/rendering/colormap.rs
//! Named fill gradients. A colormap is a list of evenly spaced stops; values in
//! between are blended linearly.

use plotters::style::RGBColor;

use crate::error::{HeatmapError, Result};

// ColorBrewer 9-class sequential schemes
const YLGNBU: [u32; 9] = [
    0xffffd9, 0xedf8b1, 0xc7e9b4, 0x7fcdbb, 0x41b6c4, 0x1d91c0, 0x225ea8, 0x253494, 0x081d58,
];
const YLORRD: [u32; 9] = [
    0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a, 0xe31a1c, 0xbd0026, 0x800026,
];
const BLUES: [u32; 9] = [
    0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b,
];
const GREYS: [u32; 9] = [
    0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000,
];
// matplotlib viridis, sampled at 9 points
const VIRIDIS: [u32; 9] = [
    0x440154, 0x472d7b, 0x3b528b, 0x2c728e, 0x21918c, 0x28ae80, 0x5ec962, 0xaddc30, 0xfde725,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    YlGnBu,
    YlOrRd,
    Blues,
    Greys,
    Viridis,
}

impl Palette {
    pub const ALL: [Palette; 5] = [
        Palette::YlGnBu,
        Palette::YlOrRd,
        Palette::Blues,
        Palette::Greys,
        Palette::Viridis,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Palette::YlGnBu => "YlGnBu",
            Palette::YlOrRd => "YlOrRd",
            Palette::Blues => "Blues",
            Palette::Greys => "Greys",
            Palette::Viridis => "viridis",
        }
    }

    fn stops(self) -> &'static [u32] {
        match self {
            Palette::YlGnBu => &YLGNBU,
            Palette::YlOrRd => &YLORRD,
            Palette::Blues => &BLUES,
            Palette::Greys => &GREYS,
            Palette::Viridis => &VIRIDIS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Colormap {
    pub palette: Palette,
    pub reversed: bool,
}

impl Colormap {
    /// Accepts matplotlib-style names, including the `_r` suffix. Case-insensitive.
    pub fn from_name(name: &str) -> Result<Self> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };
        Palette::ALL
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(base))
            .map(|&palette| Self { palette, reversed })
            .ok_or_else(|| HeatmapError::UnknownColormap { name: name.to_string() })
    }

    pub fn name(&self) -> String {
        if self.reversed {
            format!("{}_r", self.palette.name())
        } else {
            self.palette.name().to_string()
        }
    }

    /// Colour at `t` in [0, 1]; out-of-range input is clamped.
    pub fn map(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };

        let stops = self.palette.stops();
        let pos = t * (stops.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = (lo + 1).min(stops.len() - 1);
        let frac = pos - lo as f64;

        let (r0, g0, b0) = split_rgb(stops[lo]);
        let (r1, g1, b1) = split_rgb(stops[hi]);
        RGBColor(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
    }

    /// Maps `value` over `range`; a degenerate range sits mid-gradient.
    pub fn map_value(&self, value: f64, (min, max): (f64, f64)) -> RGBColor {
        let span = max - min;
        if span.abs() < f64::EPSILON {
            self.map(0.5)
        } else {
            self.map((value - min) / span)
        }
    }
}

fn split_rgb(hex: u32) -> (u8, u8, u8) {
    (((hex >> 16) & 0xff) as u8, ((hex >> 8) & 0xff) as u8, (hex & 0xff) as u8)
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}
