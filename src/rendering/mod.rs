pub mod colormap;
pub mod export;
pub mod heatmap;
pub mod layout;

// Re-export specific functions to keep the API clean for the rest of the app
pub use colormap::{Colormap, Palette};
pub use export::{canvas_size, export_figure};
pub use heatmap::draw_heatmap;
pub use layout::TileLayout;
