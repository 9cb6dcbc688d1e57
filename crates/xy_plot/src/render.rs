pub mod canvas;
pub mod colors;
pub mod graph_plot;
pub mod heatmap;

pub use canvas::{Canvas, load_system_font};
pub use graph_plot::{GraphLayout, render_graph};
pub use heatmap::{HeatmapLayout, render_heatmap};

use crate::error::Result;
use image::RgbImage;
use std::path::Path;

/// Finished raster figure, ready for a display
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub image: RgbImage,
}

impl Figure {
    /// 画像を保存
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
