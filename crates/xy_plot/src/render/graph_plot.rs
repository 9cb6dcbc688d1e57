use super::{Figure, PlotRect, canvas::Canvas, colors::Colors};
use crate::{config::GraphConfig, constants::MARGIN, graph::CrossSectionGraph};

use ab_glyph::FontVec;

/// Maps fixed `(i, j)` node attributes onto the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphLayout {
    pub area: PlotRect,
    side: usize,
    inset: f64,
}

impl GraphLayout {
    pub fn new(side: usize, cfg: &GraphConfig) -> Self {
        let size = cfg.canvas_px as f64;
        Self {
            area: PlotRect {
                x: MARGIN,
                y: MARGIN,
                width: size,
                height: size,
            },
            side,
            // keep markers on the edge rows fully inside the area
            inset: cfg.node_px as f64 + 1.0,
        }
    }

    /// Pixel center of the node at `(i, j)`; i grows rightwards, j upwards
    pub fn project(&self, (i, j): (usize, usize)) -> (f64, f64) {
        let span = self.side.saturating_sub(1).max(1) as f64;
        let usable_w = self.area.width - 2.0 * self.inset;
        let usable_h = self.area.height - 2.0 * self.inset;

        let x = self.area.x + self.inset + i as f64 / span * usable_w;
        let y = self.area.bottom() - self.inset - j as f64 / span * usable_h;
        (x, y)
    }

    pub fn image_size(&self) -> (u32, u32) {
        (
            (self.area.right() + MARGIN).ceil() as u32,
            (self.area.bottom() + MARGIN).ceil() as u32,
        )
    }
}

/// Edges as line segments, nodes as small markers, at their lattice positions
pub fn render_graph(graph: &CrossSectionGraph, cfg: &GraphConfig, font: Option<&FontVec>) -> Figure {
    let layout = GraphLayout::new(graph.side(), cfg);
    let (width, height) = layout.image_size();
    let mut canvas = Canvas::new(width, height, font);

    for (a, b) in graph.edges() {
        if let (Some(pa), Some(pb)) = (graph.position(a), graph.position(b)) {
            canvas.draw_line(layout.project(pa), layout.project(pb), Colors::DARK_GRAY);
        }
    }

    // ノードはエッジの上に描画
    for (_, pos) in graph.nodes() {
        canvas.draw_disc(layout.project(pos), cfg.node_px, Colors::NODE_BLUE);
    }

    canvas.into_figure(format!("crosssection_{}", graph.axis()))
}
