use super::{
    Figure, PlotRect,
    canvas::Canvas,
    colors::{Colors, angle_color},
};
use crate::{
    config::HeatmapConfig,
    constants::{
        ANGLE_MAX, ANGLE_MIN, COLORBAR_FRACTION, COLORBAR_PAD_PX, FONT_SIZE, LABEL_AREA, MARGIN,
    },
    field::ScalarField,
};

use ab_glyph::FontVec;

/// Pixel placement of the image axes and the colorbar beside it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapLayout {
    pub axes: PlotRect,
    pub colorbar: PlotRect,
    pub width: u32,
    pub height: u32,
}

impl HeatmapLayout {
    pub fn new(side: usize, cell_px: u32) -> Self {
        let extent = side as f64 * cell_px as f64;
        let axes = PlotRect {
            x: MARGIN + LABEL_AREA,
            y: MARGIN,
            width: extent,
            height: extent,
        };
        let colorbar = PlotRect {
            x: axes.right() + COLORBAR_PAD_PX,
            y: axes.y,
            width: (axes.width * COLORBAR_FRACTION).max(1.0),
            height: axes.height,
        };

        let width = (colorbar.right() + LABEL_AREA + MARGIN).ceil() as u32;
        let height = (axes.bottom() + LABEL_AREA + MARGIN).ceil() as u32;

        Self {
            axes,
            colorbar,
            width,
            height,
        }
    }
}

/// Color-mapped image of the field with a vertical colorbar on the right.
/// Field row 0 is drawn at the top.
pub fn render_heatmap(field: &ScalarField, cfg: &HeatmapConfig, font: Option<&FontVec>) -> Figure {
    let side = field.side();
    let layout = HeatmapLayout::new(side, cfg.cell_px);
    let cell = cfg.cell_px as f64;
    let mut canvas = Canvas::new(layout.width, layout.height, font);

    for (r, row) in field.rows().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            canvas.draw_rect(
                layout.axes.x + c as f64 * cell,
                layout.axes.y + r as f64 * cell,
                cell,
                cell,
                angle_color(value),
            );
        }
    }
    draw_frame(&mut canvas, &layout.axes);
    draw_axis_ticks(&mut canvas, &layout.axes, side, cell);

    draw_colorbar(&mut canvas, &layout.colorbar);

    canvas.into_figure("configuration")
}

fn draw_frame(canvas: &mut Canvas<'_>, rect: &PlotRect) {
    canvas.draw_rect_outline(rect.x, rect.y, rect.width, rect.height, Colors::BLACK);
}

/// 先頭と末尾のセル中心に目盛りを描画
fn draw_axis_ticks(canvas: &mut Canvas<'_>, axes: &PlotRect, side: usize, cell: f64) {
    let last = side - 1;
    let ticks = if last == 0 { vec![0] } else { vec![0, last] };

    for t in ticks {
        let offset = (t as f64 + 0.5) * cell;
        let label = t.to_string();

        // x ticks below the axes
        let x = axes.x + offset;
        canvas.draw_line((x, axes.bottom()), (x, axes.bottom() + 4.0), Colors::BLACK);
        canvas.draw_text(x - 4.0, axes.bottom() + 6.0, &label, FONT_SIZE, Colors::BLACK);

        // y ticks left of the axes
        let y = axes.y + offset;
        canvas.draw_line((axes.x - 4.0, y), (axes.x, y), Colors::BLACK);
        canvas.draw_text(
            axes.x - 8.0 - 8.0 * label.len() as f64,
            y - FONT_SIZE / 2.0,
            &label,
            FONT_SIZE,
            Colors::BLACK,
        );
    }
}

/// 下端が ANGLE_MIN、上端が ANGLE_MAX のグラデーション
fn draw_colorbar(canvas: &mut Canvas<'_>, bar: &PlotRect) {
    let rows = bar.height.round().max(1.0) as usize;
    for k in 0..rows {
        // k = 0 is the top pixel row
        let t = 1.0 - (k as f64 + 0.5) / rows as f64;
        let angle = ANGLE_MIN + t * (ANGLE_MAX - ANGLE_MIN);
        canvas.draw_rect(bar.x, bar.y + k as f64, bar.width, 1.0, angle_color(angle));
    }
    draw_frame(canvas, bar);

    let labels = [(0.0, "0"), (0.5, "π"), (1.0, "2π")];
    for (t, label) in labels {
        let y = bar.bottom() - t * bar.height;
        canvas.draw_line((bar.right(), y), (bar.right() + 4.0, y), Colors::BLACK);
        canvas.draw_text(bar.right() + 6.0, y - FONT_SIZE / 2.0, label, FONT_SIZE, Colors::BLACK);
    }
}
