use crate::{
    config::Config,
    constants::UNKNOWN_GRAPH_TYPE,
    dataset::Dataset,
    display::FigureDisplay,
    error::Result,
    field::read_scalar_field,
    graph::load_crosssection_graph,
    render::{render_graph, render_heatmap},
};

use ab_glyph::FontVec;
use log::{info, warn};
use std::io::Write;

/// What a run ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Rendered {
        dataset: Dataset,
        side: usize,
        nodes: usize,
        edges: usize,
    },
    /// The dataset name matched nothing; no file was touched
    UnknownGraphType,
}

/// Loads the named dataset and shows the heatmap, then the cross-section graph.
///
/// An unknown `graph_type` writes the literal message to `out` and returns
/// before any file access, font loading included.
pub fn run<W, D, F>(
    graph_type: &str,
    config: &Config,
    load_font: F,
    out: &mut W,
    display: &mut D,
) -> Result<RunOutcome>
where
    W: Write,
    D: FigureDisplay,
    F: FnOnce() -> Option<FontVec>,
{
    let Ok(dataset) = graph_type.parse::<Dataset>() else {
        writeln!(out, "{UNKNOWN_GRAPH_TYPE}")?;
        return Ok(RunOutcome::UnknownGraphType);
    };
    info!("dataset: {dataset} ({})", dataset.prefix());

    let field = read_scalar_field(dataset.field_path(&config.results_dir))?;
    let side = field.side();
    info!(
        "loaded {side}x{side} configuration, angles in [{:.3}, {:.3}]",
        field.min(),
        field.max()
    );

    let graph = load_crosssection_graph(
        dataset.adjacency_path(&config.results_dir),
        side,
        config.axis,
    )?;
    info!(
        "{}-cross-section: {} nodes, {} edges",
        config.axis,
        graph.node_count(),
        graph.edge_count()
    );

    let font = load_font();
    if font.is_none() {
        warn!("No system font found; figures are drawn without labels");
    }

    display.show(&render_heatmap(&field, &config.heatmap, font.as_ref()))?;
    display.show(&render_graph(&graph, &config.graph, font.as_ref()))?;

    Ok(RunOutcome::Rendered {
        dataset,
        side,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    })
}
