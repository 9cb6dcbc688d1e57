use std::f64::consts::TAU;

/// Input locations
pub const RESULTS_DIR: &str = "results";
pub const FIELD_EXT: &str = "txt";
pub const ADJACENCY_SUFFIX: &str = "_adj";

/// Output location for rendered figures
pub const OUTPUT_DIR: &str = "figs";

/// Color scale bounds of the heatmap (angles)
pub const ANGLE_MIN: f64 = 0.0;
pub const ANGLE_MAX: f64 = TAU;

/// Colorbar width as a fraction of the axes width
pub const COLORBAR_FRACTION: f64 = 0.05;

/// Gap between the axes and the colorbar (px)
pub const COLORBAR_PAD_PX: f64 = 5.0;

/// Figure layout (px)
pub const MARGIN: f64 = 40.0;
pub const LABEL_AREA: f64 = 40.0;
pub const FONT_SIZE: f64 = 14.0;
pub const DEFAULT_CELL_PX: u32 = 16;
pub const DEFAULT_GRAPH_CANVAS_PX: u32 = 640;
pub const DEFAULT_NODE_PX: u32 = 3;
pub const MAX_CELL_PX: u32 = 256;
pub const MAX_GRAPH_CANVAS_PX: u32 = 8192;

/// Literal message for an unrecognized dataset name
pub const UNKNOWN_GRAPH_TYPE: &str = "Unknown graph type";

/// Environment override for the viewer command
pub const ENV_VIEWER: &str = "XY_PLOT_VIEWER";
