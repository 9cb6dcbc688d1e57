pub mod app;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod display;
pub mod error;
pub mod field;
pub mod graph;
pub mod lattice;
pub mod render;

pub use app::{RunOutcome, run};
pub use config::Config;
pub use dataset::Dataset;
pub use display::{FigureDisplay, SaveOnlyDisplay, ViewerDisplay};
pub use error::{Result, XyPlotError};
pub use field::{ScalarField, read_scalar_field};
pub use graph::{AdjacencyTable, CrossSectionGraph, load_crosssection_graph};
pub use lattice::{Axis, to_1d, to_3d};
pub use render::Figure;
