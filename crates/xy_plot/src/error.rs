use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, XyPlotError>;

#[derive(Debug, Error)]
pub enum XyPlotError {
    #[error("Failed to open {path}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Invalid value at line {line}: {token}")]
    FieldParse {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Invalid neighbor index at line {line}: {token}")]
    AdjacencyParse {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Neighbor index {index} at line {line} is outside the lattice (L^3 = {sites})")]
    NeighborOutOfRange {
        line: usize,
        index: usize,
        sites: usize,
    },

    #[error("Invalid shape: {0}")]
    Shape(String),

    #[error("Configuration error: unknown axis `{0}` (expected x, y or z)")]
    InvalidAxis(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("Failed to launch viewer {program}")]
    Viewer {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl From<toml::de::Error> for XyPlotError {
    fn from(err: toml::de::Error) -> Self {
        XyPlotError::Config(format!("TOML parse error: {err}"))
    }
}
