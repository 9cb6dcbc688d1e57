use crate::{
    constants::{
        DEFAULT_CELL_PX, DEFAULT_GRAPH_CANVAS_PX, DEFAULT_NODE_PX, ENV_VIEWER, MAX_CELL_PX,
        MAX_GRAPH_CANVAS_PX, OUTPUT_DIR, RESULTS_DIR,
    },
    error::{Result, XyPlotError},
    lattice::Axis,
};
use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Run settings. Every field has a default so a partial TOML file is enough.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub results_dir: PathBuf,
    pub output_dir: PathBuf,
    pub axis: Axis,
    pub viewer: ViewerConfig,
    pub heatmap: HeatmapConfig,
    pub graph: GraphConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Edge length of one lattice cell
    pub cell_px: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Edge length of the square plot area
    pub canvas_px: u32,
    /// Marker radius
    pub node_px: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(RESULTS_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            axis: Axis::default(),
            viewer: ViewerConfig::default(),
            heatmap: HeatmapConfig::default(),
            graph: GraphConfig::default(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let (program, args) = if cfg!(target_os = "macos") {
            ("open", vec!["-W"])
        } else if cfg!(target_os = "windows") {
            ("cmd", vec!["/C", "start", "/WAIT", ""])
        } else {
            ("xdg-open", vec![])
        };
        Self {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            cell_px: DEFAULT_CELL_PX,
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            canvas_px: DEFAULT_GRAPH_CANVAS_PX,
            node_px: DEFAULT_NODE_PX,
        }
    }
}

impl ViewerConfig {
    /// Parses "program arg1 arg2"; `None` when blank
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next()?.to_string();
        Some(Self {
            program,
            args: parts.map(str::to_string).collect(),
        })
    }
}

impl Config {
    /// Reads a TOML file, then applies the environment override
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            XyPlotError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| {
            XyPlotError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus the environment override
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(command) = env::var(ENV_VIEWER)
            && let Some(viewer) = ViewerConfig::from_command_line(&command)
        {
            self.viewer = viewer;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.viewer.program.trim().is_empty() {
            return Err(XyPlotError::Config(
                "viewer.program cannot be empty".to_string(),
            ));
        }
        if !(1..=MAX_CELL_PX).contains(&self.heatmap.cell_px) {
            return Err(XyPlotError::Config(format!(
                "heatmap.cell_px must be between 1 and {MAX_CELL_PX}, got {}",
                self.heatmap.cell_px
            )));
        }
        if self.graph.canvas_px == 0 || self.graph.node_px == 0 {
            return Err(XyPlotError::Config(format!(
                "graph sizes must be positive, got canvas_px={} node_px={}",
                self.graph.canvas_px, self.graph.node_px
            )));
        }
        if self.graph.canvas_px > MAX_GRAPH_CANVAS_PX {
            return Err(XyPlotError::Config(format!(
                "graph.canvas_px must be at most {MAX_GRAPH_CANVAS_PX}, got {}",
                self.graph.canvas_px
            )));
        }
        // markers are inset by node_px + 1 on each side
        let inset = 2 * (u64::from(self.graph.node_px) + 1);
        if u64::from(self.graph.canvas_px) <= inset {
            return Err(XyPlotError::Config(format!(
                "graph.canvas_px={} leaves no room for node_px={}",
                self.graph.canvas_px, self.graph.node_px
            )));
        }
        Ok(())
    }
}
