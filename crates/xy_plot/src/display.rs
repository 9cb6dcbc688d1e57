use crate::{
    config::ViewerConfig,
    error::{Result, XyPlotError},
    render::Figure,
};
use chrono::Local;
use log::{info, warn};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

/// Synchronous sink for finished figures.
///
/// `show` returns only once the figure is no longer on screen, so callers
/// can sequence figures by calling it repeatedly.
pub trait FigureDisplay {
    fn show(&mut self, figure: &Figure) -> Result<()>;
}

/// Writes `<title>_<timestamp>.png` into `dir`, creating it if needed
pub fn write_figure(dir: &Path, figure: &Figure) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| XyPlotError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("{}_{timestamp}.png", figure.title)
        .to_lowercase()
        .replace(' ', "_");
    let path = dir.join(filename);

    figure.save(&path)?;
    info!("wrote {}", path.display());
    Ok(path)
}

/// Saves each figure and blocks on an external viewer until it exits
#[derive(Debug, Clone)]
pub struct ViewerDisplay {
    output_dir: PathBuf,
    viewer: ViewerConfig,
}

impl ViewerDisplay {
    pub fn new(output_dir: impl Into<PathBuf>, viewer: ViewerConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            viewer,
        }
    }
}

impl FigureDisplay for ViewerDisplay {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let path = write_figure(&self.output_dir, figure)?;

        info!("opening {} with {}", path.display(), self.viewer.program);
        let status = Command::new(&self.viewer.program)
            .args(&self.viewer.args)
            .arg(&path)
            .status()
            .map_err(|source| XyPlotError::Viewer {
                program: self.viewer.program.clone(),
                source,
            })?;

        if !status.success() {
            warn!("{} exited with status {status}", self.viewer.program);
        }
        Ok(())
    }
}

/// Saves each figure and returns immediately
#[derive(Debug, Clone, Default)]
pub struct SaveOnlyDisplay {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl SaveOnlyDisplay {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FigureDisplay for SaveOnlyDisplay {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let path = write_figure(&self.output_dir, figure)?;
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Canvas;
    use tempfile::TempDir;

    fn figure(title: &str) -> Figure {
        Canvas::new(8, 8, None).into_figure(title)
    }

    #[test]
    fn test_write_figure_creates_png() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("figs");

        let path = write_figure(&out, &figure("Configuration")).unwrap();
        assert!(path.exists());

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("configuration_"));
        assert!(name.ends_with(".png"));

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
    }

    #[test]
    fn test_save_only_display_records_paths() {
        let temp_dir = TempDir::new().unwrap();
        let mut display = SaveOnlyDisplay::new(temp_dir.path());

        display.show(&figure("configuration")).unwrap();
        display.show(&figure("crosssection_z")).unwrap();

        assert_eq!(display.written().len(), 2);
        assert!(display.written().iter().all(|p| p.exists()));
    }

    #[cfg(unix)]
    #[test]
    fn test_viewer_display_waits_for_viewer() {
        let temp_dir = TempDir::new().unwrap();
        let viewer = ViewerConfig {
            program: "true".to_string(),
            args: Vec::new(),
        };
        let mut display = ViewerDisplay::new(temp_dir.path(), viewer);
        assert!(display.show(&figure("configuration")).is_ok());
    }

    #[test]
    fn test_missing_viewer_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let viewer = ViewerConfig {
            program: "xy-plot-no-such-viewer".to_string(),
            args: Vec::new(),
        };
        let mut display = ViewerDisplay::new(temp_dir.path(), viewer);

        let err = display.show(&figure("configuration")).unwrap_err();
        assert!(matches!(err, XyPlotError::Viewer { .. }));
        assert!(err.to_string().contains("xy-plot-no-such-viewer"));
    }
}
