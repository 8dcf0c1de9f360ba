use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub run: RunSettings,
    #[serde(default)]
    pub chart: ChartStyle,
}

impl Config {
    /// Rejects chart dimensions that cannot produce a drawable canvas.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let chart = &self.chart;
        if chart.canvas_width == 0 || chart.canvas_height == 0 {
            return Err(ConfigError::Validation(format!(
                "canvas must have a positive size, got {}x{}",
                chart.canvas_width, chart.canvas_height
            )));
        }
        if !(chart.marker_size > 0.0) {
            return Err(ConfigError::Validation(format!(
                "marker_size must be positive, got {}",
                chart.marker_size
            )));
        }
        if !(chart.line_thickness > 0.0) {
            return Err(ConfigError::Validation(format!(
                "line_thickness must be positive, got {}",
                chart.line_thickness
            )));
        }
        Ok(())
    }
}

/// Drawing parameters shared by every generated chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Width of the exported canvas, in points.
    pub canvas_width: u32,
    /// Height of the exported canvas, in points.
    pub canvas_height: u32,
    pub marker_size: f64,
    /// Stroke width of every series line.
    pub line_thickness: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            canvas_width: 640,
            canvas_height: 400,
            marker_size: 5.0,
            line_thickness: 2.0,
        }
    }
}

/// Input and output locations as gathered from the config file, the
/// environment and the command line. Either may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RunSettings {
    /// The benchmark CSV to read.
    pub input_path: Option<PathBuf>,
    /// The directory that receives every generated document.
    pub output_directory: Option<PathBuf>,
}

impl RunSettings {
    /// Replaces any setting for which an override is given.
    pub fn with_overrides(mut self, input_path: Option<PathBuf>, output_directory: Option<PathBuf>) -> Self {
        if input_path.is_some() {
            self.input_path = input_path;
        }
        if output_directory.is_some() {
            self.output_directory = output_directory;
        }
        self
    }

    /// Produces a complete `RunConfig`, or fails if a location was never supplied.
    ///
    /// A run without both locations is cancelled as a whole, before any
    /// document is produced.
    pub fn resolve(&self) -> Result<RunConfig, ConfigError> {
        let input_path = self.input_path.clone().ok_or_else(|| {
            ConfigError::Validation("no input dataset was supplied (run.input_path / --input)".to_string())
        })?;
        let output_directory = self.output_directory.clone().ok_or_else(|| {
            ConfigError::Validation(
                "no output directory was supplied (run.output_directory / --output)".to_string(),
            )
        })?;

        Ok(RunConfig {
            input_path,
            output_directory,
        })
    }
}

/// Fully resolved locations for a single report run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_directory: PathBuf,
}
