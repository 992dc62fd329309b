//! Configuration management for DrawPicture
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - History depth
//! - Handle geometry and drag constraints
//! - Hit-test tolerances
//! - Drawing tool thresholds
//! - View (zoom and grid) limits

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use crate::recent_files::RecentFiles;

/// Undo/redo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots kept on each of the undo and redo stacks
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_depth: 20 }
    }
}

/// Selection handle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleSettings {
    /// Half of the side length of a handle's hit box, in pixels
    pub handle_half_extent: f64,
    /// Distance of the rotate handle above the top-center handle
    pub rotate_handle_offset: f64,
    /// Pointer travel needed before a body drag starts moving the shape
    pub move_threshold: f64,
    /// Smallest scale magnitude reachable by dragging a handle
    pub min_scale: f64,
    /// Rotation snap increment used while Shift is held, in degrees
    pub rotation_snap_degrees: f64,
}

impl Default for HandleSettings {
    fn default() -> Self {
        Self {
            handle_half_extent: 8.0,
            rotate_handle_offset: 20.0,
            move_threshold: 1.0,
            min_scale: 0.1,
            rotation_snap_degrees: 15.0,
        }
    }
}

/// Hit-test tolerances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTestSettings {
    /// Minimum padding of the coarse bounding-box rejection test
    pub min_padding: f64,
    /// Minimum distance tolerance for stroked segments
    pub stroke_tolerance: f64,
    /// Distance tolerance for sampled parametric curves
    pub curve_tolerance: f64,
    /// Number of samples taken along parametric curves
    pub curve_samples: usize,
}

impl Default for HitTestSettings {
    fn default() -> Self {
        Self {
            min_padding: 10.0,
            stroke_tolerance: 5.0,
            curve_tolerance: 5.0,
            curve_samples: 100,
        }
    }
}

/// Drawing tool thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Lines at or below this length are discarded
    pub min_line_length: f64,
    /// Rectangles need both sides above this size
    pub min_rect_side: f64,
    /// Circles at or below this radius are discarded
    pub min_circle_radius: f64,
    /// Freehand strokes need at least this many points
    pub min_freehand_points: usize,
    /// Offset applied to cloned shapes on both axes
    pub clone_offset: f64,
    /// Stroke width of the eraser
    pub eraser_width: f64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            min_line_length: 5.0,
            min_rect_side: 5.0,
            min_circle_radius: 5.0,
            min_freehand_points: 3,
            clone_offset: 10.0,
            eraser_width: 20.0,
        }
    }
}

/// Zoom and grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    pub grid_size: f64,
    pub show_grid: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 5.0,
            zoom_step: 0.1,
            grid_size: 20.0,
            show_grid: false,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub history: HistorySettings,
    pub handles: HandleSettings,
    pub hit_test: HitTestSettings,
    pub tools: ToolSettings,
    pub view: ViewSettings,
    pub recent_files: RecentFiles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/drawpicture/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("drawpicture").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load config from file, or defaults when the file does not exist yet
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.history.max_depth == 0 {
            return Err(ConfigError::out_of_range(
                "history.max_depth",
                self.history.max_depth,
            ));
        }

        let handles = &self.handles;
        if handles.handle_half_extent <= 0.0 {
            return Err(ConfigError::out_of_range(
                "handles.handle_half_extent",
                handles.handle_half_extent,
            ));
        }
        if handles.move_threshold < 0.0 {
            return Err(ConfigError::out_of_range(
                "handles.move_threshold",
                handles.move_threshold,
            ));
        }
        if handles.min_scale <= 0.0 {
            return Err(ConfigError::out_of_range(
                "handles.min_scale",
                handles.min_scale,
            ));
        }
        if handles.rotation_snap_degrees <= 0.0 || handles.rotation_snap_degrees > 360.0 {
            return Err(ConfigError::out_of_range(
                "handles.rotation_snap_degrees",
                handles.rotation_snap_degrees,
            ));
        }

        if self.hit_test.curve_samples < 2 {
            return Err(ConfigError::out_of_range(
                "hit_test.curve_samples",
                self.hit_test.curve_samples,
            ));
        }
        if self.hit_test.curve_tolerance < 0.0 || self.hit_test.stroke_tolerance < 0.0 {
            return Err(ConfigError::out_of_range(
                "hit_test.tolerance",
                self.hit_test.curve_tolerance.min(self.hit_test.stroke_tolerance),
            ));
        }

        let view = &self.view;
        if view.min_zoom <= 0.0 || view.max_zoom < view.min_zoom {
            return Err(ConfigError::out_of_range(
                "view.zoom",
                format!("{}..{}", view.min_zoom, view.max_zoom),
            ));
        }
        if view.zoom_step <= 0.0 {
            return Err(ConfigError::out_of_range("view.zoom_step", view.zoom_step));
        }
        if view.grid_size <= 0.0 {
            return Err(ConfigError::out_of_range("view.grid_size", view.grid_size));
        }

        Ok(())
    }
}
