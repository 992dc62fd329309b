//! DrawPicture Settings Crate
//!
//! Editor configuration (history depth, handle geometry, hit-test tolerances,
//! tool thresholds, view limits) and the recent-files list.

pub mod config;
pub mod error;
pub mod recent_files;

pub use config::{
    Config, HandleSettings, HistorySettings, HitTestSettings, ToolSettings, ViewSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use recent_files::{RecentFiles, DEFAULT_RECENT_FILES};
