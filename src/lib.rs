//! # DrawPicture
//!
//! An interactive 2D drawing editor core with support for:
//! - Layered documents of transformable shapes (lines, rectangles, circles,
//!   spirals, sine curves, freehand strokes, stars, super-ellipses, groups)
//! - Hit testing through inverse affine transforms
//! - On-canvas move, scale and rotate handles
//! - Bounded snapshot undo/redo
//!
//! ## Architecture
//!
//! DrawPicture is organized as a workspace with multiple crates:
//!
//! 1. **drawpicture-core** - Error types and the document event bus
//! 2. **drawpicture-settings** - Editor configuration and recent files
//! 3. **drawpicture-designer** - Document model, tools, handles and history
//! 4. **drawpicture** - This crate: re-exports and logging setup
//!
//! Windows, dialogs and pixel rendering belong to the embedding application.

pub use drawpicture_core as core;
pub use drawpicture_designer as designer;
pub use drawpicture_settings as settings;

pub use drawpicture_core::{
    DocumentEvent, Error, EventBus, EventCategory, EventFilter, LayerError, LoadError,
    PersistenceError, Result,
};
pub use drawpicture_designer::{
    create_tool, Document, EditorCommand, HandleController, HitFilter, InputEvent, Layer, Point,
    Rect, Renderer, Shape, ShapeId, ShapeKind, Tool, ToolKind, Transform, Viewport,
};
pub use drawpicture_settings::Config;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Initialize logging with the pretty formatter.
///
/// The filter is read from `RUST_LOG`; INFO is always enabled.
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging with the given output format.
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_line_number(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    tracing::debug!("Logging initialized ({:?})", format);
    Ok(())
}
