//! # DrawPicture Designer
//!
//! The editing core of DrawPicture: a document of transformable shapes
//! organised into layers, picking through inverse transforms, on-canvas
//! handles for move/scale/rotate, and snapshot-based undo/redo.
//!
//! ## Architecture
//!
//! ```text
//! Input events (world space)
//!   └── Tool / HandleController
//!         ├── HitTester (which shape, which handle)
//!         └── Document (shapes, layers, selection)
//!               ├── HistoryManager (bounded snapshots)
//!               └── EventBus (change notification)
//!
//! Renderer (external canvas backend)
//!   └── paint_document / paint_shape / tool overlays
//! ```
//!
//! Pixel rasterisation, windows and dialogs are provided by the embedding
//! application. The core only talks to them through [`Renderer`],
//! [`InputEvent`] and [`DocumentEvent`](drawpicture_core::DocumentEvent).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drawpicture_designer::{Document, Rect, RectangleShape, Shape, ShapeKind};
//!
//! let mut doc = Document::new();
//! let id = doc.add_shape(Shape::new(ShapeKind::Rectangle(RectangleShape::default())));
//! doc.select_shape(id, false);
//! doc.rotate_selected(90.0);
//! doc.undo();
//! ```

pub mod commands;
pub mod document;
pub mod handles;
pub mod history;
pub mod input;
pub mod layer;
pub mod model;
pub mod renderer;
pub mod serialization;
pub mod tools;
pub mod transform;
pub mod viewport;

pub use commands::EditorCommand;
pub use document::Document;
pub use handles::{
    cursor_for, Compass, CursorIcon, HandleController, HandleFrame, HandleId, HandleLayout,
    HandleRole, HandleState,
};
pub use history::{HistoryManager, HistorySnapshot};
pub use hit_test::{HitFilter, HitTester};
pub use input::{Buttons, InputEvent, Key, KeyEvent, Modifiers, MouseButton, PointerEvent};
pub use layer::{Layer, DEFAULT_LAYER_NAME};
pub use model::{
    CircleShape, Color, DashPattern, FreehandShape, Geometry, HitTolerance, LineShape, Point,
    Rect, RectangleShape, Shape, ShapeGroup, ShapeId, ShapeKind, ShapeType, SineCurveShape,
    SpiralShape, StarShape, StrokeStyle, SuperEllipseShape,
};
pub use renderer::{paint_document, paint_shape, DisplayList, DrawCommand, Renderer};
pub use serialization::{DocumentData, DocumentFile, DocumentMetadata, FORMAT_VERSION};
pub use tools::{create_tool, Tool, ToolKind, ToolStyle};
pub use transform::{Affine, Transform, MIN_SCALE};
pub use viewport::Viewport;
