//! Event type definitions for the event bus.
//!
//! Documents publish one of these after every observable change so that
//! renderers and panels can refresh without polling.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root event enum for document notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentEvent {
    /// Shapes were added, removed, reordered or restyled
    ShapesChanged,
    /// A single shape was edited live during a gesture (not yet recorded)
    ShapeUpdated {
        /// Stable id of the shape.
        id: u64,
    },
    /// The selection set changed
    SelectionChanged {
        /// Number of selected shapes after the change.
        count: usize,
    },
    /// The layer list or a layer property changed
    LayersChanged,
    /// The current drawing layer changed
    CurrentLayerChanged {
        /// Name of the new current layer.
        name: String,
    },
    /// Undo or redo availability changed
    HistoryChanged {
        /// Whether an undo step is available.
        can_undo: bool,
        /// Whether a redo step is available.
        can_redo: bool,
    },
    /// A document was loaded
    DocumentLoaded {
        /// Source file, if the data came from disk.
        path: Option<PathBuf>,
    },
    /// The document was written to disk
    DocumentSaved {
        /// Destination file.
        path: PathBuf,
    },
    /// The document was reset to an empty state
    DocumentCleared,
}

impl DocumentEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            DocumentEvent::ShapesChanged | DocumentEvent::ShapeUpdated { .. } => {
                EventCategory::Shapes
            }
            DocumentEvent::SelectionChanged { .. } => EventCategory::Selection,
            DocumentEvent::LayersChanged | DocumentEvent::CurrentLayerChanged { .. } => {
                EventCategory::Layers
            }
            DocumentEvent::HistoryChanged { .. } => EventCategory::History,
            DocumentEvent::DocumentLoaded { .. }
            | DocumentEvent::DocumentSaved { .. }
            | DocumentEvent::DocumentCleared => EventCategory::File,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            DocumentEvent::ShapesChanged => "Shapes changed".to_string(),
            DocumentEvent::ShapeUpdated { id } => format!("Shape {} updated", id),
            DocumentEvent::SelectionChanged { count } => {
                format!("Selection changed ({} selected)", count)
            }
            DocumentEvent::LayersChanged => "Layers changed".to_string(),
            DocumentEvent::CurrentLayerChanged { name } => format!("Current layer: {}", name),
            DocumentEvent::HistoryChanged { can_undo, can_redo } => {
                format!("History: undo={} redo={}", can_undo, can_redo)
            }
            DocumentEvent::DocumentLoaded { path } => match path {
                Some(path) => format!("Loaded {}", path.display()),
                None => "Loaded document data".to_string(),
            },
            DocumentEvent::DocumentSaved { path } => format!("Saved {}", path.display()),
            DocumentEvent::DocumentCleared => "Document cleared".to_string(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Shape list and shape geometry events.
    Shapes,
    /// Selection events.
    Selection,
    /// Layer list events.
    Layers,
    /// Undo/redo availability events.
    History,
    /// Load, save and reset events.
    File,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Shapes => write!(f, "Shapes"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Layers => write!(f, "Layers"),
            EventCategory::History => write!(f, "History"),
            EventCategory::File => write!(f, "File"),
        }
    }
}
