//! The drawing document.
//!
//! A [`Document`] exclusively owns the shape arena (index = z-order, index 0 at
//! the bottom), the layer list, the current layer, the selection and the undo
//! history. Shapes are referenced from outside by their stable [`ShapeId`].
//!
//! Every undoable mutation follows the same sequence: record a pre-image
//! snapshot, change the state, mark the document dirty, publish an event.
//! Selection changes are published but never recorded.

mod layers;
mod persistence;
mod selection;
mod shapes;

use std::path::PathBuf;
use std::sync::Arc;

use drawpicture_core::{DocumentEvent, EventBus};
use drawpicture_settings::Config;

use crate::history::{HistoryManager, HistorySnapshot};
use crate::hit_test::{HitFilter, HitTester};
use crate::layer::Layer;
use crate::model::{Point, Shape, ShapeId};
use crate::serialization::DocumentMetadata;

pub struct Document {
    shapes: Vec<Shape>,
    layers: Vec<Layer>,
    current_layer: String,
    selection: Vec<ShapeId>,
    file_path: Option<PathBuf>,
    metadata: Option<DocumentMetadata>,
    modified: bool,
    history: HistoryManager,
    hit_tester: HitTester,
    clone_offset: f64,
    next_id: u64,
    events: Arc<EventBus>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document with one default layer and default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let layer = Layer::default();
        Self {
            shapes: Vec::new(),
            current_layer: layer.name.clone(),
            layers: vec![layer],
            selection: Vec::new(),
            file_path: None,
            metadata: None,
            modified: false,
            history: HistoryManager::from_settings(&config.history),
            hit_tester: HitTester::new(config.hit_test.clone()),
            clone_offset: config.tools.clone_offset,
            next_id: 1,
            events: Arc::new(EventBus::new()),
        }
    }

    /// Publish to a shared bus instead of a private one.
    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    pub fn hit_tester(&self) -> &HitTester {
        &self.hit_tester
    }

    /// Top-most shape under a world point that passes `filter`.
    pub fn shape_at(&self, point: Point, filter: HitFilter) -> Option<ShapeId> {
        self.hit_tester
            .shape_at(&self.shapes, &self.layers, point, filter)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    pub fn file_path(&self) -> Option<&std::path::Path> {
        self.file_path.as_deref()
    }

    /// File name for title bars, "Untitled" before the first save.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    // ---------------------------------------------------------------------
    // History
    // ---------------------------------------------------------------------

    /// Deep copy of the undoable state, with selection flags cleared.
    pub fn snapshot(&self) -> HistorySnapshot {
        let mut shapes = self.shapes.clone();
        for shape in &mut shapes {
            shape.selected = false;
        }
        HistorySnapshot {
            shapes,
            layers: self.layers.clone(),
            current_layer: self.current_layer.clone(),
        }
    }

    /// Pushes the current state onto the undo stack and clears redo.
    pub fn record_state(&mut self) {
        let snapshot = self.snapshot();
        self.history.push(snapshot);
        self.notify_history();
    }

    /// Records a snapshot taken earlier, for gestures that edit live and only
    /// become undoable once they finish.
    pub fn commit_snapshot(&mut self, snapshot: HistorySnapshot) {
        self.history.push(snapshot);
        self.modified = true;
        self.notify(DocumentEvent::ShapesChanged);
        self.notify_history();
    }

    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                tracing::debug!("Undo, {} steps left", self.history.undo_depth());
                self.restore(previous);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                tracing::debug!("Redo, {} steps left", self.history.redo_depth());
                self.restore(next);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    fn restore(&mut self, snapshot: HistorySnapshot) {
        self.shapes = snapshot.shapes;
        self.layers = snapshot.layers;
        self.current_layer = snapshot.current_layer;
        self.selection.clear();
        for shape in &mut self.shapes {
            shape.selected = false;
        }
        self.modified = true;
        self.notify(DocumentEvent::ShapesChanged);
        self.notify(DocumentEvent::LayersChanged);
        self.notify(DocumentEvent::SelectionChanged { count: 0 });
        self.notify_history();
    }

    // ---------------------------------------------------------------------
    // Internal helpers
    // ---------------------------------------------------------------------

    fn allocate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn finish_change(&mut self, event: DocumentEvent) {
        self.modified = true;
        self.notify(event);
    }

    pub(crate) fn notify(&self, event: DocumentEvent) {
        if let Err(e) = self.events.publish(event) {
            tracing::trace!("Document event dropped: {}", e);
        }
    }

    fn notify_history(&self) {
        self.notify(DocumentEvent::HistoryChanged {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        });
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("shapes", &self.shapes.len())
            .field("layers", &self.layers.len())
            .field("current_layer", &self.current_layer)
            .field("selection", &self.selection)
            .field("modified", &self.modified)
            .finish()
    }
}
