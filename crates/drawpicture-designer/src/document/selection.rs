use drawpicture_core::DocumentEvent;

use super::Document;
use crate::model::{Shape, ShapeId};

impl Document {
    pub fn selected_ids(&self) -> &[ShapeId] {
        &self.selection
    }

    /// Selected shapes in selection order.
    pub fn selected_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.selection.iter().filter_map(move |id| self.shape(*id))
    }

    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(&id)
    }

    /// The selected shape when exactly one is selected.
    pub fn single_selection(&self) -> Option<ShapeId> {
        match self.selection.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Selects `id`. Without `multi` the previous selection is replaced.
    /// Returns false when no such shape exists.
    pub fn select_shape(&mut self, id: ShapeId, multi: bool) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        if !multi {
            self.selection.clear();
        }
        if !self.selection.contains(&id) {
            self.selection.push(id);
        }
        self.sync_selection_flags();
        self.notify_selection();
        true
    }

    pub fn deselect_shape(&mut self, id: ShapeId) -> bool {
        if !self.selection.contains(&id) {
            return false;
        }
        self.selection.retain(|s| *s != id);
        self.sync_selection_flags();
        self.notify_selection();
        true
    }

    pub fn deselect_all(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.sync_selection_flags();
        self.notify_selection();
    }

    /// Selects every non-eraser shape on a visible, unlocked layer.
    pub fn select_all(&mut self) {
        let ids: Vec<ShapeId> = self
            .shapes
            .iter()
            .filter(|shape| !shape.is_eraser)
            .filter(|shape| self.layer(&shape.layer).is_some_and(|l| l.is_editable()))
            .map(|shape| shape.id)
            .collect();
        self.selection = ids;
        self.sync_selection_flags();
        self.notify_selection();
    }

    pub(super) fn sync_selection_flags(&mut self) {
        let selection = &self.selection;
        for shape in &mut self.shapes {
            shape.selected = selection.contains(&shape.id);
        }
    }

    pub(super) fn notify_selection(&self) {
        self.notify(DocumentEvent::SelectionChanged {
            count: self.selection.len(),
        });
    }
}
