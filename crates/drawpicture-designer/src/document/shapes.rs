use drawpicture_core::{DocumentEvent, LayerError};

use super::Document;
use crate::model::{Color, Shape, ShapeId, StrokeStyle};
use crate::transform::{clamp_scale, Transform, MIN_SCALE};

impl Document {
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Direct access for live edits. Nothing is recorded; pair with
    /// [`Document::snapshot`] and [`Document::commit_snapshot`].
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Z-order position (0 is the bottom).
    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == id)
    }

    pub fn shapes_on_layer<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a Shape> + 'a {
        self.shapes.iter().filter(move |s| s.layer == layer)
    }

    /// Adds a shape on top of the z-order and returns its new id. Shapes
    /// without a known layer go to the current layer.
    pub fn add_shape(&mut self, mut shape: Shape) -> ShapeId {
        self.record_state();
        shape.id = self.allocate_id();
        shape.selected = false;
        if self.layer(&shape.layer).is_none() {
            shape.layer = self.current_layer.clone();
        }
        let id = shape.id;
        tracing::debug!("Added {:?} {} on '{}'", shape.shape_type(), id, shape.layer);
        self.shapes.push(shape);
        self.finish_change(DocumentEvent::ShapesChanged);
        id
    }

    pub fn remove_shape(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.record_state();
        self.shapes.remove(index);
        if self.selection.contains(&id) {
            self.selection.retain(|s| *s != id);
            self.notify_selection();
        }
        self.finish_change(DocumentEvent::ShapesChanged);
        true
    }

    /// Removes every shape. Layers are kept.
    pub fn clear(&mut self) {
        if self.shapes.is_empty() {
            return;
        }
        self.record_state();
        self.shapes.clear();
        self.selection.clear();
        self.finish_change(DocumentEvent::ShapesChanged);
        self.notify_selection();
    }

    /// Live transform update used while a gesture is in progress.
    pub fn set_shape_transform(&mut self, id: ShapeId, transform: Transform) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        shape.transform = transform;
        self.modified = true;
        self.notify(DocumentEvent::ShapeUpdated { id: id.0 });
        true
    }

    pub fn translate_shape(&mut self, id: ShapeId, dx: f64, dy: f64) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        self.record_state();
        if let Some(shape) = self.shape_mut(id) {
            shape.transform.translate_by(dx, dy);
        }
        self.finish_change(DocumentEvent::ShapesChanged);
        true
    }

    pub fn move_selected(&mut self, dx: f64, dy: f64) -> bool {
        self.edit_selected(|shape| shape.transform.translate_by(dx, dy))
    }

    /// Rotates each selected shape about its own bounding-box center.
    pub fn rotate_selected(&mut self, degrees: f64) -> bool {
        self.edit_selected(|shape| {
            let pivot = shape.bounding_rect().center();
            let rotation = shape.transform.rotation + degrees;
            shape.transform = shape.transform.with_rotation_about(pivot, rotation);
        })
    }

    /// Multiplies each selected shape's scale about its bounding-box center.
    pub fn scale_selected(&mut self, factor: f64) -> bool {
        self.edit_selected(|shape| {
            let pivot = shape.bounding_rect().center();
            let t = shape.transform;
            let sx = clamp_scale(t.scale_x * factor, MIN_SCALE);
            let sy = clamp_scale(t.scale_y * factor, MIN_SCALE);
            shape.transform = t.with_scale_about(pivot, sx, sy);
        })
    }

    pub fn set_selected_stroke(&mut self, stroke: StrokeStyle) -> bool {
        self.edit_selected(|shape| shape.stroke = stroke.clone())
    }

    pub fn set_selected_fill(&mut self, fill: Option<Color>) -> bool {
        let fill = fill.filter(|c| !c.is_transparent());
        self.edit_selected(|shape| shape.fill = fill)
    }

    /// Duplicates the selection, offset diagonally, and selects the copies.
    pub fn clone_selected(&mut self) -> Vec<ShapeId> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        self.record_state();

        let offset = self.clone_offset;
        let originals: Vec<Shape> = self.selected_shapes().cloned().collect();
        let mut clones = Vec::with_capacity(originals.len());
        for mut clone in originals {
            clone.id = self.allocate_id();
            clone.selected = true;
            clone.transform.translate_by(offset, offset);
            clones.push(clone.id);
            self.shapes.push(clone);
        }

        for shape in &mut self.shapes {
            shape.selected = clones.contains(&shape.id);
        }
        self.selection = clones.clone();
        tracing::debug!("Cloned {} shapes", clones.len());
        self.finish_change(DocumentEvent::ShapesChanged);
        self.notify_selection();
        clones
    }

    /// Returns the number of shapes deleted.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        self.record_state();
        let before = self.shapes.len();
        let selection = std::mem::take(&mut self.selection);
        self.shapes.retain(|s| !selection.contains(&s.id));
        self.finish_change(DocumentEvent::ShapesChanged);
        self.notify_selection();
        before - self.shapes.len()
    }

    /// Moves the selection to the top of the z-order, keeping its relative
    /// order.
    pub fn bring_to_front(&mut self) -> bool {
        self.restack_selected(true)
    }

    /// Moves the selection to the bottom of the z-order, keeping its relative
    /// order.
    pub fn send_to_back(&mut self) -> bool {
        self.restack_selected(false)
    }

    pub fn move_selected_to_layer(&mut self, layer: &str) -> Result<usize, LayerError> {
        if self.layer(layer).is_none() {
            return Err(LayerError::NotFound {
                name: layer.to_string(),
            });
        }
        let count = self.selection.len();
        if count > 0 {
            let target = layer.to_string();
            self.edit_selected(|shape| shape.layer = target.clone());
        }
        Ok(count)
    }

    fn restack_selected(&mut self, to_front: bool) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.record_state();
        let (picked, rest): (Vec<Shape>, Vec<Shape>) = std::mem::take(&mut self.shapes)
            .into_iter()
            .partition(|s| s.selected);
        self.shapes = if to_front {
            rest.into_iter().chain(picked).collect()
        } else {
            picked.into_iter().chain(rest).collect()
        };
        self.finish_change(DocumentEvent::ShapesChanged);
        true
    }

    /// Records once, then applies `edit` to every selected shape.
    fn edit_selected(&mut self, mut edit: impl FnMut(&mut Shape)) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.record_state();
        for shape in self.shapes.iter_mut().filter(|s| s.selected) {
            edit(shape);
        }
        self.finish_change(DocumentEvent::ShapesChanged);
        true
    }
}
