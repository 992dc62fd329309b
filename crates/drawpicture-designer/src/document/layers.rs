use drawpicture_core::{DocumentEvent, LayerError};

use super::Document;
use crate::layer::Layer;

impl Document {
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn current_layer(&self) -> &str {
        &self.current_layer
    }

    /// False for unknown layers.
    pub fn is_layer_visible(&self, name: &str) -> bool {
        self.layer(name).is_some_and(|l| l.visible)
    }

    pub fn is_layer_locked(&self, name: &str) -> bool {
        self.layer(name).is_some_and(|l| l.locked)
    }

    /// Appends a layer and makes it current.
    pub fn add_layer(&mut self, name: &str) -> Result<(), LayerError> {
        if self.layer(name).is_some() {
            tracing::warn!("Rejected duplicate layer name '{}'", name);
            return Err(LayerError::DuplicateName {
                name: name.to_string(),
            });
        }
        self.record_state();
        self.layers.push(Layer::new(name));
        self.current_layer = name.to_string();
        tracing::debug!("Added layer '{}'", name);
        self.finish_change(DocumentEvent::LayersChanged);
        self.notify_current_layer();
        Ok(())
    }

    /// Removes a layer and every shape on it. The last layer cannot be
    /// removed.
    pub fn remove_layer(&mut self, name: &str) -> Result<(), LayerError> {
        if self.layers.len() <= 1 {
            tracing::warn!("Refused to remove the last layer '{}'", name);
            return Err(LayerError::LastLayer);
        }
        let index = self.layer_index(name)?;
        self.record_state();

        self.shapes.retain(|s| s.layer != name);
        let shapes = &self.shapes;
        self.selection
            .retain(|id| shapes.iter().any(|s| s.id == *id));
        self.layers.remove(index);

        let current_changed = self.current_layer == name;
        if current_changed {
            self.current_layer = self.layers[0].name.clone();
        }

        tracing::debug!("Removed layer '{}'", name);
        self.finish_change(DocumentEvent::LayersChanged);
        self.notify(DocumentEvent::ShapesChanged);
        self.notify_selection();
        if current_changed {
            self.notify_current_layer();
        }
        Ok(())
    }

    /// Renames a layer, re-pointing its shapes and the current layer.
    pub fn rename_layer(&mut self, old_name: &str, new_name: &str) -> Result<(), LayerError> {
        if self.layer(new_name).is_some() {
            tracing::warn!("Rejected rename of '{}' to existing '{}'", old_name, new_name);
            return Err(LayerError::DuplicateName {
                name: new_name.to_string(),
            });
        }
        let index = self.layer_index(old_name)?;
        self.record_state();

        self.layers[index].name = new_name.to_string();
        for shape in self.shapes.iter_mut().filter(|s| s.layer == old_name) {
            shape.layer = new_name.to_string();
        }
        if self.current_layer == old_name {
            self.current_layer = new_name.to_string();
        }
        tracing::debug!("Renamed layer '{}' to '{}'", old_name, new_name);
        self.finish_change(DocumentEvent::LayersChanged);
        self.notify(DocumentEvent::ShapesChanged);
        Ok(())
    }

    /// Swaps the layer with its predecessor in the list.
    pub fn move_layer_up(&mut self, name: &str) -> Result<(), LayerError> {
        let index = self.layer_index(name)?;
        if index == 0 {
            return Err(LayerError::AtBoundary {
                name: name.to_string(),
            });
        }
        self.record_state();
        self.layers.swap(index, index - 1);
        self.finish_change(DocumentEvent::LayersChanged);
        Ok(())
    }

    /// Swaps the layer with its successor in the list.
    pub fn move_layer_down(&mut self, name: &str) -> Result<(), LayerError> {
        let index = self.layer_index(name)?;
        if index + 1 >= self.layers.len() {
            return Err(LayerError::AtBoundary {
                name: name.to_string(),
            });
        }
        self.record_state();
        self.layers.swap(index, index + 1);
        self.finish_change(DocumentEvent::LayersChanged);
        Ok(())
    }

    pub fn set_layer_visible(&mut self, name: &str, visible: bool) -> Result<(), LayerError> {
        self.edit_layer(name, |layer| {
            let changed = layer.visible != visible;
            layer.visible = visible;
            changed
        })
    }

    pub fn set_layer_locked(&mut self, name: &str, locked: bool) -> Result<(), LayerError> {
        self.edit_layer(name, |layer| {
            let changed = layer.locked != locked;
            layer.locked = locked;
            changed
        })
    }

    /// Opacity is clamped to `[0, 1]`.
    /// Sets a layer's opacity, clamped to `[0, 1]`. NaN is rejected.
    pub fn set_layer_opacity(&mut self, name: &str, opacity: f64) -> Result<(), LayerError> {
        self.layer_index(name)?;
        if opacity.is_nan() {
            return Err(LayerError::InvalidOpacity {
                name: name.to_string(),
            });
        }
        let opacity = opacity.clamp(0.0, 1.0);
        self.edit_layer(name, |layer| {
            let changed = layer.opacity != opacity;
            layer.set_opacity(opacity);
            changed
        })
    }

    /// Changes the layer new shapes go to. Not undoable.
    pub fn set_current_layer(&mut self, name: &str) -> Result<(), LayerError> {
        self.layer_index(name)?;
        if self.current_layer != name {
            self.current_layer = name.to_string();
            self.notify_current_layer();
        }
        Ok(())
    }

    fn layer_index(&self, name: &str) -> Result<usize, LayerError> {
        self.layers
            .iter()
            .position(|l| l.name == name)
            .ok_or_else(|| LayerError::NotFound {
                name: name.to_string(),
            })
    }

    /// Records and applies `edit` unless it reports no change.
    fn edit_layer(
        &mut self,
        name: &str,
        edit: impl FnOnce(&mut Layer) -> bool,
    ) -> Result<(), LayerError> {
        let index = self.layer_index(name)?;
        let mut preview = self.layers[index].clone();
        if !edit(&mut preview) {
            return Ok(());
        }
        self.record_state();
        self.layers[index] = preview;
        self.finish_change(DocumentEvent::LayersChanged);
        Ok(())
    }

    fn notify_current_layer(&self) {
        self.notify(DocumentEvent::CurrentLayerChanged {
            name: self.current_layer.clone(),
        });
    }
}
