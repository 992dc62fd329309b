use std::collections::HashSet;
use std::path::Path;

use drawpicture_core::{DocumentEvent, LoadError, PersistenceError};

use super::Document;
use crate::layer::Layer;
use crate::serialization::{DocumentData, DocumentFile, DocumentMetadata};

impl Document {
    /// Logical content for a persistence backend.
    pub fn save(&self) -> DocumentData {
        self.snapshot()
    }

    /// Replaces the document content with `data`. Nothing changes unless the
    /// data is fully consistent. Selection and history are cleared.
    pub fn load(&mut self, data: DocumentData) -> Result<(), LoadError> {
        validate(&data)?;
        self.replace_content(data);
        self.file_path = None;
        self.metadata = None;
        self.notify(DocumentEvent::DocumentLoaded { path: None });
        Ok(())
    }

    pub fn save_to_file(&mut self, path: &Path) -> Result<(), PersistenceError> {
        let mut metadata = self.metadata.clone().unwrap_or_else(|| {
            DocumentMetadata::new(
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            )
        });
        metadata.touch();

        let file = DocumentFile::new(metadata.clone(), self.save());
        file.save_to_path(path)?;

        tracing::info!("Saved document to {}", path.display());
        self.file_path = Some(path.to_path_buf());
        self.metadata = Some(metadata);
        self.modified = false;
        self.notify(DocumentEvent::DocumentSaved {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    pub fn load_from_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let file = DocumentFile::load_from_path(path).inspect_err(|e| {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
        })?;
        validate(&file.document).inspect_err(|e| {
            tracing::warn!("Rejected {}: {}", path.display(), e);
        })?;

        self.replace_content(file.document);
        self.file_path = Some(path.to_path_buf());
        self.metadata = Some(file.metadata);
        tracing::info!("Loaded document from {}", path.display());
        self.notify(DocumentEvent::DocumentLoaded {
            path: Some(path.to_path_buf()),
        });
        Ok(())
    }

    /// Resets to an empty, unsaved document with a single default layer.
    pub fn new_document(&mut self) {
        let layer = Layer::default();
        self.shapes.clear();
        self.selection.clear();
        self.current_layer = layer.name.clone();
        self.layers = vec![layer];
        self.history.clear();
        self.file_path = None;
        self.metadata = None;
        self.modified = false;
        tracing::info!("New document");
        self.notify(DocumentEvent::DocumentCleared);
        self.notify_selection();
        self.notify_history();
    }

    fn replace_content(&mut self, data: DocumentData) {
        self.next_id = data
            .shapes
            .iter()
            .map(|s| s.id.0)
            .max()
            .map_or(1, |max| max + 1)
            .max(self.next_id);
        self.shapes = data.shapes;
        self.layers = data.layers;
        self.current_layer = data.current_layer;
        self.selection.clear();
        self.sync_selection_flags();
        self.history.clear();
        self.modified = false;
        self.notify(DocumentEvent::ShapesChanged);
        self.notify(DocumentEvent::LayersChanged);
        self.notify_selection();
        self.notify_history();
    }
}

fn validate(data: &DocumentData) -> Result<(), LoadError> {
    if data.layers.is_empty() {
        return Err(LoadError::NoLayers);
    }

    let mut names = HashSet::new();
    for layer in &data.layers {
        if !names.insert(layer.name.as_str()) {
            return Err(LoadError::DuplicateLayer {
                name: layer.name.clone(),
            });
        }
        if !layer.has_valid_opacity() {
            return Err(LoadError::InvalidLayerOpacity {
                layer: layer.name.clone(),
                opacity: layer.opacity,
            });
        }
    }
    if !names.contains(data.current_layer.as_str()) {
        return Err(LoadError::UnknownCurrentLayer {
            name: data.current_layer.clone(),
        });
    }

    let mut ids = HashSet::new();
    for shape in &data.shapes {
        if !names.contains(shape.layer.as_str()) {
            return Err(LoadError::UnknownShapeLayer {
                layer: shape.layer.clone(),
            });
        }
        if !ids.insert(shape.id) {
            return Err(LoadError::DuplicateShapeId { id: shape.id.0 });
        }
    }
    Ok(())
}
