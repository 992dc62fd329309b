//! Named shape layers.

use serde::{Deserialize, Serialize};

/// Name of the layer every new document starts with.
pub const DEFAULT_LAYER_NAME: &str = "Default Layer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Unique within a document.
    pub name: String,
    pub visible: bool,
    pub locked: bool,
    /// Always within `[0, 1]`.
    pub opacity: f64,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            locked: false,
            opacity: 1.0,
        }
    }

    /// Clamps into `[0, 1]`. NaN leaves the opacity unchanged.
    pub fn set_opacity(&mut self, opacity: f64) {
        if !opacity.is_nan() {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    pub fn has_valid_opacity(&self) -> bool {
        (0.0..=1.0).contains(&self.opacity)
    }

    /// Visible and unlocked: shapes on it can be picked and edited.
    pub fn is_editable(&self) -> bool {
        self.visible && !self.locked
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new(DEFAULT_LAYER_NAME)
    }
}
