//! Error handling for DrawPicture
//!
//! Provides the error types shared by every layer of the editor:
//! - Layer errors (requests that would break a layer invariant)
//! - Persistence errors (reading and writing document files)
//! - Load errors (documents that parse but are not internally consistent)
//!
//! Numeric degeneracy (singular transforms, zero-length segments) is never an
//! error; those cases have defined fallbacks in the geometry code.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layer error type
///
/// Returned when a layer operation would violate a document invariant.
/// The document is left untouched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    /// The document must always keep at least one layer
    #[error("Cannot remove the last remaining layer")]
    LastLayer,

    /// A layer with this name already exists
    #[error("Layer '{name}' already exists")]
    DuplicateName {
        /// The rejected layer name.
        name: String,
    },

    /// No layer has this name
    #[error("Layer '{name}' not found")]
    NotFound {
        /// The missing layer name.
        name: String,
    },

    /// The layer is already at the top or bottom of the stack
    #[error("Layer '{name}' cannot move further")]
    AtBoundary {
        /// The layer that could not be reordered.
        name: String,
    },

    /// Opacity was not a number
    #[error("Invalid opacity for layer '{name}'")]
    InvalidOpacity {
        /// The layer whose opacity was rejected.
        name: String,
    },
}

/// Persistence error type
///
/// Represents I/O and encoding failures at the file boundary.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file was written by an incompatible version
    #[error("Unsupported document version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// The version string found in the file.
        found: String,
        /// The version string this build writes.
        supported: String,
    },
}

/// Load error type
///
/// Raised by `Document::load` when incoming data cannot become a valid
/// document. The current document state is not modified on failure.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The data contains no layers
    #[error("Document has no layers")]
    NoLayers,

    /// Two layers share a name
    #[error("Duplicate layer name '{name}'")]
    DuplicateLayer {
        /// The duplicated layer name.
        name: String,
    },

    /// The current layer does not exist in the layer list
    #[error("Current layer '{name}' does not exist")]
    UnknownCurrentLayer {
        /// The dangling current layer name.
        name: String,
    },

    /// A shape refers to a layer that does not exist
    #[error("Shape refers to unknown layer '{layer}'")]
    UnknownShapeLayer {
        /// The dangling layer name.
        layer: String,
    },

    /// A layer's opacity is outside `[0, 1]` or not a number
    #[error("Layer '{layer}' has invalid opacity {opacity}")]
    InvalidLayerOpacity {
        /// The offending layer name.
        layer: String,
        /// The opacity found in the data.
        opacity: f64,
    },

    /// Two shapes share an id
    #[error("Duplicate shape id {id}")]
    DuplicateShapeId {
        /// The duplicated id.
        id: u64,
    },

    /// The data could not be read or decoded
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Main error type for DrawPicture
///
/// Umbrella over all module error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Layer error
    #[error(transparent)]
    Layer(#[from] LayerError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Load error
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layer invariant error
    pub fn is_layer_error(&self) -> bool {
        matches!(self, Error::Layer(_))
    }

    /// Check if this error originated at the file boundary
    pub fn is_persistence_error(&self) -> bool {
        matches!(
            self,
            Error::Persistence(_) | Error::Load(LoadError::Persistence(_))
        )
    }
}

/// Result type for DrawPicture operations
pub type Result<T> = std::result::Result<T, Error>;
