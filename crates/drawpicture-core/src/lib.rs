//! # DrawPicture Core
//!
//! Error types and the document event bus shared by the DrawPicture crates.

pub mod error;
pub mod event_bus;

pub use error::{Error, LayerError, LoadError, PersistenceError, Result};

pub use event_bus::{
    DocumentEvent, EventBus, EventBusConfig, EventBusError, EventCategory, EventFilter,
    SubscriptionId,
};
