//! # Event Bus Module
//!
//! Publish/subscribe notifications for document changes. A `Document` owns
//! one bus and publishes after every mutation; renderers and panels subscribe
//! with a filter.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drawpicture_core::event_bus::{DocumentEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Selection]),
//!     |event| tracing::info!("{}", event.description()),
//! );
//!
//! bus.publish(DocumentEvent::SelectionChanged { count: 1 }).ok();
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
