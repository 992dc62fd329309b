//! Event bus implementation.
//!
//! Two delivery paths share one publish call: synchronous handlers registered
//! with [`EventBus::subscribe`] run inline on the publishing thread, and
//! [`EventBus::receiver`] hands out tokio broadcast receivers for consumers
//! that poll from an async task.

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{DocumentEvent, EventCategory};

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let simple = self.0.simple().to_string();
        write!(f, "sub-{}", &simple[..8])
    }
}

/// Which events a subscriber wants.
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Events whose category is in the list.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn only(category: EventCategory) -> Self {
        EventFilter::Categories(vec![category])
    }

    pub fn matches(&self, event: &DocumentEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Event bus tuning.
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Broadcast channel capacity; slow async receivers lag past this.
    pub channel_capacity: usize,
    /// Keep a ring of recently published events.
    pub enable_history: bool,
    /// Ring size when history is enabled.
    pub max_history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            enable_history: false,
            max_history_size: 100,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// Neither handlers nor receivers were registered
    #[error("No subscribers for event")]
    NoSubscribers,
}

struct Subscriber {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Box<dyn Fn(DocumentEvent) + Send + Sync>,
}

/// Publish/subscribe hub for document notifications.
pub struct EventBus {
    sender: broadcast::Sender<DocumentEvent>,
    subscribers: RwLock<Vec<Subscriber>>,
    recent: Option<Mutex<VecDeque<DocumentEvent>>>,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        let recent = config
            .enable_history
            .then(|| Mutex::new(VecDeque::with_capacity(config.max_history_size)));
        Self {
            sender,
            subscribers: RwLock::new(Vec::new()),
            recent,
            config,
        }
    }

    /// Delivers `event` to every matching handler and every broadcast
    /// receiver.
    ///
    /// Returns how many deliveries were made in total, or `NoSubscribers`
    /// when nobody at all is listening.
    pub fn publish(&self, event: DocumentEvent) -> Result<usize, EventBusError> {
        if let Some(recent) = &self.recent {
            let mut recent = recent.lock();
            if recent.len() >= self.config.max_history_size {
                recent.pop_front();
            }
            if self.config.max_history_size > 0 {
                recent.push_back(event.clone());
            }
        }

        let (handled, registered) = {
            let subscribers = self.subscribers.read();
            let mut handled = 0;
            for subscriber in subscribers.iter().filter(|s| s.filter.matches(&event)) {
                (subscriber.handler)(event.clone());
                handled += 1;
            }
            (handled, subscribers.len())
        };

        let received = self.sender.send(event).unwrap_or(0);
        if registered == 0 && received == 0 {
            return Err(EventBusError::NoSubscribers);
        }
        Ok(handled + received)
    }

    /// Registers a synchronous handler.
    ///
    /// The handler runs on the publishing thread, inside the mutation that
    /// produced the event, so it must not call back into the document.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(DocumentEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.write().push(Subscriber {
            id,
            filter,
            handler: Box::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Receiver for consuming events from an async task.
    pub fn receiver(&self) -> broadcast::Receiver<DocumentEvent> {
        self.sender.subscribe()
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        let removed = subscribers.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Number of synchronous handlers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Recently published events, oldest first. Empty unless history is
    /// enabled.
    pub fn history(&self) -> Vec<DocumentEvent> {
        self.recent
            .as_ref()
            .map(|recent| recent.lock().iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear_history(&self) {
        if let Some(recent) = &self.recent {
            recent.lock().clear();
        }
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("receivers", &self.sender.receiver_count())
            .field("config", &self.config)
            .finish()
    }
}
