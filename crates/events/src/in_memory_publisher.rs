//! In-memory event publisher for tests/dev.

use std::sync::{Mutex, mpsc};

use domain_shared_core::DomainEvent;
use thiserror::Error;

use crate::publisher::DomainEventPublisher;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InMemoryPublisherError {
    /// Publish failed due to internal lock poisoning.
    #[error("publisher lock poisoned")]
    Poisoned,
}

/// In-memory publisher.
///
/// - No IO / no async
/// - Keeps every published event, in publish order, for inspection
/// - Best-effort fan-out to subscribers (dead subscribers are dropped)
#[derive(Debug)]
pub struct InMemoryEventPublisher<E> {
    published: Mutex<Vec<E>>,
    subscribers: Mutex<Vec<mpsc::Sender<E>>>,
}

impl<E> InMemoryEventPublisher<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive a copy of every event published from now on.
    pub fn subscribe(&self) -> mpsc::Receiver<E> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still yields a receiver; it just never gets messages.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        rx
    }

    pub fn published_count(&self) -> usize {
        self.published.lock().map(|p| p.len()).unwrap_or(0)
    }
}

impl<E: Clone> InMemoryEventPublisher<E> {
    /// Snapshot of everything published so far.
    pub fn published(&self) -> Vec<E> {
        self.published
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

impl<E> Default for InMemoryEventPublisher<E> {
    fn default() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<E> DomainEventPublisher<E> for InMemoryEventPublisher<E>
where
    E: DomainEvent + Clone + 'static,
{
    type Error = InMemoryPublisherError;

    fn publish(&self, event: &E) -> Result<(), Self::Error> {
        // Both locks are held before anything changes, so a failed publish
        // leaves neither the log nor the subscribers touched.
        let mut published = self
            .published
            .lock()
            .map_err(|_| InMemoryPublisherError::Poisoned)?;
        let mut subs = self
            .subscribers
            .lock()
            .map_err(|_| InMemoryPublisherError::Poisoned)?;

        published.push(event.clone());

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(event.clone()).is_ok());

        tracing::debug!(event_id = %event.id(), subscribers = subs.len(), "published domain event");
        Ok(())
    }
}
