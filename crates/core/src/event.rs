//! Domain event contract.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::value_object::ValueObject;

/// A fact raised by an aggregate.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - identified by an [`EventId`] assigned at creation, never reused
/// - stamped with the moment they occurred, fixed at creation
///
/// Concrete events are plain data carriers: the two accessors below plus their
/// own payload fields. Timestamps are not guaranteed to be monotonic across
/// events.
pub trait DomainEvent: core::fmt::Debug + Send + Sync {
    /// Unique identifier of the event.
    fn id(&self) -> EventId;

    /// When the event occurred (business time).
    fn occurred_on(&self) -> DateTime<Utc>;
}

impl<E: DomainEvent + ?Sized> DomainEvent for Box<E> {
    fn id(&self) -> EventId {
        (**self).id()
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        (**self).occurred_on()
    }
}

impl<E: DomainEvent + ?Sized> DomainEvent for Arc<E> {
    fn id(&self) -> EventId {
        (**self).id()
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        (**self).occurred_on()
    }
}

/// Id + timestamp pair that concrete events can embed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventMetadata {
    id: EventId,
    occurred_on: DateTime<Utc>,
}

impl EventMetadata {
    /// Fresh metadata: a new UUIDv7 id, occurring now.
    pub fn new() -> Self {
        Self::at(EventId::new(), Utc::now())
    }

    /// Explicit metadata, for rehydration and deterministic tests.
    pub fn at(id: EventId, occurred_on: DateTime<Utc>) -> Self {
        Self { id, occurred_on }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for EventMetadata {}
