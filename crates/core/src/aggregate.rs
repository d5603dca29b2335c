//! Aggregate root trait and its pending domain-event accumulator.

use crate::entity::Entity;
use crate::event::DomainEvent;

/// Ordered, append/clear-only buffer of domain events raised by an aggregate.
///
/// Events are only ever handed out as a shared slice, so callers cannot push,
/// remove or reorder through the view they get:
///
/// ```compile_fail
/// use domain_shared_core::{DomainEvents, EventMetadata};
///
/// let events: DomainEvents<EventMetadata> = DomainEvents::new();
/// let view = events.as_slice();
/// view.push(EventMetadata::new());
/// ```
#[derive(Debug, Clone)]
pub struct DomainEvents<E> {
    pending: Vec<E>,
}

impl<E> DomainEvents<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Duplicates are kept.
    pub fn record(&mut self, event: E) {
        self.pending.push(event);
    }

    /// Pending events, in insertion order.
    pub fn as_slice(&self) -> &[E] {
        &self.pending
    }

    /// Drop every pending event. A no-op when already empty.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Move the pending events out, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<E> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<E> Default for DomainEvents<E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

/// Aggregate root: an entity that is the consistency boundary of a cluster of
/// objects and the single place where domain events accumulate.
///
/// Implementors own a [`DomainEvents`] buffer (composition, not a base type)
/// and expose it through the two accessors; everything else is provided.
///
/// Lifecycle of the buffer:
///
/// ```text
/// no pending events ──add_domain_event──▶ has pending events
///        ▲                                        │
///        └────────── clear / take ◀───────────────┘
/// ```
///
/// Business methods call `add_domain_event`; after the surrounding
/// transaction commits, an external collaborator reads the events, hands them
/// to a publisher and clears them. No internal synchronization: callers handling
/// one aggregate from several threads must serialize access themselves.
pub trait AggregateRoot: Entity {
    type Event: DomainEvent;

    /// Read access to the pending-event buffer.
    fn events(&self) -> &DomainEvents<Self::Event>;

    /// Write access to the pending-event buffer.
    fn events_mut(&mut self) -> &mut DomainEvents<Self::Event>;

    /// Record an event raised by a business operation.
    fn add_domain_event(&mut self, event: Self::Event) {
        tracing::trace!(event_id = %event.id(), "recording domain event");
        self.events_mut().record(event);
    }

    /// Pending events as a read-only view, in insertion order.
    ///
    /// Callers cannot append to or remove from the returned view:
    ///
    /// ```compile_fail
    /// # use chrono::{DateTime, Utc};
    /// # use domain_shared_core::{
    /// #     AggregateRoot, DomainEvent, DomainEvents, Entity, EventId, EventMetadata, uuid_identity,
    /// # };
    /// # uuid_identity! { struct CartId; }
    /// # #[derive(Debug)]
    /// # struct ItemAdded(EventMetadata);
    /// # impl DomainEvent for ItemAdded {
    /// #     fn id(&self) -> EventId { self.0.id() }
    /// #     fn occurred_on(&self) -> DateTime<Utc> { self.0.occurred_on() }
    /// # }
    /// # struct Cart { id: CartId, events: DomainEvents<ItemAdded> }
    /// # impl Entity for Cart {
    /// #     type Id = CartId;
    /// #     fn id(&self) -> &CartId { &self.id }
    /// # }
    /// # impl AggregateRoot for Cart {
    /// #     type Event = ItemAdded;
    /// #     fn events(&self) -> &DomainEvents<ItemAdded> { &self.events }
    /// #     fn events_mut(&mut self) -> &mut DomainEvents<ItemAdded> { &mut self.events }
    /// # }
    /// let mut cart = Cart { id: CartId::new(), events: DomainEvents::new() };
    /// cart.add_domain_event(ItemAdded(EventMetadata::new()));
    /// cart.domain_events().push(ItemAdded(EventMetadata::new()));
    /// ```
    fn domain_events(&self) -> &[Self::Event] {
        self.events().as_slice()
    }

    /// Discard all pending events. Idempotent.
    fn clear_domain_events(&mut self) {
        let dropped = self.events().len();
        if dropped > 0 {
            tracing::trace!(dropped, "clearing domain events");
        }
        self.events_mut().clear();
    }

    fn has_pending_events(&self) -> bool {
        !self.events().is_empty()
    }

    /// Move the pending events out of the aggregate, leaving none pending.
    fn take_domain_events(&mut self) -> Vec<Self::Event> {
        self.events_mut().take()
    }
}
