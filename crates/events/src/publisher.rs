//! Domain event publishing abstraction (mechanics only).
//!
//! The publisher is the **transport seam** for events once an aggregate's
//! transaction has committed:
//!
//! ```text
//! business method → aggregate.add_domain_event → commit → publish → clear
//! ```
//!
//! Nothing here prescribes a transport or a delivery guarantee; those belong to
//! the implementation (message broker, outbox table, in-process bus...).

use std::sync::Arc;

use domain_shared_core::DomainEvent;

/// Publishes domain events to whoever consumes them.
///
/// ## Error Handling
///
/// `publish()` can fail (broker unavailable, bus closed...). Failures are
/// surfaced to the caller, which decides whether to retry. Consumers should be
/// idempotent: a retry can redeliver events that already went out.
///
/// ## Thread Safety
///
/// The trait requires `Send + Sync` so one publisher can be shared by every
/// request handler.
pub trait DomainEventPublisher<E: DomainEvent>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, event: &E) -> Result<(), Self::Error>;
}

impl<E, P> DomainEventPublisher<E> for Arc<P>
where
    E: DomainEvent,
    P: DomainEventPublisher<E> + ?Sized,
{
    type Error = P::Error;

    fn publish(&self, event: &E) -> Result<(), Self::Error> {
        (**self).publish(event)
    }
}
