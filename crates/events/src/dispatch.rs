//! Hand an aggregate's pending events to a publisher.

use domain_shared_core::{AggregateRoot, DomainEvent};

use crate::publisher::DomainEventPublisher;

/// Publish every pending event of `aggregate`, in recording order, then clear them.
///
/// Call this after the aggregate's changes are committed. Events are cleared
/// only when all of them were published. On the first failure the aggregate
/// keeps its full pending list and the error is returned, so a retry may
/// redeliver the events that went out before the failure.
///
/// Returns the number of events published.
pub fn publish_pending_events<A, P>(aggregate: &mut A, publisher: &P) -> Result<usize, P::Error>
where
    A: AggregateRoot,
    P: DomainEventPublisher<A::Event> + ?Sized,
{
    let pending = aggregate.domain_events();
    if pending.is_empty() {
        return Ok(0);
    }

    for (position, event) in pending.iter().enumerate() {
        if let Err(err) = publisher.publish(event) {
            tracing::warn!(
                event_id = %event.id(),
                position,
                pending = pending.len(),
                error = ?err,
                "failed to publish domain event; keeping pending events"
            );
            return Err(err);
        }
    }

    let published = pending.len();
    aggregate.clear_domain_events();
    tracing::debug!(published, "published pending domain events");
    Ok(published)
}
