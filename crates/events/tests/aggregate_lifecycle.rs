//! Black-box lifecycle: business methods record events, a shared publisher
//! drains them, and a paginated query reads the published log back.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain_shared_core::{
    AggregateRoot, DomainEvent, DomainEvents, Entity, EventId, EventMetadata, entity_equality,
    pagination, uuid_identity,
};
use domain_shared_events::{
    DomainEventPublisher, InMemoryEventPublisher, InMemoryPublisherError, publish_pending_events,
};

uuid_identity! {
    /// Identifier of a warehouse item.
    pub struct ItemId;
}

#[derive(Debug)]
struct ItemCreated {
    meta: EventMetadata,
    name: String,
}

#[derive(Debug)]
struct StockAdjusted {
    meta: EventMetadata,
    delta: i64,
}

impl DomainEvent for ItemCreated {
    fn id(&self) -> EventId {
        self.meta.id()
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.meta.occurred_on()
    }
}

impl DomainEvent for StockAdjusted {
    fn id(&self) -> EventId {
        self.meta.id()
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.meta.occurred_on()
    }
}

type AnyEvent = Arc<dyn DomainEvent>;

#[derive(Debug)]
struct Item {
    id: ItemId,
    stock: i64,
    events: DomainEvents<AnyEvent>,
}

impl Item {
    fn create(name: &str) -> Self {
        let mut item = Self {
            id: ItemId::new(),
            stock: 0,
            events: DomainEvents::new(),
        };
        item.add_domain_event(Arc::new(ItemCreated {
            meta: EventMetadata::new(),
            name: name.to_string(),
        }));
        item
    }

    fn adjust(&mut self, delta: i64) {
        self.stock += delta;
        self.add_domain_event(Arc::new(StockAdjusted {
            meta: EventMetadata::new(),
            delta,
        }));
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}

entity_equality!(Item);

impl AggregateRoot for Item {
    type Event = AnyEvent;

    fn events(&self) -> &DomainEvents<AnyEvent> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut DomainEvents<AnyEvent> {
        &mut self.events
    }
}

#[test]
fn recorded_events_flow_to_a_shared_publisher() {
    let publisher: Arc<InMemoryEventPublisher<AnyEvent>> = Arc::new(InMemoryEventPublisher::new());
    let shared: Arc<dyn DomainEventPublisher<AnyEvent, Error = InMemoryPublisherError>> = publisher.clone();

    let mut item = Item::create("bolt");
    item.adjust(5);
    item.adjust(-2);
    let recorded: Vec<EventId> = item.domain_events().iter().map(|e| e.id()).collect();

    let count = publish_pending_events(&mut item, &shared).unwrap();

    assert_eq!(count, 3);
    assert_eq!(item.stock, 3);
    assert!(item.domain_events().is_empty());

    let published: Vec<EventId> = publisher.published().iter().map(|e| e.id()).collect();
    assert_eq!(published, recorded);

    // Second drain is a no-op.
    assert_eq!(publish_pending_events(&mut item, &shared).unwrap(), 0);
    assert_eq!(publisher.published_count(), 3);
}

#[test]
fn aggregates_compare_by_identity() {
    let mut a = Item::create("nut");
    let b = Item::create("nut");
    a.adjust(1);

    assert_ne!(a, b);
    assert!(!a.same_identity_as(&b));
}

#[test]
fn published_log_can_be_paged() {
    let publisher = InMemoryEventPublisher::<AnyEvent>::new();
    let mut item = Item::create("washer");
    for delta in 1..=6 {
        item.adjust(delta);
    }
    publish_pending_events(&mut item, &publisher).unwrap();

    let log = publisher.published();
    let page = pagination::paginate(&log, 1, 3).map(|e| e.id());

    assert_eq!(page.total_elements(), 7);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.content(), &[log[3].id(), log[4].id(), log[5].id()]);
    assert!(page.has_next());
    assert!(page.has_previous());
}
