//! Domain event publishing contract and dispatch helpers.
//!
//! The core crate only accumulates events on aggregates. Delivering them is the
//! job of an external [`DomainEventPublisher`]; this crate defines that seam, a
//! helper that drains an aggregate into a publisher, and an in-memory publisher
//! for tests/dev.

pub mod dispatch;
pub mod in_memory_publisher;
pub mod publisher;

pub use dispatch::publish_pending_events;
pub use in_memory_publisher::{InMemoryEventPublisher, InMemoryPublisherError};
pub use publisher::DomainEventPublisher;
