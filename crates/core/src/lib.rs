//! `domain-shared-core` — domain modeling building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identity/entity/value-object contracts, domain events, the aggregate-root
//! event accumulator and a pagination container.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod page;
pub mod pagination;
pub mod value_object;

pub use aggregate::{AggregateRoot, DomainEvents};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::{DomainEvent, EventMetadata};
pub use id::EventId;
pub use page::Page;
pub use value_object::{Identity, ValueObject};

// Re-exported for the `uuid_identity!` macro.
#[doc(hidden)]
pub use serde as __serde;
#[doc(hidden)]
pub use uuid as __uuid;
