//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// They represent concepts where identity doesn't matter - only the values matter.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Immutability
///
/// Value objects expose no `&mut self` operations. To "modify" a value object,
/// build a new one with the new values.
///
/// ## Design Constraints
///
/// - **Clone**: value objects are values, copying them is how they travel
/// - **PartialEq**: equality is derived from all attributes (use `#[derive]`)
/// - **Debug**: the string rendering of the value, for logs and tests
///
/// Hashing is not required here because some values (amounts held as floats,
/// for instance) cannot provide it; identities, which must be hashable, add it
/// in [`Identity`].
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert_eq!(m1, m2);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// An identifier: a value object wrapping a single natural key.
///
/// Two identities are equal iff their wrapped values are equal, so `PartialEq`,
/// `Eq` and `Hash` must be derived from the wrapped value only.
pub trait Identity: ValueObject + Eq + core::hash::Hash {
    /// The wrapped natural key.
    type Value: Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the wrapped value.
    fn value(&self) -> &Self::Value;
}
