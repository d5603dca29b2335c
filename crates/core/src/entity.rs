//! Entity trait: identity + continuity across state changes.

use crate::value_object::Identity;

/// Entity marker + minimal interface.
///
/// An entity has exactly one identity, assigned at construction and never
/// reassigned. Two entities are the same entity iff their identities are equal,
/// whatever their other attributes say. Use [`entity_equality!`](crate::entity_equality)
/// to get `PartialEq`/`Eq`/`Hash` implementations that honor this; deriving them
/// would compare every field.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Identity;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison, usable across differing states of the same entity.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Implement `PartialEq`, `Eq` and `Hash` for one or more [`Entity`] types by
/// delegating to their identity.
///
/// ```ignore
/// struct Customer { id: CustomerId, name: String }
///
/// impl Entity for Customer {
///     type Id = CustomerId;
///     fn id(&self) -> &CustomerId { &self.id }
/// }
///
/// domain_shared_core::entity_equality!(Customer);
/// ```
#[macro_export]
macro_rules! entity_equality {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ::core::cmp::PartialEq for $t {
                fn eq(&self, other: &Self) -> bool {
                    $crate::Entity::id(self) == $crate::Entity::id(other)
                }
            }

            impl ::core::cmp::Eq for $t {}

            impl ::core::hash::Hash for $t {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    ::core::hash::Hash::hash($crate::Entity::id(self), state)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uuid_identity;
    use std::collections::HashSet;

    uuid_identity! {
        struct CustomerId;
    }

    #[derive(Debug, Clone)]
    struct Customer {
        id: CustomerId,
        name: String,
        credit_limit: i64,
    }

    impl Entity for Customer {
        type Id = CustomerId;

        fn id(&self) -> &CustomerId {
            &self.id
        }
    }

    crate::entity_equality!(Customer);

    fn customer(id: CustomerId, name: &str, credit_limit: i64) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            credit_limit,
        }
    }

    #[test]
    fn same_identity_means_same_entity_despite_other_fields() {
        let id = CustomerId::new();
        let before = customer(id, "Acme", 1_000);
        let after = customer(id, "Acme Corp", 5_000);

        assert_ne!(before.name, after.name);
        assert_ne!(before.credit_limit, after.credit_limit);
        assert_eq!(before, after);
        assert!(before.same_identity_as(&after));
    }

    #[test]
    fn different_identity_means_different_entity_despite_equal_fields() {
        let a = customer(CustomerId::new(), "Acme", 1_000);
        let b = customer(CustomerId::new(), "Acme", 1_000);

        assert_ne!(a, b);
        assert!(!a.same_identity_as(&b));
    }

    #[test]
    fn hash_is_derived_from_identity_only() {
        let id = CustomerId::new();
        let set: HashSet<Customer> = [
            customer(id, "Acme", 1),
            customer(id, "Acme Corp", 2),
            customer(CustomerId::new(), "Acme", 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
    }
}
