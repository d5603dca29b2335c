//! Strongly-typed identifiers used across the domain.

/// Declare a UUID-backed identifier newtype.
///
/// The generated type is `Copy`, compares/hashes by its UUID only, serializes
/// transparently as the UUID string and implements [`Identity`](crate::Identity).
///
/// ```ignore
/// domain_shared_core::uuid_identity! {
///     /// Identifier of a customer.
///     pub struct CustomerId;
/// }
///
/// let id = CustomerId::new();
/// let parsed: CustomerId = id.to_string().parse()?;
/// assert_eq!(id, parsed);
/// ```
#[macro_export]
macro_rules! uuid_identity {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name($crate::__uuid::Uuid);

        impl $name {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self($crate::__uuid::Uuid::now_v7())
            }

            pub fn from_uuid(uuid: $crate::__uuid::Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &$crate::__uuid::Uuid {
                &self.0
            }
        }

        impl $crate::ValueObject for $name {}

        impl $crate::Identity for $name {
            type Value = $crate::__uuid::Uuid;

            fn value(&self) -> &Self::Value {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::convert::From<$crate::__uuid::Uuid> for $name {
            fn from(value: $crate::__uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<$name> for $crate::__uuid::Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let uuid = <$crate::__uuid::Uuid as ::core::str::FromStr>::from_str(s).map_err(|e| {
                    $crate::DomainError::invalid_id(format!("{}: {}", stringify!($name), e))
                })?;
                Ok(Self(uuid))
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                $crate::__serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                <$crate::__uuid::Uuid as $crate::__serde::Deserialize<'de>>::deserialize(deserializer)
                    .map(Self)
            }
        }
    };
}

uuid_identity! {
    /// Identifier of a domain event. Assigned once, never reused.
    pub struct EventId;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DomainError, Identity};
    use uuid::Uuid;

    #[test]
    fn fresh_event_ids_are_unique() {
        let a = EventId::new();
        let b = EventId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn event_id_round_trips_through_display_and_parse() {
        let id = EventId::new();
        let parsed: EventId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert_eq!(parsed.value(), id.as_uuid());
    }

    #[test]
    fn parsing_garbage_is_an_invalid_id() {
        let err = "not-a-uuid".parse::<EventId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("EventId:")),
        }
    }

    #[test]
    fn serializes_transparently_as_uuid_string() {
        let uuid = Uuid::now_v7();
        let id = EventId::from_uuid(uuid);

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));

        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
