//! Macros for defining typed namespaced IDs.

/// Macro to define a typed ID over [`NamespacedId`](crate::NamespacedId).
///
/// This generates a newtype wrapper with:
/// - `new()` and `parse()` sharing the namespaced grammar
/// - `namespace()`, `name()`, `with_namespace()`, `with_name()`
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` as a bare canonical string
/// - conversions to and from `NamespacedId`
///
/// # Example
///
/// ```ignore
/// define_namespaced_id!(ThingId);
///
/// let thing: ThingId = "org.example:sensor-1".parse()?;
/// assert_eq!(thing.namespace(), "org.example");
/// ```
#[macro_export]
macro_rules! define_namespaced_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::NamespacedId);

        impl $name {
            /// Creates an ID from separate, validated parts.
            pub fn new(
                namespace: impl Into<String>,
                name: impl Into<String>,
            ) -> Result<Self, $crate::IdError> {
                $crate::NamespacedId::new(namespace, name).map(Self)
            }

            /// Parses an ID from its `namespace:name` form.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                $crate::NamespacedId::parse(s).map(Self)
            }

            /// Returns the namespace part.
            #[must_use]
            pub fn namespace(&self) -> &str {
                self.0.namespace()
            }

            /// Returns the name part.
            #[must_use]
            pub fn name(&self) -> &str {
                self.0.name()
            }

            /// Returns a copy with the namespace replaced, without validation.
            #[must_use]
            pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
                Self(self.0.with_namespace(namespace))
            }

            /// Returns a copy with the name replaced, without validation.
            #[must_use]
            pub fn with_name(&self, name: impl Into<String>) -> Self {
                Self(self.0.with_name(name))
            }

            /// Returns the untyped ID.
            #[must_use]
            pub const fn as_namespaced(&self) -> &$crate::NamespacedId {
                &self.0
            }

            /// Consumes the typed ID, returning the untyped one.
            #[must_use]
            pub fn into_inner(self) -> $crate::NamespacedId {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$crate::NamespacedId> for $name {
            fn from(id: $crate::NamespacedId) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $crate::NamespacedId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<$crate::NamespacedId> for $name {
            fn as_ref(&self) -> &$crate::NamespacedId {
                &self.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <$crate::NamespacedId as serde::Deserialize<'de>>::deserialize(deserializer).map(Self)
            }
        }
    };
}
