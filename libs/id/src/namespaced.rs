//! The `namespace:name` identifier used to address things on the wire.
//!
//! A [`NamespacedId`] can only be obtained through a validating path
//! ([`NamespacedId::new`], [`NamespacedId::parse`], JSON decoding) or through
//! the explicitly non-validating rebuilders [`NamespacedId::with_namespace`]
//! and [`NamespacedId::with_name`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{IdError, InvalidReason};

/// Maximum length of the combined `namespace:name` form, in characters.
pub const MAX_LENGTH: usize = 256;

/// Delimiter between namespace and name in the canonical form.
pub const SEPARATOR: char = ':';

/// A namespaced identifier, canonically written as `namespace:name`.
///
/// The namespace is zero or more dot-separated segments of
/// `[A-Za-z0-9_-]`. The name is one or more characters, none of which is `/`
/// or an ASCII control character; it may itself contain `:`.
///
/// `Default` yields the empty value (`""`, `""`). It is not a valid
/// identifier and only exists as a decode target for
/// [`NamespacedId::unmarshal_json`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacedId {
    namespace: String,
    name: String,
}

impl NamespacedId {
    /// Creates an ID from separate parts.
    ///
    /// Both parts are validated; the combined length limit only applies to
    /// [`NamespacedId::parse`].
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self, IdError> {
        let namespace = namespace.into();
        let name = name.into();

        if !is_valid_namespace(&namespace) {
            return Err(IdError::invalid(
                format!("{namespace}{SEPARATOR}{name}"),
                InvalidReason::InvalidNamespace(namespace),
            ));
        }
        if !is_valid_name(&name) {
            return Err(IdError::invalid(
                format!("{namespace}{SEPARATOR}{name}"),
                InvalidReason::InvalidName(name),
            ));
        }

        Ok(Self { namespace, name })
    }

    /// Parses an ID from its combined `namespace:name` form.
    ///
    /// Only the first `:` separates the parts; later colons belong to the
    /// name. A leading `:` yields an empty namespace.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let length = s.chars().count();
        if length > MAX_LENGTH {
            return Err(IdError::invalid(
                s,
                InvalidReason::TooLong {
                    length,
                    max: MAX_LENGTH,
                },
            ));
        }

        if s.is_empty() {
            return Err(IdError::invalid(s, InvalidReason::Empty));
        }

        let Some((namespace, name)) = s.split_once(SEPARATOR) else {
            return Err(IdError::invalid(s, InvalidReason::MissingSeparator));
        };

        if !is_valid_namespace(namespace) {
            return Err(IdError::invalid(
                s,
                InvalidReason::InvalidNamespace(namespace.to_string()),
            ));
        }
        if !is_valid_name(name) {
            return Err(IdError::invalid(
                s,
                InvalidReason::InvalidName(name.to_string()),
            ));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })
    }

    /// Returns the namespace part. May be empty.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the name part.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy with the namespace replaced.
    ///
    /// The new namespace is NOT validated. Callers own the check (see
    /// [`is_valid_namespace`]); a misused rebuild yields an ID that
    /// [`NamespacedId::parse`] would reject.
    #[must_use]
    pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: self.name.clone(),
        }
    }

    /// Returns a copy with the name replaced.
    ///
    /// The new name is NOT validated; see [`NamespacedId::with_namespace`].
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            namespace: self.namespace.clone(),
            name: name.into(),
        }
    }

    /// Encodes the ID as a JSON string literal of its canonical form.
    pub fn marshal_json(&self) -> Result<Vec<u8>, IdError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decodes a JSON string literal into this value.
    ///
    /// A literal that is not valid JSON yields [`IdError::MalformedEncoding`];
    /// a decoded string that fails [`NamespacedId::parse`] yields
    /// [`IdError::InvalidIdentifier`]. On error `self` is left untouched.
    pub fn unmarshal_json(&mut self, bytes: &[u8]) -> Result<(), IdError> {
        let decoded: String = serde_json::from_slice(bytes)?;
        *self = Self::parse(&decoded)?;
        Ok(())
    }
}

/// Returns true if `namespace` is empty or dot-separated `[A-Za-z0-9_-]+` segments.
pub fn is_valid_namespace(namespace: &str) -> bool {
    namespace.is_empty()
        || namespace.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
}

/// Returns true if `name` is non-empty and free of `/` and ASCII control characters.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c == '/' || c.is_ascii_control())
}

impl fmt::Display for NamespacedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, SEPARATOR, self.name)
    }
}

impl FromStr for NamespacedId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for NamespacedId {
    type Error = IdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NamespacedId {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<NamespacedId> for String {
    fn from(id: NamespacedId) -> Self {
        id.to_string()
    }
}

impl Serialize for NamespacedId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NamespacedId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }

    fn deserialize_in_place<D>(deserializer: D, place: &mut Self) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        *place = Self::parse(&s).map_err(serde::de::Error::custom)?;
        Ok(())
    }
}
