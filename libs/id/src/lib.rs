//! # twinwire-id
//!
//! Namespaced identifier types, parsing, and validation for twinwire things.
//!
//! ## Design Principles
//!
//! - An identifier is the pair `(namespace, name)`, written `namespace:name`
//! - Construction and parsing are the only gates; everything downstream trusts the value
//! - IDs support roundtrip serialization (parse → format → parse)
//! - The JSON form is the bare canonical string, never an object
//!
//! ## ID Format
//!
//! ```text
//! namespace ::= "" | segment ("." segment)*
//! segment   ::= [A-Za-z0-9_-]+
//! name      ::= [^/\x00-\x1F\x7F]+
//! ```
//!
//! The combined string is split on the first `:`, so names may contain
//! further colons. Parsed input is limited to [`MAX_LENGTH`] characters.
//!
//! Examples:
//! - `org.eclipse.ditto:thermostat-1`
//! - `:no-namespace`
//! - `building-7.floor_2:room:42`

mod error;
mod macros;
mod namespaced;
mod types;

pub use error::{IdError, InvalidReason};
pub use namespaced::{is_valid_name, is_valid_namespace, NamespacedId, MAX_LENGTH, SEPARATOR};
pub use types::*;
