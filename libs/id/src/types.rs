//! Typed namespaced ID definitions for addressable resources.
//!
//! Every type shares the `namespace:name` grammar of [`NamespacedId`](crate::NamespacedId);
//! distinct types keep a policy ID from being passed where a thing ID is expected.

use crate::define_namespaced_id;

// =============================================================================
// Things
// =============================================================================

define_namespaced_id!(
    /// Address of a digital twin ("thing").
    ThingId
);

// =============================================================================
// Policies
// =============================================================================

define_namespaced_id!(
    /// Address of the policy governing access to things.
    PolicyId
);

// =============================================================================
// Tests
// =============================================================================
