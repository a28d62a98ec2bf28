//! Type-safe identifier wrapper for contacts.
//!
//! Contacts are numbered `0..count` in creation order. The newtype keeps a
//! contact identifier from being confused with an index into some other
//! collection, even though the two coincide for a freshly created set.

use serde::{Deserialize, Serialize};

/// Unique identifier of a contact within one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u32);

impl ContactId {
    /// Return the inner numeric value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ContactId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ContactId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ContactId> for u32 {
    fn from(id: ContactId) -> Self {
        id.0
    }
}
