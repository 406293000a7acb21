//! Item identifier type
//!
//! Content items are addressed by braced GUIDs, e.g.
//! `{11111111-2222-3333-4444-555555555555}`. The braces are part of the
//! persisted syntax: a bare UUID is not an item id token.
//!
//! Identity is GUID equality, not string equality, so two tokens differing
//! only in hex case compare equal once parsed. The canonical rendering is
//! braced, hyphenated, upper-case.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier for a content item
///
/// A wrapper around a UUID, parsed from and rendered to the braced-GUID
/// syntax used in persisted field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Create a new random ItemId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ItemId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse an ItemId from its braced-GUID token form
    ///
    /// Returns `None` unless the token is wrapped in `{`..`}` and the inner
    /// text is a valid GUID. This is the identifier-syntax predicate used by
    /// the delimited-list codec to drop malformed tokens.
    pub fn parse(token: &str) -> Option<Self> {
        let inner = token.strip_prefix('{')?.strip_suffix('}')?;
        Uuid::parse_str(inner).ok().map(Self)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Uuid::encode_buffer();
        write!(f, "{{{}}}", self.0.hyphenated().encode_upper(&mut buf))
    }
}

/// Check whether a token has item-identifier syntax
///
/// Equivalent to `ItemId::parse(token).is_some()`.
pub fn is_item_id(token: &str) -> bool {
    ItemId::parse(token).is_some()
}
