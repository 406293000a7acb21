//! Pipe-delimited item-id list codec
//!
//! Persisted format: `{id1}|{id2}|{id3}`. Decoding keeps only tokens with
//! item-identifier syntax; order is preserved and duplicates are NOT removed,
//! because the sortable list derives slot positions from duplicate order.
//!
//! Dropping invalid tokens is the lossy-parse policy for this format. The
//! selection reconciler applies a different policy (placeholders for
//! unresolvable ids); the two are intentionally distinct.

use fieldkit_core::ItemId;
use tracing::debug;

/// Decode a pipe-delimited id list
///
/// Non-identifier tokens (empty, malformed) are dropped. `decode("")` and
/// `decode("|")` both yield an empty list.
pub fn decode(raw: &str) -> Vec<ItemId> {
    raw.split('|')
        .filter_map(|token| {
            if token.is_empty() {
                return None;
            }
            let id = ItemId::parse(token);
            if id.is_none() {
                debug!(token, "dropping non-identifier token from id list");
            }
            id
        })
        .collect()
}

/// Encode an id list
///
/// An empty list encodes to the empty string, never a lone delimiter.
pub fn encode(ids: &[ItemId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("|")
}
