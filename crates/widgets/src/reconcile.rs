//! Selection-state reconciliation for the sortable dual list
//!
//! The persisted value is an ordered id list; the live candidates come from
//! the repository. Reconciliation partitions the candidates into:
//! - `selected`: one slot per persisted id, in persisted order. A slot holds
//!   the resolved item when a candidate matches, otherwise it keeps the raw
//!   id token as a placeholder.
//! - `unselected`: candidates absent from the persisted list, ordered by the
//!   case-insensitive sort key over their name.
//!
//! Placeholders are kept, not dropped: a reorder-then-resave preserves a
//! stale id at its former slot even though it never resolved. The id-list
//! codec applies the opposite policy (drop invalid tokens); the two must stay
//! distinct.

use fieldkit_core::{Item, ItemId};
use serde::{Deserialize, Serialize};

/// One slot of the selected sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectedSlot {
    /// Persisted id matched a candidate
    Resolved(Item),
    /// Persisted id matched nothing; the raw token stays in place
    Unresolved(String),
}

impl SelectedSlot {
    /// The resolved item, if this slot resolved
    pub fn item(&self) -> Option<&Item> {
        match self {
            SelectedSlot::Resolved(item) => Some(item),
            SelectedSlot::Unresolved(_) => None,
        }
    }

    /// The id token this slot contributes back to the persisted value
    pub fn token(&self) -> String {
        match self {
            SelectedSlot::Resolved(item) => item.id.to_string(),
            SelectedSlot::Unresolved(token) => token.clone(),
        }
    }
}

/// Result of reconciling a persisted id list against live candidates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPartition {
    /// Slots in persisted order; always `persisted_ids.len()` long
    pub selected: Vec<SelectedSlot>,
    /// Candidates not in the persisted list, in ascending sort-key order
    pub unselected: Vec<Item>,
}

/// Partition candidates against a persisted id list
///
/// Each candidate either promotes the slot at the first occurrence of its id
/// in `persisted_ids`, or joins the unselected group. With duplicate
/// persisted ids only the first slot promotes; later duplicates stay
/// placeholders. Identity is id equality, never reference.
pub fn partition(persisted_ids: &[ItemId], candidates: &[Item]) -> SelectionPartition {
    let mut selected: Vec<SelectedSlot> = persisted_ids
        .iter()
        .map(|id| SelectedSlot::Unresolved(id.to_string()))
        .collect();
    let mut unselected: Vec<Item> = Vec::new();

    for candidate in candidates {
        match persisted_ids.iter().position(|id| *id == candidate.id) {
            Some(index) => selected[index] = SelectedSlot::Resolved(candidate.clone()),
            None => unselected.push(candidate.clone()),
        }
    }

    unselected.sort_by_key(|item| item.sort_key());

    SelectionPartition {
        selected,
        unselected,
    }
}
