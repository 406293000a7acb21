//! Sortable dual-list model
//!
//! The widget shows all candidates on one side and the selected items, in
//! persisted order, on the other. Entries move and reorder freely; every
//! entry carries a sort-attribute record so fast sorting needs no repository
//! round trip. The persisted value is re-derived from the selected side's
//! order.
//!
//! Host messages arrive as a closed [`MultilistCommand`] enum parsed from the
//! wire names, dispatched exhaustively — never matched on raw strings at the
//! call site.

use crate::reconcile::{partition, SelectedSlot};
use fieldkit_codec::{id_list, sort_attr, SortAttr};
use fieldkit_core::{Item, ItemId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fast-sort modes offered by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Case-insensitive by display name, ascending
    Name,
    /// By creation date, most recent first
    DateCreated,
    /// By update date, most recent first
    DateUpdated,
}

impl SortMode {
    /// Parse the select-option value; empty or unknown yields `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Name" => Some(SortMode::Name),
            "DateCreated" => Some(SortMode::DateCreated),
            "DateUpdated" => Some(SortMode::DateUpdated),
            _ => None,
        }
    }
}

/// Widget commands, parsed from host message names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultilistCommand {
    /// Move every unselected entry to the selected side
    SelectAll,
    /// Move every selected entry back to the unselected side
    UnselectAll,
}

impl MultilistCommand {
    /// Parse a wire message name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "contentmultilist:selectall" => Some(MultilistCommand::SelectAll),
            "contentmultilist:unselectall" => Some(MultilistCommand::UnselectAll),
            _ => None,
        }
    }

    /// The wire message name of this command
    pub fn wire_name(&self) -> &'static str {
        match self {
            MultilistCommand::SelectAll => "contentmultilist:selectall",
            MultilistCommand::UnselectAll => "contentmultilist:unselectall",
        }
    }
}

/// One rendered list entry: display label plus its sort attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultilistRow {
    /// Display name shown in the list
    pub label: String,
    /// Sort-attribute record carried on the entry
    pub attr: SortAttr,
}

impl MultilistRow {
    fn for_item(item: &Item) -> Self {
        Self {
            label: item.display_name.clone(),
            attr: SortAttr::for_item(item),
        }
    }
}

/// Server-side state of the sortable dual list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultilistModel {
    /// Selected slots in persisted order; unresolved ids stay as placeholders
    pub selected: Vec<SelectedSlot>,
    /// Unselected candidates in sort-key order
    pub unselected: Vec<Item>,
}

impl MultilistModel {
    /// Reconcile a persisted value against the candidate items
    pub fn build(value: &str, candidates: &[Item]) -> Self {
        let ids = id_list::decode(value);
        let parts = partition(&ids, candidates);
        Self {
            selected: parts.selected,
            unselected: parts.unselected,
        }
    }

    /// Rows for the unselected side
    pub fn unselected_rows(&self) -> Vec<MultilistRow> {
        self.unselected.iter().map(MultilistRow::for_item).collect()
    }

    /// Rows for the selected side
    ///
    /// Unresolved placeholders have nothing to display and are not rendered;
    /// they still occupy their slot in [`MultilistModel::value`].
    pub fn selected_rows(&self) -> Vec<MultilistRow> {
        self.selected
            .iter()
            .filter_map(|slot| slot.item().map(MultilistRow::for_item))
            .collect()
    }

    /// Re-encode the persisted value from the current selected order
    ///
    /// Placeholder slots contribute their raw token, so an id that never
    /// resolved survives a resave in its former position.
    pub fn value(&self) -> String {
        self.selected
            .iter()
            .map(|slot| slot.token())
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Apply a widget command
    pub fn apply(&mut self, command: MultilistCommand) {
        match command {
            MultilistCommand::SelectAll => self.select_all(),
            MultilistCommand::UnselectAll => self.unselect_all(),
        }
    }

    /// Move all unselected candidates to the end of the selected side
    pub fn select_all(&mut self) {
        for item in self.unselected.drain(..) {
            self.selected.push(SelectedSlot::Resolved(item));
        }
    }

    /// Move all selected items back to the unselected side
    ///
    /// Unresolved placeholders have no item to move and are discarded, the
    /// same way the client rebuilds the value from rendered entries only.
    pub fn unselect_all(&mut self) {
        for slot in self.selected.drain(..) {
            if let SelectedSlot::Resolved(item) = slot {
                self.unselected.push(item);
            }
        }
        self.unselected.sort_by_key(|item| item.sort_key());
    }

    /// Fast-sort the selected side
    ///
    /// Sorting runs over rendered entries, so unresolved placeholders are
    /// dropped — reordering implies a client-side rebuild from rendered rows.
    pub fn fast_sort(&mut self, mode: SortMode) {
        let mut items: Vec<Item> = self
            .selected
            .drain(..)
            .filter_map(|slot| match slot {
                SelectedSlot::Resolved(item) => Some(item),
                SelectedSlot::Unresolved(token) => {
                    debug!(token, "dropping unresolved slot during fast sort");
                    None
                }
            })
            .collect();

        match mode {
            SortMode::Name => {
                items.sort_by(|a, b| sort_attr::by_name(&a.display_name, &b.display_name))
            }
            SortMode::DateCreated => items.sort_by(|a, b| {
                sort_attr::by_created_desc(&SortAttr::for_item(a), &SortAttr::for_item(b))
            }),
            SortMode::DateUpdated => items.sort_by(|a, b| {
                sort_attr::by_updated_desc(&SortAttr::for_item(a), &SortAttr::for_item(b))
            }),
        }

        self.selected = items.into_iter().map(SelectedSlot::Resolved).collect();
    }
}

/// Re-derive the persisted value from the client's reordered records
///
/// The client hands back one sort-attribute record per selected entry, in
/// display order. Only the id field matters here; records whose id does not
/// parse are skipped.
pub fn value_from_client<S: AsRef<str>>(records: &[S]) -> String {
    let ids: Vec<ItemId> = records
        .iter()
        .filter_map(|record| {
            let first = record.as_ref().split(';').next()?;
            let (name, token) = first.trim().split_once('&')?;
            if name != "id" {
                return None;
            }
            ItemId::parse(token)
        })
        .collect();
    id_list::encode(&ids)
}
