//! Content item model
//!
//! A content item is the entity behind every selectable option: it has an
//! identifier, a name, a display name shown in pickers, creation/update dates
//! used for fast sorting, and an optional numeric appearance order.
//!
//! The repository owning items is a collaborator (see [`crate::store`]);
//! this type only carries the attributes the widgets read.

use crate::id::ItemId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A content item as seen by the editing widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier
    pub id: ItemId,
    /// Item name
    pub name: String,
    /// Name shown in pickers; defaults to `name`
    pub display_name: String,
    /// Creation date
    pub created: NaiveDate,
    /// Last-update date
    pub updated: NaiveDate,
    /// Appearance sort order, if the repository assigns one
    ///
    /// Items without an order sort as `0`, i.e. ahead of positive orders.
    pub sort_order: Option<i64>,
}

impl Item {
    /// Create an item with the given id and name
    ///
    /// Display name defaults to the name; dates default to the Unix epoch
    /// date; no sort order is assigned.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            display_name: name.clone(),
            name,
            created: NaiveDate::default(),
            updated: NaiveDate::default(),
            sort_order: None,
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Set the creation and update dates
    pub fn with_dates(mut self, created: NaiveDate, updated: NaiveDate) -> Self {
        self.created = created;
        self.updated = updated;
        self
    }

    /// Set the appearance sort order
    pub fn with_sort_order(mut self, order: i64) -> Self {
        self.sort_order = Some(order);
        self
    }

    /// Case-normalized sort key over the item name
    ///
    /// Used to order unselected picker entries alphabetically without
    /// regard to case. Never persisted.
    pub fn sort_key(&self) -> String {
        sort_key(&self.name)
    }
}

/// Derive a case-insensitive sort key from a display string
pub fn sort_key(name: &str) -> String {
    name.to_uppercase()
}
