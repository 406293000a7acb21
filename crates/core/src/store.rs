//! Collaborator trait for the content repository
//!
//! The widgets never own item storage. They read from an [`ItemStore`]:
//! lookup by id, child enumeration of a path-like source, and query
//! execution for sources carrying the `query:` prefix.
//!
//! [`InMemoryStore`] is a plain map-backed implementation used by tests and
//! demos; a host integration provides its own.

use crate::id::ItemId;
use crate::item::Item;
use std::collections::HashMap;

/// Prefix marking a source string as a repository query
pub const QUERY_PREFIX: &str = "query:";

/// Read-only view of the content repository
pub trait ItemStore {
    /// Look up an item by id
    fn item(&self, id: &ItemId) -> Option<Item>;

    /// Enumerate the children of the item addressed by a path-like source
    ///
    /// Unknown sources yield an empty list.
    fn children(&self, source: &str) -> Vec<Item>;

    /// Execute a query expression and return the matching items
    ///
    /// The expression is the source string with the `query:` prefix already
    /// stripped. Unknown queries yield an empty list.
    fn select(&self, query: &str) -> Vec<Item>;

    /// Appearance sort order of an item, if the item exists and has one
    fn sort_order(&self, id: &ItemId) -> Option<i64> {
        self.item(id).and_then(|item| item.sort_order)
    }
}

/// Resolve a source string to its candidate items
///
/// Sources starting with `query:` run as queries; anything else is treated
/// as an item path whose children are the candidates. An empty source yields
/// no candidates.
pub fn resolve_source(store: &dyn ItemStore, source: &str) -> Vec<Item> {
    if source.is_empty() {
        return Vec::new();
    }
    match source.strip_prefix(QUERY_PREFIX) {
        Some(query) => store.select(query),
        None => store.children(source),
    }
}

/// Map-backed item store for tests and demos
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: HashMap<ItemId, Item>,
    children: HashMap<String, Vec<ItemId>>,
    queries: HashMap<String, Vec<ItemId>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, replacing any previous item with the same id
    pub fn insert(&mut self, item: Item) -> ItemId {
        let id = item.id;
        self.items.insert(id, item);
        id
    }

    /// Register the children of a path-like source
    pub fn set_children(&mut self, source: impl Into<String>, ids: Vec<ItemId>) {
        self.children.insert(source.into(), ids);
    }

    /// Register the result of a query expression (without the `query:` prefix)
    pub fn set_query(&mut self, query: impl Into<String>, ids: Vec<ItemId>) {
        self.queries.insert(query.into(), ids);
    }

    fn resolve_ids(&self, ids: Option<&Vec<ItemId>>) -> Vec<Item> {
        ids.map(|ids| {
            ids.iter()
                .filter_map(|id| self.items.get(id).cloned())
                .collect()
        })
        .unwrap_or_default()
    }
}

impl ItemStore for InMemoryStore {
    fn item(&self, id: &ItemId) -> Option<Item> {
        self.items.get(id).cloned()
    }

    fn children(&self, source: &str) -> Vec<Item> {
        self.resolve_ids(self.children.get(source))
    }

    fn select(&self, query: &str) -> Vec<Item> {
        self.resolve_ids(self.queries.get(query))
    }
}
