//! Typed views over raw persisted fields
//!
//! A host hands over a [`RawField`] (name + persisted string value); widgets
//! work through a typed view of it. Views are created with [`wrap_field`],
//! an explicit factory that yields `None` for an absent handle — replacing
//! the implicit conversion operators the original relied on.
//!
//! The two name/value views are deliberately distinct: one reads values
//! verbatim, the other percent-decodes them. See `fieldkit_codec::name_value`.

use fieldkit_codec::{id_list, name_value, NameValueEntry};
use fieldkit_core::{Item, ItemId, ItemStore};

/// A raw persisted field handle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawField {
    /// Field name
    pub name: String,
    /// Persisted string value
    pub value: String,
}

impl RawField {
    /// Create a raw field
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A typed view constructible from a raw field
pub trait FieldView: Sized {
    /// Wrap a raw field in this view
    fn wrap(raw: RawField) -> Self;
}

/// Wrap an optional raw field handle in a typed view
///
/// `None` in, `None` out: an absent field never panics and never produces a
/// view over missing data.
pub fn wrap_field<T: FieldView>(raw: Option<RawField>) -> Option<T> {
    raw.map(T::wrap)
}

/// Appearance-order lookup shared by the name/value views
///
/// Keys of a droplist-backed name/value field are item ids; an item's
/// appearance order drives display order. Unresolvable keys and items
/// without an order count as order `0`.
fn order_lookup<'a>(store: &'a dyn ItemStore) -> impl Fn(&str) -> Option<i64> + 'a {
    move |key| ItemId::parse(key).and_then(|id| store.sort_order(&id))
}

/// Name/value list field, plain-value variant
#[derive(Debug, Clone)]
pub struct NameValueListField {
    raw: RawField,
}

impl FieldView for NameValueListField {
    fn wrap(raw: RawField) -> Self {
        Self { raw }
    }
}

impl NameValueListField {
    /// The persisted value
    pub fn value(&self) -> &str {
        &self.raw.value
    }

    /// Decoded entries in stored order
    pub fn entries(&self) -> Vec<NameValueEntry> {
        name_value::decode(&self.raw.value)
    }

    /// Decoded entries ordered by the items' appearance order
    pub fn entries_sorted(&self, store: &dyn ItemStore) -> Vec<NameValueEntry> {
        name_value::sorted_by_order(&self.entries(), order_lookup(store))
    }

    /// Replace the persisted value from entries
    pub fn set_entries(&mut self, entries: &[NameValueEntry]) {
        self.raw.value = name_value::encode(entries);
    }
}

/// Name/value list field, URL-decoding variant
///
/// Identical to [`NameValueListField`] except values are percent-decoded on
/// read and percent-encoded on write.
#[derive(Debug, Clone)]
pub struct NameValueUrlField {
    raw: RawField,
}

impl FieldView for NameValueUrlField {
    fn wrap(raw: RawField) -> Self {
        Self { raw }
    }
}

impl NameValueUrlField {
    /// The persisted value
    pub fn value(&self) -> &str {
        &self.raw.value
    }

    /// Decoded entries in stored order, values percent-decoded
    pub fn entries(&self) -> Vec<NameValueEntry> {
        name_value::decode_url(&self.raw.value)
    }

    /// Decoded entries ordered by the items' appearance order
    pub fn entries_sorted(&self, store: &dyn ItemStore) -> Vec<NameValueEntry> {
        name_value::sorted_by_order(&self.entries(), order_lookup(store))
    }

    /// Replace the persisted value from entries, percent-encoding values
    pub fn set_entries(&mut self, entries: &[NameValueEntry]) {
        self.raw.value = name_value::encode_url(entries);
    }
}

/// Sortable multilist field view
///
/// Resolution here DROPS ids with no backing item (`items` is shorter than
/// `target_ids` when the repository lost an item). The dual-list widget uses
/// the reconciler instead, which keeps placeholders; the two policies are
/// intentionally different.
#[derive(Debug, Clone)]
pub struct SortableMultilistField {
    raw: RawField,
}

impl FieldView for SortableMultilistField {
    fn wrap(raw: RawField) -> Self {
        Self { raw }
    }
}

impl SortableMultilistField {
    /// The persisted value
    pub fn value(&self) -> &str {
        &self.raw.value
    }

    /// The persisted id list, invalid tokens dropped
    pub fn target_ids(&self) -> Vec<ItemId> {
        id_list::decode(&self.raw.value)
    }

    /// Resolve the persisted ids to items, dropping unresolvable ids
    pub fn items(&self, store: &dyn ItemStore) -> Vec<Item> {
        self.target_ids()
            .iter()
            .filter_map(|id| store.item(id))
            .collect()
    }

    /// Replace the persisted value from an id list
    pub fn set_ids(&mut self, ids: &[ItemId]) {
        self.raw.value = id_list::encode(ids);
    }
}
