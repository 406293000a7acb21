//! Name/value pair editor model
//!
//! The editor shows one row per stored pair plus a single trailing blank row
//! for the next entry. When the widget renders as paired dropdowns, the
//! key and value option lists come from the two halves of the source spec.
//!
//! Saving goes through [`NameValueEditor::load_value`], which returns the
//! new encoded value together with an explicit `did_change` flag; the host
//! decides how to propagate its dirty state.

use fieldkit_codec::{name_value, NameValueEntry, SourceSpec};
use fieldkit_core::{resolve_source, Item, ItemStore, Result};

/// One editor row; the trailing blank row has an empty key and value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorRow {
    /// Row key; empty on the trailing blank row
    pub key: String,
    /// Row value
    pub value: String,
}

impl EditorRow {
    /// Create a row
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Result of loading edited rows back into a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Newly encoded field value
    pub value: String,
    /// Whether the value differs from the previous one
    pub did_change: bool,
}

/// Name/value pair editor
#[derive(Debug, Clone)]
pub struct NameValueEditor {
    source: SourceSpec,
}

impl NameValueEditor {
    /// Create an editor from its source configuration string
    ///
    /// An empty source is valid: the editor renders free-text rows with no
    /// dropdown options.
    pub fn new(source: &str) -> Self {
        Self {
            source: SourceSpec::parse(source),
        }
    }

    /// The parsed source configuration
    pub fn source(&self) -> &SourceSpec {
        &self.source
    }

    /// Build the editor rows for a persisted value
    ///
    /// Values are percent-decoded for editing. The result always ends with
    /// exactly one blank row.
    pub fn rows(&self, value: &str) -> Vec<EditorRow> {
        let mut rows: Vec<EditorRow> = name_value::decode_url(value)
            .into_iter()
            .map(|entry| EditorRow::new(entry.key, entry.value))
            .collect();
        rows.push(EditorRow::default());
        rows
    }

    /// Candidate items for the key dropdown
    pub fn key_options(&self, store: &dyn ItemStore) -> Vec<Item> {
        resolve_source(store, &self.source.key_source)
    }

    /// Candidate items for the value dropdown
    pub fn value_options(&self, store: &dyn ItemStore) -> Vec<Item> {
        resolve_source(store, &self.source.value_source)
    }

    /// Re-encode edited rows into a field value
    ///
    /// Rows with an empty key are skipped (the trailing blank row among
    /// them). Values are percent-encoded. `did_change` compares the encoded
    /// result against `current`.
    pub fn load_value(&self, rows: &[EditorRow], current: &str) -> LoadOutcome {
        let entries: Vec<NameValueEntry> = rows
            .iter()
            .filter(|row| !row.key.is_empty())
            .map(|row| NameValueEntry::new(row.key.clone(), row.value.clone()))
            .collect();
        let value = name_value::encode_url(&entries);
        let did_change = value != current;
        LoadOutcome { value, did_change }
    }

    /// Fail-fast check that a required item-id context is present
    ///
    /// Widgets bound to an item must be configured with a non-empty item id;
    /// an empty one is a programmer error, not a recoverable state.
    pub fn require_item_id(item_id: &str) -> Result<()> {
        if item_id.is_empty() {
            return Err(fieldkit_core::FieldError::EmptyArgument("item_id"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldkit_core::{FieldError, InMemoryStore, Item, ItemId};

    #[test]
    fn test_rows_append_blank_row() {
        let editor = NameValueEditor::new("");
        let rows = editor.rows("en=English&de=German");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], EditorRow::new("en", "English"));
        assert_eq!(rows[1], EditorRow::new("de", "German"));
        assert_eq!(rows[2], EditorRow::default());
    }

    #[test]
    fn test_rows_empty_value_single_blank() {
        let editor = NameValueEditor::new("");
        assert_eq!(editor.rows(""), vec![EditorRow::default()]);
    }

    #[test]
    fn test_rows_decode_values() {
        let editor = NameValueEditor::new("");
        let rows = editor.rows("a=x%20y");
        assert_eq!(rows[0].value, "x y");
    }

    #[test]
    fn test_load_value_skips_blank_rows() {
        let editor = NameValueEditor::new("");
        let rows = vec![
            EditorRow::new("en", "English"),
            EditorRow::new("", "orphan value"),
            EditorRow::default(),
        ];
        let outcome = editor.load_value(&rows, "");
        assert_eq!(outcome.value, "en=English");
        assert!(outcome.did_change);
    }

    #[test]
    fn test_load_value_unchanged() {
        let editor = NameValueEditor::new("");
        let rows = vec![EditorRow::new("en", "English"), EditorRow::default()];
        let outcome = editor.load_value(&rows, "en=English");
        assert!(!outcome.did_change);
    }

    #[test]
    fn test_load_value_encodes_values() {
        let editor = NameValueEditor::new("");
        let rows = vec![EditorRow::new("a", "x y")];
        let outcome = editor.load_value(&rows, "");
        assert_eq!(outcome.value, "a=x%20y");
    }

    #[test]
    fn test_edit_round_trip() {
        let editor = NameValueEditor::new("");
        let current = "a=1&b=two%20words";
        let rows = editor.rows(current);
        let outcome = editor.load_value(&rows, current);
        assert_eq!(outcome.value, current);
        assert!(!outcome.did_change);
    }

    #[test]
    fn test_dropdown_options_from_source_halves() {
        let mut store = InMemoryStore::new();
        let k = store.insert(Item::new(ItemId::new(), "Keys"));
        let v = store.insert(Item::new(ItemId::new(), "Values"));
        store.set_query("/content//*", vec![k]);
        store.set_children("/content/Languages", vec![v]);

        let editor = NameValueEditor::new("query:/content//*|/content/Languages");
        assert_eq!(editor.key_options(&store)[0].id, k);
        assert_eq!(editor.value_options(&store)[0].id, v);
    }

    #[test]
    fn test_value_options_empty_without_second_source() {
        let store = InMemoryStore::new();
        let editor = NameValueEditor::new("/content/Keys");
        assert!(editor.value_options(&store).is_empty());
    }

    #[test]
    fn test_require_item_id() {
        assert_eq!(
            NameValueEditor::require_item_id(""),
            Err(FieldError::EmptyArgument("item_id"))
        );
        assert!(NameValueEditor::require_item_id("{...}").is_ok());
    }
}
