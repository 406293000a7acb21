//! Fieldkit - custom editing widgets for a content-management backend
//!
//! Fieldkit implements the server side of three custom field widgets — a
//! name/value pair editor, a sortable dual-list selector, and a timezone
//! droplist — together with the codecs for their persisted string formats.
//!
//! # Quick Start
//!
//! ```
//! use fieldkit::{id_list, MultilistModel, Item, ItemId};
//!
//! let first = Item::new(ItemId::new(), "First");
//! let second = Item::new(ItemId::new(), "Second");
//!
//! // Reconcile a persisted id list against the live candidates.
//! let value = id_list::encode(&[second.id]);
//! let model = MultilistModel::build(&value, &[first, second.clone()]);
//!
//! assert_eq!(model.selected[0].item(), Some(&second));
//! assert_eq!(model.value(), value);
//! ```
//!
//! # Architecture
//!
//! Persisted strings flow storage → codec (decode) → reconciler/model →
//! host renderer; edits flow back client order → codec (encode) → storage.
//! The content repository, rendering, and page lifecycle stay behind the
//! [`ItemStore`] trait and plain-data render models.

pub use fieldkit_codec::{id_list, name_value, percent, sort_attr, source_spec};
pub use fieldkit_codec::{NameValueEntry, SortAttr, SourceSpec};
pub use fieldkit_core::{
    is_item_id, resolve_source, FieldError, InMemoryStore, Item, ItemId, ItemStore, Result,
    QUERY_PREFIX,
};
pub use fieldkit_widgets::{
    partition, value_from_client, wrap_field, EditorRow, FieldView, LoadOutcome, MultilistCommand, MultilistModel,
    MultilistRow, NameValueEditor, NameValueListField, NameValueUrlField, RawField, SelectedSlot,
    SelectionPartition, SortMode, SortableMultilistField, TimeZoneEntry, TimeZonePicker,
    ZoneOption, ZoneOptions,
};
