//! Editing-widget models for fieldkit
//!
//! Server-side state for the custom field widgets, free of any markup or
//! host-page lifecycle:
//! - reconcile: selected/unselected partitioning for the sortable dual list
//! - field: typed views over raw persisted fields, plus `wrap_field`
//! - name_value_list: the name/value pair editor model
//! - multilist: the sortable dual-list model, fast sorting, and commands
//! - timezone: the timezone droplist model
//!
//! Widgets return plain data (rows, options, partitions) for a host renderer
//! to emit, and take explicit inputs instead of ambient page state. Dirty
//! tracking is an explicit `did_change` return value, never a global flag.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod multilist;
pub mod name_value_list;
pub mod reconcile;
pub mod timezone;

pub use field::{
    wrap_field, FieldView, NameValueListField, NameValueUrlField, RawField, SortableMultilistField,
};
pub use multilist::{value_from_client, MultilistCommand, MultilistModel, MultilistRow, SortMode};
pub use name_value_list::{EditorRow, LoadOutcome, NameValueEditor};
pub use reconcile::{partition, SelectedSlot, SelectionPartition};
pub use timezone::{TimeZoneEntry, TimeZonePicker, ZoneOption, ZoneOptions};
