//! Field-value codecs for fieldkit
//!
//! Every persisted field value is a single delimited string. This crate owns
//! the encode/decode contracts for those strings:
//! - name_value: ordered `key=value&key=value` lists, with a plain and a
//!   URL-decoding variant
//! - id_list: pipe-delimited item-id lists
//! - source_spec: `keySource|valueSource` configuration strings
//! - sort_attr: transient `id&..;datecreated&..;dateupdated&..` records for
//!   client-side fast sorting
//! - percent: minimal percent-encoding helpers
//!
//! ## Lossy-parse policy
//!
//! Decodes are total functions. Malformed delimiter structure and
//! non-identifier tokens are dropped, never reported as errors; worst case a
//! decode yields an empty structure. This is a defined policy the stored
//! formats rely on, not a convenience.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod id_list;
pub mod name_value;
pub mod percent;
pub mod sort_attr;
pub mod source_spec;

pub use name_value::NameValueEntry;
pub use sort_attr::SortAttr;
pub use source_spec::SourceSpec;
