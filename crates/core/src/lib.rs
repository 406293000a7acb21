//! Core types and traits for fieldkit
//!
//! This crate defines the foundational types used throughout the system:
//! - ItemId: Braced-GUID identifier for content items
//! - Item: Content item with display name, dates, and appearance order
//! - ItemStore: Collaborator trait for item lookup, children, and queries
//! - FieldError: Error type for precondition violations at field boundaries
//!
//! Field-value parsing is deliberately NOT here: decodes are lossy and total
//! (see `fieldkit-codec`), while `FieldError` is reserved for programmer
//! errors such as missing required configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod id;
pub mod item;
pub mod store;

pub use error::{FieldError, Result};
pub use id::{is_item_id, ItemId};
pub use item::Item;
pub use store::{resolve_source, InMemoryStore, ItemStore, QUERY_PREFIX};
