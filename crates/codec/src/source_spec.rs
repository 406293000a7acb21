//! Source-spec configuration strings
//!
//! A paired-dropdown widget is configured with one string of the shape
//! `keySource|valueSource`: the key source backs the key dropdown, the value
//! source backs the value dropdown. Either side may itself be an item path or
//! a `query:`-prefixed expression (resolution happens in the store layer).

use serde::{Deserialize, Serialize};

/// Parsed widget source configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Source backing the key dropdown
    pub key_source: String,
    /// Source backing the value dropdown; empty when the spec has no pipe
    pub value_source: String,
}

impl SourceSpec {
    /// Parse a `keySource|valueSource` configuration string
    ///
    /// With no pipe the whole spec is the key source and the value source is
    /// empty. The value source is only taken when the spec has exactly two
    /// segments; extra segments leave it empty.
    pub fn parse(spec: &str) -> Self {
        if spec.is_empty() {
            return Self::default();
        }
        let segments: Vec<&str> = spec.split('|').collect();
        Self {
            key_source: segments[0].to_string(),
            value_source: if segments.len() == 2 {
                segments[1].to_string()
            } else {
                String::new()
            },
        }
    }
}
