//! Baggage entry: a value plus its opaque metadata properties.

use serde::{Deserialize, Serialize};

/// A single baggage value with zero or more metadata properties.
///
/// Metadata properties are the `;`-separated trailers of a wire
/// list-member. They are carried verbatim, in original order, and may
/// themselves contain an embedded `=` (e.g. `prop=val`). This core never
/// re-parses them into sub-key/sub-value pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    value: String,
    #[serde(default)]
    metadata: Vec<String>,
}

impl Entry {
    /// Create an entry with no metadata properties. Empty values are legal.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            metadata: Vec::new(),
        }
    }

    /// Create an entry carrying metadata properties verbatim.
    pub fn with_metadata(value: impl Into<String>, metadata: Vec<String>) -> Self {
        Self {
            value: value.into(),
            metadata,
        }
    }

    /// The decoded value, byte-for-byte as produced by the application or
    /// by percent-decoding the wire token.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Metadata properties in original order.
    pub fn metadata(&self) -> &[String] {
        &self.metadata
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::new(value)
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Entry::new(value)
    }
}
