//! Core data structures for the symbol index

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value half of a raw table pair.
///
/// On disk a header list is an array and an alias is a bare string, so the
/// two shapes are told apart without a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableValue {
    /// Headers to include, in insertion order.
    Headers(Vec<String>),
    /// Canonical name of another key in the same index.
    Alias(String),
}

impl TableValue {
    pub fn headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableValue::Headers(headers.into_iter().map(Into::into).collect())
    }

    pub fn alias(target: impl Into<String>) -> Self {
        TableValue::Alias(target.into())
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, TableValue::Alias(_))
    }
}

/// A single `(key, value)` pair as it appears in a raw table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub key: String,
    pub value: TableValue,
}

impl IndexEntry {
    pub fn new(key: impl Into<String>, value: TableValue) -> Self {
        IndexEntry {
            key: key.into(),
            value,
        }
    }
}

impl<K: Into<String>> From<(K, TableValue)> for IndexEntry {
    fn from((key, value): (K, TableValue)) -> Self {
        IndexEntry::new(key, value)
    }
}

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSymbol {
    /// Fully qualified name, e.g. `std::cout`.
    pub canonical_name: String,
    pub headers: Vec<String>,
}

impl ResolvedSymbol {
    /// Whether the canonical name lives inside a namespace.
    pub fn is_qualified(&self) -> bool {
        self.canonical_name.contains("::")
    }

    /// The `using` target needed when `token` was typed in place of the
    /// canonical name. `None` when the token already is the canonical name
    /// or the symbol is not namespaced.
    pub fn using_for(&self, token: &str) -> Option<&str> {
        if self.is_qualified() && self.canonical_name != token {
            Some(&self.canonical_name)
        } else {
            None
        }
    }
}

/// Language dialect identifier selecting a table set, e.g. `c` or `cpp`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mode(String);

impl Mode {
    pub fn new(name: impl Into<String>) -> Self {
        Mode(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        Mode::new(name)
    }
}

impl From<String> for Mode {
    fn from(name: String) -> Self {
        Mode(name)
    }
}
