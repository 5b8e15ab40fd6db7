//! Raw table identifiers and parsing

use std::fmt;
use std::path::{Path, PathBuf};

use includeme_core::{IndexEntry, TableValue};
use serde::Deserialize;
use tracing::debug;

use crate::builtin;
use crate::error::TableError;

/// Prefix marking a table embedded in the binary.
pub const BUILTIN_PREFIX: &str = "builtin:";

/// Where a table's data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Embedded table, by name (`builtin:cpp` → `cpp`).
    Builtin(String),
    /// Table file on disk.
    File(PathBuf),
}

impl TableSource {
    /// Parse a table identifier. Relative file paths are joined onto
    /// `base_dir` when one is given.
    pub fn parse(id: &str, base_dir: Option<&Path>) -> Self {
        if let Some(name) = id.strip_prefix(BUILTIN_PREFIX) {
            return TableSource::Builtin(name.to_string());
        }
        let path = PathBuf::from(id);
        match base_dir {
            Some(base) if path.is_relative() => TableSource::File(base.join(path)),
            _ => TableSource::File(path),
        }
    }

    /// Load and validate the table's entries, in file order.
    pub fn load(&self) -> Result<Vec<IndexEntry>, TableError> {
        let id = self.to_string();
        let (format, text) = match self {
            TableSource::Builtin(name) => (TableFormat::Json, builtin::read(name)?),
            TableSource::File(path) => {
                let format = TableFormat::from_path(path)
                    .ok_or_else(|| TableError::UnknownFormat { id: id.clone() })?;
                let text = std::fs::read_to_string(path).map_err(|source| TableError::LoadFailed {
                    id: id.clone(),
                    source,
                })?;
                (format, text)
            }
        };

        let entries = parse_table(&id, format, &text)?;
        debug!("Loaded {} entries from table {}", entries.len(), id);
        Ok(entries)
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::Builtin(name) => write!(f, "{}{}", BUILTIN_PREFIX, name),
            TableSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// On-disk encodings a table may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Yaml,
    Toml,
}

impl TableFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(TableFormat::Json),
            Some("yaml") | Some("yml") => Some(TableFormat::Yaml),
            Some("toml") => Some(TableFormat::Toml),
            _ => None,
        }
    }
}

type RawPairs = Vec<(String, TableValue)>;

/// TOML cannot have a bare array at the top level.
#[derive(Deserialize)]
struct TomlTable {
    symbols: RawPairs,
}

/// Parse table text into entries, rejecting anything that is not a
/// sequence of `(name, headers | alias)` pairs.
pub fn parse_table(id: &str, format: TableFormat, text: &str) -> Result<Vec<IndexEntry>, TableError> {
    let malformed = |reason: String| TableError::Malformed {
        id: id.to_string(),
        reason,
    };

    let pairs: RawPairs = match format {
        TableFormat::Json => serde_json::from_str(text).map_err(|e| malformed(e.to_string()))?,
        TableFormat::Yaml => serde_yaml::from_str(text).map_err(|e| malformed(e.to_string()))?,
        TableFormat::Toml => toml::from_str::<TomlTable>(text)
            .map_err(|e| malformed(e.to_string()))?
            .symbols,
    };

    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (key, value))| -> Result<IndexEntry, TableError> {
            validate_pair(&key, &value).map_err(|reason| malformed(format!("entry {}: {}", i, reason)))?;
            Ok(IndexEntry::new(key, value))
        })
        .collect()
}

fn validate_pair(key: &str, value: &TableValue) -> Result<(), String> {
    if key.is_empty() {
        return Err("empty symbol name".to_string());
    }
    match value {
        TableValue::Headers(headers) if headers.is_empty() => {
            Err(format!("{} has an empty header list", key))
        }
        TableValue::Headers(headers) if headers.iter().any(|h| h.is_empty()) => {
            Err(format!("{} has an empty header name", key))
        }
        TableValue::Alias(target) if target.is_empty() => {
            Err(format!("{} is an alias to nothing", key))
        }
        _ => Ok(()),
    }
}
