//! Default tables embedded with rust-embed

use rust_embed::RustEmbed;

use crate::error::TableError;

/// Embed the data directory at compile time
#[derive(RustEmbed)]
#[folder = "data/"]
struct BuiltinTables;

fn file_name(name: &str) -> String {
    format!("{}.json", name)
}

/// Read a builtin table's raw JSON text.
pub fn read(name: &str) -> Result<String, TableError> {
    let id = format!("{}{}", crate::source::BUILTIN_PREFIX, name);
    let file = BuiltinTables::get(&file_name(name)).ok_or_else(|| TableError::LoadFailed {
        id: id.clone(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such builtin table"),
    })?;

    String::from_utf8(file.data.into_owned()).map_err(|e| TableError::Malformed {
        id,
        reason: e.to_string(),
    })
}

/// Names of all embedded tables, sorted.
pub fn names() -> Vec<String> {
    let mut names: Vec<String> = BuiltinTables::iter()
        .filter_map(|path| path.strip_suffix(".json").map(str::to_string))
        .collect();
    names.sort();
    names
}
