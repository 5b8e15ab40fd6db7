//! Helpers for generating tables: C header shadowing, merging C symbols
//! into a C++ table, and short-name aliases for qualified symbols.

use std::collections::HashSet;

use includeme_core::{IndexEntry, TableValue};
use tracing::{debug, info};

/// C headers and the C++ headers that wrap them.
pub const SHADOWS: &[(&str, &str)] = &[
    ("assert.h", "cassert"),
    ("complex.h", "ccomplex"),
    ("ctype.h", "cctype"),
    ("errno.h", "cerrno"),
    ("fenv.h", "cfenv"),
    ("float.h", "cfloat"),
    ("inttypes.h", "cinttypes"),
    ("limits.h", "climits"),
    ("locale.h", "clocale"),
    ("math.h", "cmath"),
    ("setjmp.h", "csetjmp"),
    ("signal.h", "csignal"),
    ("stdalign.h", "cstdalign"),
    ("stdarg.h", "cstdarg"),
    ("stdbool.h", "cstdbool"),
    ("stddef.h", "cstddef"),
    ("stdint.h", "cstdint"),
    ("stdio.h", "cstdio"),
    ("stdlib.h", "cstdlib"),
    ("string.h", "cstring"),
    ("tgmath.h", "ctgmath"),
    ("time.h", "ctime"),
    ("wchar.h", "cwchar"),
    ("wctype.h", "cwctype"),
];

/// The C++ spelling of a C header, or the header itself if it has none.
pub fn shadow_header(header: &str) -> &str {
    SHADOWS
        .iter()
        .find(|(c, _)| *c == header)
        .map_or(header, |&(_, cpp)| cpp)
}

/// Add C symbols the C++ table lacks, under either `name` or `std::name`,
/// with their headers mapped to the C++ spelling. Aliases in `c` are ignored.
pub fn merge_c_into_cpp(c: &[IndexEntry], mut cpp: Vec<IndexEntry>) -> Vec<IndexEntry> {
    let known: HashSet<String> = cpp.iter().map(|e| e.key.clone()).collect();
    let mut added = 0;

    for entry in c {
        let TableValue::Headers(headers) = &entry.value else {
            continue;
        };
        if known.contains(&entry.key) || known.contains(&format!("std::{}", entry.key)) {
            continue;
        }
        let shadowed = headers.iter().map(|h| shadow_header(h).to_string()).collect();
        cpp.push(IndexEntry::new(entry.key.clone(), TableValue::Headers(shadowed)));
        added += 1;
    }

    info!("Merged {} C symbols into C++ table", added);
    cpp
}

/// For every qualified header entry `ns::name`, add the alias
/// `name → ns::name` unless `name` is already taken.
pub fn decanonicalize(mut entries: Vec<IndexEntry>) -> Vec<IndexEntry> {
    let mut taken: HashSet<String> = entries.iter().map(|e| e.key.clone()).collect();
    let mut aliases = Vec::new();

    for entry in &entries {
        if entry.value.is_alias() {
            continue;
        }
        let Some(pos) = entry.key.rfind("::") else {
            continue;
        };
        let short = &entry.key[pos + 2..];
        if short.is_empty() {
            continue;
        }
        if !taken.insert(short.to_string()) {
            debug!("Alias conflict, not adding {} -> {}", short, entry.key);
            continue;
        }
        aliases.push(IndexEntry::new(short, TableValue::alias(entry.key.clone())));
    }

    info!("Derived {} short-name aliases", aliases.len());
    entries.extend(aliases);
    entries
}

/// Build a complete C++ table from a C table and a canonical C++ table.
pub fn derive_cpp_table(c: &[IndexEntry], cpp: Vec<IndexEntry>) -> Vec<IndexEntry> {
    decanonicalize(merge_c_into_cpp(c, cpp))
}

/// Serialise entries as a JSON table, sorted by key, one pair per line.
pub fn to_json(entries: &[IndexEntry]) -> serde_json::Result<String> {
    let mut sorted: Vec<&IndexEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.key.cmp(&b.key));

    let lines = sorted
        .iter()
        .map(|e| serde_json::to_string(&(&e.key, &e.value)).map(|pair| format!("  {}", pair)))
        .collect::<serde_json::Result<Vec<_>>>()?;

    if lines.is_empty() {
        return Ok("[]\n".to_string());
    }
    Ok(format!("[\n{}\n]\n", lines.join(",\n")))
}
