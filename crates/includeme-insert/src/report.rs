//! Aggregate result of including a symbol

use std::fmt;

use includeme_core::ResolvedSymbol;
use serde::Serialize;

use crate::buffer::Buffer;
use crate::directive::Directive;
use crate::formatter::insert_directive;

/// Separator between lines in the human-readable report.
pub const REPORT_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Report {
    /// Lines newly added, in insertion order.
    Inserted(Vec<String>),
    /// Every directive was already present.
    NothingToDo,
}

impl Report {
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Report::NothingToDo
        } else {
            Report::Inserted(lines)
        }
    }

    pub fn inserted(&self) -> &[String] {
        match self {
            Report::Inserted(lines) => lines,
            Report::NothingToDo => &[],
        }
    }

    pub fn is_nothing_to_do(&self) -> bool {
        matches!(self, Report::NothingToDo)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Inserted(lines) => write!(f, "Added: {}", lines.join(REPORT_SEPARATOR)),
            Report::NothingToDo => f.write_str("Nothing to do: already included"),
        }
    }
}

/// Insert every directive `resolved` needs into `buffer`.
pub fn include_symbol(buffer: &mut Buffer, resolved: &ResolvedSymbol, token: &str) -> Report {
    let inserted = Directive::for_symbol(resolved, token)
        .iter()
        .filter_map(|directive| insert_directive(buffer, directive))
        .map(|inserted| inserted.line)
        .collect();
    Report::from_lines(inserted)
}
