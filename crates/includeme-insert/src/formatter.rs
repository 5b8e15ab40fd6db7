//! Placing a directive line into a buffer

use serde::Serialize;
use tracing::debug;

use crate::buffer::Buffer;
use crate::comments::leading_comment_end;
use crate::directive::{Directive, DirectiveKind};

/// Blank lines kept between a new directive section and the code below it.
pub const SECTION_GAP: usize = 2;

/// A line that was actually added to the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertedLine {
    pub line: String,
    /// Zero-based row the line now occupies.
    pub row: usize,
}

/// Insert `directive` unless an identical line already exists.
///
/// Placement, first match wins:
/// 1. after the last existing directive of the same kind;
/// 2. for `using`, after the last `#include`;
/// 3. in a new section below the leading comment block, padded so that
///    [`SECTION_GAP`] blank lines separate it from following code.
///
/// Returns `None` when the line was already present and nothing changed.
pub fn insert_directive(buffer: &mut Buffer, directive: &Directive) -> Option<InsertedLine> {
    let line = directive.line();

    if buffer.lines().iter().any(|l| l.trim() == line) {
        debug!("Already present: {}", line);
        return None;
    }

    let row = match last_matching(buffer, directive.kind) {
        Some(last) => last + 1,
        None if directive.kind == DirectiveKind::Using => match last_matching(buffer, DirectiveKind::Include) {
            Some(last) => last + 1,
            None => open_section(buffer),
        },
        None => open_section(buffer),
    };

    buffer.insert_line(row, line.clone());
    debug!("Inserted {} at row {}", line, row);
    Some(InsertedLine { line, row })
}

fn last_matching(buffer: &Buffer, kind: DirectiveKind) -> Option<usize> {
    buffer.lines().iter().rposition(|l| kind.matches(l))
}

/// Prepare spacing for a new directive section and return the row the
/// directive goes on.
fn open_section(buffer: &mut Buffer) -> usize {
    let mut row = leading_comment_end(buffer.lines());

    // Separate from the comment block above, reusing a blank line if one is there.
    if row > 0 {
        if buffer.is_blank(row) {
            row += 1;
        } else {
            buffer.insert_line(row, "");
            row += 1;
        }
    }

    let blanks = buffer.blank_run(row);
    let followed_by_code = row + blanks < buffer.len();
    if followed_by_code {
        for _ in blanks..SECTION_GAP {
            buffer.insert_line(row, "");
        }
    }

    row
}
