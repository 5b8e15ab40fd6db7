//! Line-oriented text buffer

use std::fmt;

/// Ordered lines of a source file, without their terminators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Buffer {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Buffer {
    pub fn new() -> Self {
        Buffer {
            lines: Vec::new(),
            trailing_newline: true,
        }
    }

    /// Split text into lines. A missing final newline is remembered and
    /// reproduced by [`Buffer::to_text`].
    pub fn from_text(text: &str) -> Self {
        Buffer {
            lines: text.lines().map(str::to_string).collect(),
            trailing_newline: text.is_empty() || text.ends_with('\n'),
        }
    }

    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            text.push('\n');
        }
        text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Insert `line` so that it becomes row `row`. Rows past the end append.
    pub fn insert_line(&mut self, row: usize, line: impl Into<String>) {
        let row = row.min(self.lines.len());
        self.lines.insert(row, line.into());
    }

    pub fn is_blank(&self, row: usize) -> bool {
        self.lines.get(row).is_some_and(|l| l.trim().is_empty())
    }

    /// Number of consecutive blank lines starting at `row`.
    pub fn blank_run(&self, row: usize) -> usize {
        self.lines
            .iter()
            .skip(row)
            .take_while(|l| l.trim().is_empty())
            .count()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
