//! Scanning past the comment block at the top of a file

fn starts_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*")
}

/// Row of the first line after the leading comment block.
///
/// `//` lines and `/* ... */` blocks are skipped, as are blank lines that
/// are followed by another comment. A block comment with code after its
/// closing `*/` ends the scan at the row that opens it, so a section placed
/// there never splits the comment. An unterminated block comment swallows
/// the rest of the buffer.
pub fn leading_comment_end(lines: &[String]) -> usize {
    let mut row = 0;
    while row < lines.len() {
        let trimmed = lines[row].trim_start();

        if trimmed.starts_with("//") {
            row += 1;
        } else if let Some(rest) = trimmed.strip_prefix("/*") {
            match block_close(lines, row, rest) {
                Some((close_row, tail)) if tail.trim().is_empty() => row = close_row + 1,
                Some(_) => return row,
                None => return lines.len(),
            }
        } else if trimmed.is_empty() {
            let next = lines[row..]
                .iter()
                .position(|l| !l.trim().is_empty())
                .map(|offset| row + offset);
            match next {
                Some(next) if starts_comment(&lines[next]) => row = next,
                _ => break,
            }
        } else {
            break;
        }
    }
    row
}

/// Find the `*/` closing a block opened on `row`, whose text after `/*`
/// is `rest`. Returns the closing row and whatever follows `*/` there.
fn block_close<'a>(lines: &'a [String], row: usize, rest: &'a str) -> Option<(usize, &'a str)> {
    if let Some(end) = rest.find("*/") {
        return Some((row, &rest[end + 2..]));
    }
    lines
        .iter()
        .enumerate()
        .skip(row + 1)
        .find_map(|(i, line)| line.find("*/").map(|end| (i, &line[end + 2..])))
}
