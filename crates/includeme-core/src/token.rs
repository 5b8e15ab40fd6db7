//! Token validation and extraction from a line of source text

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b':'
}

/// Whether `token` matches `[A-Za-z0-9_:]+`.
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(is_token_byte)
}

/// The token run touching byte offset `column` of `line`. A column inside a
/// multibyte character is moved back to that character's start.
///
/// A cursor sitting just past the last character of a word still selects
/// that word. Stray leading or trailing `:` (e.g. a global `::cout`) is
/// dropped.
pub fn token_at(line: &str, column: usize) -> Option<&str> {
    let bytes = line.as_bytes();
    let mut column = column.min(bytes.len());
    while !line.is_char_boundary(column) {
        column -= 1;
    }

    let mut start = column;
    while start > 0 && is_token_byte(bytes[start - 1]) {
        start -= 1;
    }
    let mut end = column;
    while end < bytes.len() && is_token_byte(bytes[end]) {
        end += 1;
    }

    let token = line[start..end].trim_matches(':');
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
