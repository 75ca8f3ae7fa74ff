//! Word-wrap and padding helpers used by the screen renderer.
//!
//! Widths are counted in `char`s (single-cell approximation).

/// Count visible character width.
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Right-pad `line` with spaces up to `width` characters.
///
/// Lines already at or past `width` are returned unchanged.
pub fn pad_line(line: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(line));
    let mut padded = String::with_capacity(line.len() + fill);
    padded.push_str(line);
    padded.extend(std::iter::repeat(' ').take(fill));
    padded
}

/// Greedily wrap a single line into rows of at most `width` characters.
///
/// Tokens are separated by single spaces and packed left to right. A leading
/// token wider than `width` is hard-split at exactly `width` characters; the
/// unpacked remainder is wrapped again by the same rule until it fits. A line
/// that already fits comes back as one row, even when empty.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut rest = line.to_string();

    while visible_width(&rest) > width {
        let (row, remainder) = split_row(&rest, width);
        rows.push(row);
        rest = remainder;
    }
    rows.push(rest);
    rows
}

/// Cut one row off the front of `line`, returning `(row, remainder)`.
///
/// `line` must be wider than `width`, which guarantees the remainder is
/// strictly shorter than `line`.
fn split_row(line: &str, width: usize) -> (String, String) {
    let mut tokens: Vec<&str> = line.split(' ').collect();
    let first = tokens[0];
    if visible_width(first) > width {
        let (head, tail) = first.split_at(byte_offset(first, width));
        tokens[0] = head;
        tokens.insert(1, tail);
    }

    let mut row = tokens[0].to_string();
    let mut used = visible_width(&row);
    let mut next = 1;
    while let Some(token) = tokens.get(next) {
        let token_width = visible_width(token);
        if used + 1 + token_width > width {
            break;
        }
        row.push(' ');
        row.push_str(token);
        used += 1 + token_width;
        next += 1;
    }

    (row, tokens[next..].join(" "))
}

/// Byte index of the `chars`-th character, or the end of `s`.
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(idx, _)| idx)
}
