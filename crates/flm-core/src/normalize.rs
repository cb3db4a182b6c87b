//! Change detection for filter lists.
//!
//! Two versions of a list are considered the same when they agree after
//! dropping the `[...]` format header, comment lines (`!`), blank lines, and
//! line order. Many upstream lists rewrite a timestamp in their header
//! comments on every build; those rewrites must not count as changes.

/// Canonical form of a filter list used for equality checks.
///
/// Returns the remaining rule lines sorted and joined with `\n`.
pub fn normalize(text: &str) -> String {
    let mut lines = split_lines(text);

    let Some(first) = lines.first() else {
        return String::new();
    };
    if is_header(first) {
        lines.remove(0);
    }

    let mut rules: Vec<&str> = lines
        .into_iter()
        .filter(|line| !line.is_empty() && !line.starts_with('!'))
        .collect();
    rules.sort_unstable();
    rules.join("\n")
}

/// True when `previous` and `fetched` differ after normalization.
pub fn is_changed(previous: &str, fetched: &str) -> bool {
    normalize(previous) != normalize(fetched)
}

fn is_header(line: &str) -> bool {
    !line.is_empty() && line.starts_with('[') && line.ends_with(']')
}

/// Line terminators: `\n`, `\r`, `\r\n`, vertical tab, form feed, the
/// ASCII file/group/record separators, NEL, and the Unicode line and
/// paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e'
            | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on every terminator accepted by [`is_line_break`], treating
/// `\r\n` as one. A trailing terminator does not produce an empty last line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
