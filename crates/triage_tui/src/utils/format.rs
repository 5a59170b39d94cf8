//! Text formatting helpers: wrapping and truncation for fixed-width rendering.

/// Wrap text to lines of at most `width` characters, preserving literal
/// whitespace: embedded newlines split lines, and interior space runs, leading
/// indentation, and whitespace-only lines survive verbatim. A line that
/// overflows breaks at its last space before the limit (the break spaces are
/// consumed); a single token longer than `width` is hard-cut at the limit.
/// Returns one empty line for empty input so callers always have a first line.
pub fn wrap_preserving_newlines(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let mut out = Vec::new();
    for raw_line in s.split('\n') {
        if raw_line.chars().count() <= width {
            out.push(raw_line.to_string());
            continue;
        }
        let mut rest = raw_line;
        loop {
            if rest.chars().count() <= width {
                out.push(rest.to_string());
                break;
            }
            let cut = rest
                .char_indices()
                .nth(width)
                .map(|(b, _)| b)
                .unwrap_or(rest.len());
            let head = &rest[..cut];
            match head.rfind(' ') {
                // Break at the last space, as long as something non-blank
                // precedes it (otherwise we would emit an all-space line and
                // make no progress).
                Some(sp) if !head[..sp].trim().is_empty() => {
                    out.push(rest[..sp].to_string());
                    rest = rest[sp..].trim_start_matches(' ');
                }
                _ => {
                    out.push(head.to_string());
                    rest = &rest[cut..];
                }
            }
            if rest.is_empty() {
                break;
            }
        }
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Truncate `s` to at most `max_width` characters, appending `suffix` when truncated.
pub fn truncate_with_suffix(s: &str, max_width: usize, suffix: &str) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let suffix_len = suffix.chars().count();
    if max_width <= suffix_len {
        return suffix.chars().take(max_width).collect();
    }
    let take = max_width - suffix_len;
    format!("{}{}", s.chars().take(take).collect::<String>(), suffix)
}

/// Truncate to `max_width` with "…" suffix when needed.
#[inline]
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    truncate_with_suffix(s, max_width, "…")
}
