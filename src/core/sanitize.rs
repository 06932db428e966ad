// src/core/sanitize.rs

/// Trim any of the characters in `set` from the right, like a char-class rstrip.
/// `rtrim_set("30 ft.", " ft.")` → `"30"`.
pub fn rtrim_set<'a>(s: &'a str, set: &str) -> &'a str {
    s.trim_end_matches(|c| set.contains(c))
}

/// Left counterpart of [`rtrim_set`]. Note that it eats *characters*, not a prefix:
/// `ltrim_set("swim 40", "swim ")` → `"40"`, but so does `ltrim_set("ims 40", "swim ")`.
pub fn ltrim_set<'a>(s: &'a str, set: &str) -> &'a str {
    s.trim_start_matches(|c| set.contains(c))
}

/// Replace every closed `open … close` span (and each newline outside one) with a
/// single space. No nesting: a span ends at the first `close`. An `open` with no
/// `close` after it is left as text.
pub fn blank_enclosed(s: &str, open: char, close: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(ch) = rest.chars().next() {
        let after = &rest[ch.len_utf8()..];
        if ch == open {
            if let Some(end) = after.find(close) {
                out.push(' ');
                rest = &after[end + close.len_utf8()..];
                continue;
            }
        }
        out.push(if ch == '\n' || ch == '\r' { ' ' } else { ch });
        rest = after;
    }
    out
}
