//! Text rendering for `write` and string coercions.

/// Reals always print with six fixed decimals.
pub fn format_real(r: f32) -> String {
    format!("{r:.6}")
}

pub fn format_bool(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

/// Text a `write` of a string emits: quote characters are dropped and the
/// two-character sequence `\n` becomes a newline. Other backslashes are kept.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {}
            '\\' if chars.peek() == Some(&'n') => {
                chars.next();
                out.push('\n');
            }
            _ => out.push(c),
        }
    }
    out
}
