//! iCalendar text escaping utilities.

/// Escapes text for iCalendar TEXT values (RFC 5545 §3.3.11).
///
/// Escapes backslash, comma, semicolon and line breaks. CRLF, lone LF and
/// lone CR each become a single `\n` escape.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' => {
                chars.next_if_eq(&'\n');
                result.push_str("\\n");
            }
            _ => result.push(c),
        }
    }
    result
}

/// Escapes a parameter value, quoting it when it contains delimiters.
///
/// Inside quotes, RFC 6868 caret encoding is applied.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    if !s.chars().any(|c| matches!(c, ':' | ';' | ',' | '"' | '\n')) {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len() + 8);
    result.push('"');
    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => result.push_str("^'"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}
