//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Maximum line length in octets (not including CRLF).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to the 75-octet limit and terminates it with CRLF.
///
/// Continuation lines start with a single space, which counts against their
/// budget. Breaks only ever fall on `char` boundaries, so multi-byte UTF-8
/// sequences are never split.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS) * 3 + 2);
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;

    for ch in line.chars() {
        let width = ch.len_utf8();
        if used + width > budget {
            out.push_str("\r\n ");
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        out.push(ch);
        used += width;
    }

    out.push_str("\r\n");
    out
}
