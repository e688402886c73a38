#[inline]
pub fn is_whitespace(c: char) -> bool {
    // Include U+FEFF (BOM) so a fragment captured from the very start of a
    // stream does not smuggle the marker into a bare token.
    matches!(
        c,
        '\u{0009}' | '\u{000A}' | '\u{000D}' | '\u{0020}' | '\u{FEFF}'
    )
}

/// Strict JSON number grammar: optional '-', integer digits, optional
/// fraction with digits, optional exponent with digits.
///
/// Deliberately not a `parse::<f64>` round-trip: general numeric parsing
/// accepts `inf`, `1.`, and leading '+' forms that JSON rejects, and a
/// truncated token like `3e` must fall through to string quoting instead of
/// being emitted as a broken numeric literal.
pub fn is_json_number(tok: &str) -> bool {
    let bytes = tok.as_bytes();
    let mut i = 0usize;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return false;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}
