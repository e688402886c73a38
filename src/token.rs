use crate::classify::is_json_number;

/// Turn a raw trimmed token into valid JSON value text. Pure and
/// deterministic; the policy is evaluated strictly in order:
///
/// 1. empty -> `null`
/// 2. a lone opening bracket -> empty container
/// 3. string literal -> closed if unterminated, otherwise unchanged
/// 4. strict JSON number -> unchanged
/// 5. `true` / `false` / `null` -> unchanged
/// 6. trailing comma artifact -> dropped, then re-evaluated
/// 7. anything else -> quoted as a string
///
/// A keyword prefix like `tru` lands in rule 7 and is quoted; the completer
/// never guesses at keyword completions, it only closes what is already
/// unambiguous.
pub(crate) fn complete_token(raw: &str) -> String {
    let tok = raw.trim();
    if tok.is_empty() {
        return "null".to_string();
    }
    if tok == "{" {
        return "{}".to_string();
    }
    if tok == "[" {
        return "[]".to_string();
    }
    if tok.starts_with('"') {
        return close_string_literal(tok);
    }
    if is_json_number(tok) {
        return tok.to_string();
    }
    if matches!(tok, "true" | "false" | "null") {
        return tok.to_string();
    }
    if let Some(stripped) = tok.strip_suffix(',') {
        return complete_token(stripped);
    }
    quote_bare(tok)
}

fn close_string_literal(tok: &str) -> String {
    if tok.len() > 1 && ends_with_unescaped_quote(tok) {
        return tok.to_string();
    }
    let mut s = tok.to_string();
    trim_truncated_escape(&mut s);
    s.push('"');
    s
}

/// True when the final character is a `"` not consumed by an escape: the run
/// of backslashes immediately before it has even length.
fn ends_with_unescaped_quote(tok: &str) -> bool {
    let bytes = tok.as_bytes();
    if bytes.len() < 2 || bytes.last() != Some(&b'"') {
        return false;
    }
    let backslashes = bytes[..bytes.len() - 1]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 0
}

/// Drop a truncated escape sequence from the tail of an unterminated string
/// body so the synthesized closing quote is not itself escaped. Handles a
/// dangling backslash (`"ab\`) and a cut-off `\uXXXX` (`"\u12`); both occur
/// in legitimate prefixes of valid documents.
fn trim_truncated_escape(s: &mut String) {
    let trailing = s.chars().rev().take_while(|&c| c == '\\').count();
    if trailing % 2 == 1 {
        s.pop();
        return;
    }
    let bytes = s.as_bytes();
    let mut j = bytes.len();
    let mut hex = 0usize;
    while j > 0 && hex < 4 && bytes[j - 1].is_ascii_hexdigit() {
        j -= 1;
        hex += 1;
    }
    if hex == 4 || j < 2 || bytes[j - 1] != b'u' || bytes[j - 2] != b'\\' {
        return;
    }
    let before = bytes[..j - 2]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    if before % 2 == 0 {
        s.truncate(j - 2);
    }
}

/// Wrap a bare literal as a JSON string, escaping quotes, backslashes and
/// the control characters JSON refuses inside string literals.
fn quote_bare(tok: &str) -> String {
    let mut out = String::with_capacity(tok.len() + 2);
    out.push('"');
    for c in tok.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
