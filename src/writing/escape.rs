//! Canonical escaping of characters and strings for source literals

use std::borrow::Cow;

/// Escape a single character, excluding the quote characters; which quote
/// needs escaping depends on the surrounding literal, so callers handle
/// `'` and `"` themselves.
pub fn escape_char(c: char) -> Cow<'static, str> {
    match c {
        '\\' => Cow::Borrowed("\\\\"),
        '\0' => Cow::Borrowed("\\0"),
        '\u{7}' => Cow::Borrowed("\\a"),
        '\u{8}' => Cow::Borrowed("\\b"),
        '\u{c}' => Cow::Borrowed("\\f"),
        '\n' => Cow::Borrowed("\\n"),
        '\r' => Cow::Borrowed("\\r"),
        '\t' => Cow::Borrowed("\\t"),
        '\u{b}' => Cow::Borrowed("\\v"),
        _ if requires_escape(c) => Cow::Owned(format!("\\u{:04x}", c as u32)),
        _ => Cow::Owned(c.to_string()),
    }
}

/// Escape a single character for use inside a character literal. Same as
/// [`escape_char`] but additionally escapes `'`.
pub fn escape_char_literal(c: char) -> Cow<'static, str> {
    if c == '\'' {
        Cow::Borrowed("\\'")
    } else {
        escape_char(c)
    }
}

/// Escape a string for use inside a string literal, `"` included. The
/// common case of a string needing no escaping returns the input borrowed,
/// without copying; only once the scan hits a character needing attention
/// is the result built up, starting from the clean prefix.
pub fn escape_string(s: &str) -> Cow<'_, str> {
    let found = s
        .char_indices()
        .find(|&(_, c)| c == '"' || requires_escape(c));

    let Some((i, _)) = found else {
        return Cow::Borrowed(s);
    };

    let mut result = String::with_capacity(s.len() + 8);
    result.push_str(&s[..i]);

    for c in s[i..].chars() {
        if c == '"' {
            result.push_str("\\\"");
        } else if requires_escape(c) {
            result.push_str(&escape_char(c));
        } else {
            result.push(c);
        }
    }

    Cow::Owned(result)
}

// Control characters and whitespace other than a plain space have no
// unambiguous spelling in source text.
fn requires_escape(c: char) -> bool {
    c == '\\' || c.is_control() || (c.is_whitespace() && c != ' ')
}
