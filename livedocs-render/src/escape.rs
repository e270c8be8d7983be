//! HTML encoding for text content and attribute values.
//!
//! Page templates never interpolate raw strings: every per-request value goes
//! through exactly one of these functions, chosen by where it lands.

use std::fmt::Write as _;

/// Encode a value for use as element text content.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their character references.
#[must_use]
pub fn html_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Encode a value for use inside a double-quoted attribute.
///
/// Replaces `&`, `<`, `"` and `'`. A bare `>` is legal inside a quoted
/// attribute and is left alone.
#[must_use]
pub fn html_attribute_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Encode a value for use inside a double-quoted JavaScript string in an
/// inline `<script>` block.
///
/// Backslash, quotes, `<`, `>`, `&` and control characters become `\uXXXX`
/// escapes, so the value can neither end the string nor the script element.
#[must_use]
pub fn js_string_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '\'' | '<' | '>' | '&') || c.is_control() {
            let _ = write!(out, "\\u{:04x}", u32::from(c));
        } else {
            out.push(c);
        }
    }
    out
}
