//! HTML entity decoding.
//!
//! Code payloads are stored HTML-escaped so they stay valid inside the
//! carrier markup; this module restores the literal text. Decoding is a
//! single left-to-right pass so already-decoded output is never decoded
//! again (`&amp;lt;` becomes `&lt;`, not `<`).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Named entities seen in WordPress-escaped code payloads.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("amp", "&");
    m.insert("lt", "<");
    m.insert("gt", ">");
    m.insert("quot", "\"");
    m.insert("apos", "'");
    m.insert("nbsp", " ");
    m.insert("hellip", "…");
    m.insert("mdash", "—");
    m.insert("ndash", "–");
    m.insert("lsquo", "‘");
    m.insert("rsquo", "’");
    m.insert("ldquo", "“");
    m.insert("rdquo", "”");
    m.insert("laquo", "«");
    m.insert("raquo", "»");
    m.insert("copy", "©");
    m.insert("reg", "®");
    m.insert("trade", "™");
    m.insert("deg", "°");
    m.insert("times", "×");
    m.insert("middot", "·");
    m.insert("bull", "•");
    m
});

/// Longest entity body we bother scanning for, `&` and `;` excluded.
const MAX_ENTITY_LEN: usize = 10;

/// Decode HTML entities in a string.
///
/// Named entities outside the known table and malformed numeric
/// references are left as literal text.
pub fn decode_html_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(i) = rest.find('&') {
        out.push_str(&rest[..i]);
        let tail = &rest[i..];

        match entity_at(tail) {
            Some((consumed, decoded)) => {
                out.push_str(&decoded);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Try to decode an entity at the start of `tail` (which begins with `&`).
///
/// Returns the number of bytes consumed and the replacement text.
fn entity_at(tail: &str) -> Option<(usize, String)> {
    let semi = tail
        .char_indices()
        .take(MAX_ENTITY_LEN + 2)
        .find(|&(_, c)| c == ';')
        .map(|(j, _)| j)?;
    if semi < 2 {
        // "&;" carries no name
        return None;
    }

    let name = &tail[1..semi];
    let decoded = if let Some(stripped) = name.strip_prefix('#') {
        let codepoint = if let Some(hex) = stripped.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            stripped.parse::<u32>().ok()?
        };
        char::from_u32(codepoint)?.to_string()
    } else {
        NAMED_ENTITIES.get(name)?.to_string()
    };

    Some((semi + 1, decoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities() {
        assert_eq!(decode_html_entities("&lt;b&gt;hi&lt;/b&gt;"), "<b>hi</b>");
        assert_eq!(decode_html_entities("a &amp; b"), "a & b");
        assert_eq!(decode_html_entities("&quot;x&quot;"), "\"x\"");
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_html_entities("&#169;"), "©");
        assert_eq!(decode_html_entities("&#x00A9;"), "©");
        assert_eq!(decode_html_entities("&#X41;"), "A");
    }

    #[test]
    fn test_unknown_entity_left_literal() {
        assert_eq!(decode_html_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_html_entities("&#xZZ;"), "&#xZZ;");
    }

    #[test]
    fn test_bare_ampersand() {
        assert_eq!(decode_html_entities("fish & chips"), "fish & chips");
        assert_eq!(decode_html_entities("a & b & c"), "a & b & c");
    }

    #[test]
    fn test_single_pass_no_double_decode() {
        assert_eq!(decode_html_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_html_entities("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_trailing_ampersand() {
        assert_eq!(decode_html_entities("end &"), "end &");
    }

    #[test]
    fn test_no_entities_identity() {
        assert_eq!(decode_html_entities("plain text"), "plain text");
    }
}
