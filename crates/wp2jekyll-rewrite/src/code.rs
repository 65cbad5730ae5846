//! Code-region rewriting.
//!
//! Replaces each validated delimiter pair with a fenced Markdown code
//! block. Reassembly is an iterative left-to-right accumulation over the
//! ordered spans, so documents with many regions cost no call depth.

use crate::delimiters::CodeSpan;
use crate::entities::decode_html_entities;

/// Fenced-code marker.
const FENCE: &str = "```";

/// Rewrite every code span in `content` as a fenced block.
///
/// The payload is the text strictly between the begin match's end and
/// the end match's start; it is entity-decoded, stripped of leading and
/// trailing line breaks only (inner whitespace is payload), and emitted
/// with a single trailing newline. Text outside the spans is copied
/// through unchanged. With no spans the input comes back as-is.
pub fn rewrite_code_blocks(content: &str, spans: &[CodeSpan]) -> String {
    if spans.is_empty() {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;

    for span in spans {
        out.push_str(&content[cursor..span.begin.start]);
        out.push_str(FENCE);
        if let Some(lang) = &span.begin.lang {
            out.push_str(lang);
        }
        out.push('\n');

        let payload = &content[span.begin.end()..span.end.start];
        let decoded = decode_html_entities(payload);
        out.push_str(decoded.trim_matches(|c| c == '\r' || c == '\n'));
        out.push('\n');
        out.push_str(FENCE);

        cursor = span.end.end();
    }

    out.push_str(&content[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiters::DelimiterDialect;

    fn rewrite_shortcode(content: &str) -> String {
        let spans = DelimiterDialect::shortcode().spans_lenient(content);
        rewrite_code_blocks(content, &spans)
    }

    #[test]
    fn test_no_spans_identity() {
        assert_eq!(rewrite_shortcode("hello world"), "hello world");
    }

    #[test]
    fn test_single_block() {
        let out = rewrite_shortcode("before [code lang=rust]\nlet x = 1;\n[/code] after");
        assert_eq!(out, "before ```rust\nlet x = 1;\n``` after");
    }

    #[test]
    fn test_block_without_lang() {
        let out = rewrite_shortcode("[code]\nx\n[/code]");
        assert_eq!(out, "```\nx\n```");
    }

    #[test]
    fn test_payload_entity_decoding() {
        let out = rewrite_shortcode("[code]&lt;b&gt;hi&lt;/b&gt;[/code]");
        assert_eq!(out, "```\n<b>hi</b>\n```");
    }

    #[test]
    fn test_trims_line_breaks_only() {
        // Leading/trailing newlines go, indentation stays
        let out = rewrite_shortcode("[code]\r\n    indented\n\n[/code]");
        assert_eq!(out, "```\n    indented\n```");
    }

    #[test]
    fn test_multi_block_preserves_inter_text() {
        let content = "t0[code]a[/code]t1[code]b[/code]t2[code]c[/code]t3";
        let out = rewrite_shortcode(content);
        assert_eq!(out, "t0```\na\n```t1```\nb\n```t2```\nc\n```t3");
    }

    #[test]
    fn test_unterminated_begin_passes_through() {
        assert_eq!(rewrite_shortcode("[code] foo"), "[code] foo");
    }

    #[test]
    fn test_comment_dialect_block() {
        let content = "x <!-- begin code python -->\nprint(1)\n<!-- end code --> y";
        let spans = DelimiterDialect::comment().spans_strict(content).unwrap();
        let out = rewrite_code_blocks(content, &spans);
        assert_eq!(out, "x ```python\nprint(1)\n``` y");
    }
}
