//! Property-based tests for the content pipeline.

use proptest::prelude::*;
use wp2jekyll_rewrite::{decode_html_entities, escape_template_braces, render, AssetOptions};

fn options() -> AssetOptions<'static> {
    AssetOptions {
        asset_dir: "assets/2020/5/post",
        root_relative: true,
    }
}

proptest! {
    /// Content with no delimiters, no locators, and no braces comes back
    /// byte-identical.
    #[test]
    fn test_render_identity_on_trigger_free_content(
        content in "[A-Za-z0-9 .,!?'\n-]{0,200}"
    ) {
        let rendered = render(&content, [], &options()).unwrap();
        prop_assert_eq!(rendered.content, content);
        prop_assert!(rendered.assets.is_empty());
    }

    /// Entity decoding without an ampersand is the identity.
    #[test]
    fn test_decode_identity_without_ampersand(text in "[A-Za-z0-9 <>\n]{0,200}") {
        prop_assert_eq!(decode_html_entities(&text), text);
    }

    /// A balanced brace span is wrapped exactly once, payload intact.
    #[test]
    fn test_escape_wraps_balanced_span(inner in "[A-Za-z0-9 .]{0,40}") {
        let content = format!("a {{{{{}}}}} b", inner);
        let escaped = escape_template_braces(&content);
        prop_assert_eq!(
            escaped,
            format!("a {{% raw %}}{{{{{}}}}}{{% endraw %}} b", inner)
        );
    }

    /// Escaping never drops the original text: stripping the inserted
    /// markers recovers the input.
    #[test]
    fn test_escape_is_reversible(content in "[A-Za-z{} ]{0,80}") {
        let escaped = escape_template_braces(&content);
        let stripped = escaped.replace("{% raw %}", "").replace("{% endraw %}", "");
        prop_assert_eq!(stripped, content);
    }
}
