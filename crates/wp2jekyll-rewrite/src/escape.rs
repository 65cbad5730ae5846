//! Templating escape pass.
//!
//! Jekyll runs every page through Liquid, which would evaluate literal
//! `{{...}}` spans left over in post bodies. Each balanced span gets
//! wrapped in raw markers so it survives rendering untouched.

/// Liquid raw-block open marker.
const RAW_OPEN: &str = "{% raw %}";
/// Liquid raw-block close marker.
const RAW_CLOSE: &str = "{% endraw %}";

/// Wrap every `{{ ... }}` span in `{% raw %}...{% endraw %}`.
///
/// A `{{` with no following `}}` is copied through as the two literal
/// characters and scanning resumes right after it, so a later balanced
/// span still gets wrapped. Content without `{{` comes back unchanged.
pub fn escape_template_braces(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        match rest[open + 2..].find("}}") {
            Some(close) => {
                let span_end = open + 2 + close + 2;
                out.push_str(RAW_OPEN);
                out.push_str(&rest[open..span_end]);
                out.push_str(RAW_CLOSE);
                rest = &rest[span_end..];
            }
            None => {
                out.push_str("{{");
                rest = &rest[open + 2..];
            }
        }
    }

    out.push_str(rest);
    out
}
