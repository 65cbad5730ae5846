//! YAML front matter rendering.

use wp2jekyll_core::Post;

/// Prepend the Jekyll front matter block to rendered content.
///
/// Categories and tags render as block lists, or `[]` when empty. The
/// permalink is quoted; title and dates are written as-is.
pub fn with_front_matter(post: &Post, content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 256);

    out.push_str("---\n");
    out.push_str("title: ");
    out.push_str(&post.title);
    out.push('\n');
    out.push_str("date: ");
    out.push_str(&post.published.format("%Y-%m-%d %H:%M:%S %z").to_string());
    out.push('\n');
    out.push_str("permalink: \"");
    out.push_str(&post.link);
    out.push_str("\"\n");
    push_list(&mut out, "categories", &post.categories);
    push_list(&mut out, "tags", &post.tags);
    out.push_str("---\n");
    out.push_str(content);

    out
}

fn push_list(out: &mut String, key: &str, values: &[String]) {
    if values.is_empty() {
        out.push_str(key);
        out.push_str(": []\n");
        return;
    }
    out.push_str(key);
    out.push_str(":\n");
    for value in values {
        out.push_str("- ");
        out.push_str(value);
        out.push('\n');
    }
}
