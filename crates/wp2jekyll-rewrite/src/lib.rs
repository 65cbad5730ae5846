//! wp2jekyll Rewrite
//!
//! The content transformation pipeline: the pure, per-document rewrites
//! that turn an exported post body into normalized Markdown.
//!
//! # Overview
//!
//! The pipeline applies three rewrites in a fixed order:
//!
//! 1. [`assets::rewrite_asset_links`] - absolute attachment locators
//!    become relative site paths (must run first so URLs inside code
//!    payloads are rewritten before fencing)
//! 2. [`code::rewrite_code_blocks`] - delimited code regions become
//!    fenced Markdown blocks, for both marker dialects
//! 3. [`escape::escape_template_braces`] - literal `{{...}}` spans get
//!    Liquid raw markers (last, so fences and rewritten paths are never
//!    themselves escaped)
//!
//! Every step takes `&str` and returns a new `String`; nothing is shared
//! between documents, so callers are free to process posts in parallel.

pub mod assets;
pub mod code;
pub mod delimiters;
pub mod entities;
pub mod escape;

pub use assets::{rewrite_asset_links, AssetOptions};
pub use code::rewrite_code_blocks;
pub use delimiters::{CodeSpan, DelimiterDialect, DelimiterMatch};
pub use entities::decode_html_entities;
pub use escape::escape_template_braces;

use wp2jekyll_core::{Rendered, Result};

/// Run the full content pipeline on one document.
///
/// `candidates` is the feed-wide list of attachment locators; only the
/// ones actually present in `content` end up in the returned asset set.
///
/// The HTML-comment code dialect is validated strictly: unbalanced or
/// mis-ordered markers fail the whole document with
/// [`wp2jekyll_core::Wp2JekyllError::MalformedDelimiters`] before any
/// output is produced. The `[code]` shortcode dialect is lenient; an
/// unterminated open token stays in the text. A document containing
/// neither dialect, no used locator, and no `{{` comes back unchanged.
pub fn render<'a>(
    content: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    options: &AssetOptions,
) -> Result<Rendered> {
    let (content, assets) = rewrite_asset_links(content, candidates, options);

    let spans = DelimiterDialect::comment().spans_strict(&content)?;
    let content = rewrite_code_blocks(&content, &spans);

    let spans = DelimiterDialect::shortcode().spans_lenient(&content);
    let content = rewrite_code_blocks(&content, &spans);

    let content = escape_template_braces(&content);

    Ok(Rendered { content, assets })
}
