//! Asset reference rewriting.
//!
//! Replaces absolute attachment locators with relative site paths. Only
//! candidates that actually occur in the content produce an entry; the
//! rest are dropped so nothing is fetched for them downstream.

use percent_encoding::percent_decode_str;
use std::collections::HashSet;
use uuid::Uuid;
use wp2jekyll_core::AssetEntry;

/// How assigned asset paths are formed.
#[derive(Debug, Clone)]
pub struct AssetOptions<'a> {
    /// Directory the document's assets are filed under,
    /// e.g. `assets/2020/5/my-post`
    pub asset_dir: &'a str,
    /// Prefix assigned paths with `/` (site-root relative)
    pub root_relative: bool,
}

/// Rewrite every occurrence of each used locator to its assigned path.
///
/// The assigned file name is the locator's final path segment,
/// percent-decoded. When two used locators reduce to the same file name,
/// the later one gets a freshly generated uuid prefix; first-seen order
/// keeps the plain name. Substitution is literal full-locator text
/// replacement, covering repeated occurrences.
pub fn rewrite_asset_links<'a>(
    content: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    options: &AssetOptions,
) -> (String, Vec<AssetEntry>) {
    let mut entries: Vec<AssetEntry> = Vec::new();
    let mut taken: HashSet<String> = HashSet::new();

    for candidate in candidates {
        if !content.contains(candidate) {
            continue;
        }

        let mut file_name = locator_file_name(candidate);
        if !taken.insert(file_name.clone()) {
            file_name = format!("{}-{}", Uuid::new_v4(), file_name);
            taken.insert(file_name.clone());
        }

        let root = if options.root_relative { "/" } else { "" };
        let path = format!(
            "{}{}/{}",
            root,
            options.asset_dir.trim_matches('/'),
            file_name
        );

        entries.push(AssetEntry {
            source: candidate.to_string(),
            path,
        });
    }

    if entries.is_empty() {
        return (content.to_string(), entries);
    }

    let mut rewritten = content.to_string();
    for entry in &entries {
        rewritten = rewritten.replace(&entry.source, &entry.path);
    }

    (rewritten, entries)
}

/// Final path segment of a locator, query/fragment stripped and
/// percent-decoded.
fn locator_file_name(locator: &str) -> String {
    let path = locator
        .split(['?', '#'])
        .next()
        .unwrap_or(locator)
        .trim_end_matches('/');
    let segment = path.rsplit('/').next().unwrap_or(path);
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
