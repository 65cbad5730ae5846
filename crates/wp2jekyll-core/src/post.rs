//! Records flowing between the feed extractor, the content pipeline,
//! and the site writer.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// One published post extracted from a WordPress export feed.
///
/// `content` is the raw body as stored in the feed; it is never mutated
/// in place — every transform in the pipeline returns a new string.
#[derive(Debug, Clone)]
pub struct Post {
    /// Post title
    pub title: String,
    /// Permalink reduced to its absolute path, e.g. `/2020/05/my-post/`
    pub link: String,
    /// Publication date from the feed's `pubDate`
    pub published: DateTime<FixedOffset>,
    /// Category names
    pub categories: Vec<String>,
    /// Tag names
    pub tags: Vec<String>,
    /// Raw body content
    pub content: String,
    /// Reader comments attached to the post
    pub comments: Vec<Comment>,
}

/// A reader comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment author display name
    pub author: String,
    /// Author IP address as recorded by WordPress
    pub author_ip: String,
    /// Comment date (GMT)
    pub date: DateTime<Utc>,
    /// Comment body
    pub content: String,
}

/// A referenced asset: the absolute locator found in post content and
/// the relative path substituted for it.
///
/// Entries only exist for locators actually present in a document; the
/// assigned path is unique within that document's asset set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Absolute source locator as it appeared in the content
    pub source: String,
    /// Collision-free relative path assigned in the rendered output
    pub path: String,
}

/// The output of the content pipeline for one document.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Final document text
    pub content: String,
    /// Assets referenced by the document, for an external fetch step
    pub assets: Vec<AssetEntry>,
}
