//! Output layout configuration.

use serde::{Deserialize, Serialize};

/// Where rendered files land inside the generated site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Directory receiving rendered posts.
    /// Default: `_posts`
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,

    /// Directory receiving downloaded assets.
    /// Default: `assets`
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// Directory receiving per-post comment data files.
    /// Default: `_data/comments`
    #[serde(default = "default_comments_dir")]
    pub comments_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            posts_dir: default_posts_dir(),
            assets_dir: default_assets_dir(),
            comments_dir: default_comments_dir(),
        }
    }
}

impl LayoutConfig {
    /// Merge another LayoutConfig into this one.
    ///
    /// All fields are copied from `other`; TOML doesn't distinguish
    /// "not set" from "set to default", so an override file carries
    /// complete sections.
    pub fn merge(&mut self, other: &LayoutConfig) {
        self.posts_dir = other.posts_dir.clone();
        self.assets_dir = other.assets_dir.clone();
        self.comments_dir = other.comments_dir.clone();
    }
}

fn default_posts_dir() -> String {
    "_posts".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_comments_dir() -> String {
    "_data/comments".to_string()
}
