//! Content rewrite configuration.

use serde::{Deserialize, Serialize};

/// Knobs for the content transformation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Prefix assigned asset paths with `/` so they resolve from the
    /// site root rather than relative to the post.
    /// Default: true
    #[serde(default = "default_true")]
    pub root_relative_assets: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root_relative_assets: true,
        }
    }
}

impl RewriteConfig {
    /// Merge another RewriteConfig into this one.
    pub fn merge(&mut self, other: &RewriteConfig) {
        self.root_relative_assets = other.root_relative_assets;
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let rewrite = RewriteConfig::default();
        assert!(rewrite.root_relative_assets);
    }
}
