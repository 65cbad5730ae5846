//! wp2jekyll Config
//!
//! This crate handles site configuration loading and management
//! for wp2jekyll, supporting TOML configuration files.
//!
//! # Overview
//!
//! The configuration describes the target site's conventions: where
//! posts, assets, and comment data files live, and how rewritten asset
//! paths are rooted.
//!
//! # Example
//!
//! ```
//! use wp2jekyll_config::Config;
//!
//! // Defaults
//! let config = Config::default();
//! assert_eq!(config.layout.posts_dir, "_posts");
//!
//! // Or with an inline TOML override
//! let config = Config::load_with_override(Some("[layout]\nposts_dir = \"posts\"")).unwrap();
//! assert_eq!(config.layout.posts_dir, "posts");
//! ```

mod layout;
mod rewrite;

pub use layout::LayoutConfig;
pub use rewrite::RewriteConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;
use wp2jekyll_core::{Result, Wp2JekyllError};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[layout]
posts_dir    = "_posts"
assets_dir   = "assets"
comments_dir = "_data/comments"

[rewrite]
root_relative_assets = true
"#;

/// Main configuration structure.
///
/// Contains all configuration sections for wp2jekyll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output layout configuration
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Content rewrite configuration
    #[serde(default)]
    pub rewrite: RewriteConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// This can be used to show users the default config or
    /// to write a default config file.
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Wp2JekyllError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Load configuration with an optional override file or string.
    ///
    /// Starts from the defaults, then:
    /// - if `override_config` is a path to an existing file, loads and
    ///   merges that file;
    /// - otherwise treats the argument as an inline TOML string.
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| Wp2JekyllError::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    pub fn merge(&mut self, other: &Config) {
        self.layout.merge(&other.layout);
        self.rewrite.merge(&other.rewrite);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| Wp2JekyllError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.layout.posts_dir, "_posts");
        assert_eq!(config.layout.assets_dir, "assets");
        assert_eq!(config.layout.comments_dir, "_data/comments");
        assert!(config.rewrite.root_relative_assets);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(config.layout.posts_dir, "_posts");
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();

        let override_toml = r#"
            [layout]
            posts_dir = "content/posts"
            [rewrite]
            root_relative_assets = false
        "#;
        let override_config: Config = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert_eq!(base.layout.posts_dir, "content/posts");
        assert!(!base.rewrite.root_relative_assets);
    }

    #[test]
    fn test_load_with_inline_override() {
        let config =
            Config::load_with_override(Some("[rewrite]\nroot_relative_assets = false")).unwrap();
        assert!(!config.rewrite.root_relative_assets);
        // Untouched sections keep their defaults
        assert_eq!(config.layout.assets_dir, "assets");
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.layout.posts_dir, parsed.layout.posts_dir);
        assert_eq!(
            config.rewrite.root_relative_assets,
            parsed.rewrite.root_relative_assets
        );
    }
}
