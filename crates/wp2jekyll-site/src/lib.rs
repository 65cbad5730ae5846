//! wp2jekyll Site
//!
//! Jekyll-side conventions: where a post and its satellites land in the
//! generated site, and how the YAML front matter and comment data files
//! are rendered.

mod front_matter;
mod paths;

pub use front_matter::with_front_matter;
pub use paths::{asset_dir, comments_file_path, post_file_path, post_name};

use wp2jekyll_core::{Comment, Result, Wp2JekyllError};

/// Serialize a post's comments to a YAML data file body.
pub fn comments_yaml(comments: &[Comment]) -> Result<String> {
    serde_yaml::to_string(comments)
        .map_err(|e| Wp2JekyllError::Site(format!("comment serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_comments_yaml_shape() {
        let comments = vec![Comment {
            author: "Alice".to_string(),
            author_ip: "10.0.0.1".to_string(),
            date: chrono::Utc.with_ymd_and_hms(2020, 5, 13, 8, 0, 0).unwrap(),
            content: "Nice one".to_string(),
        }];
        let yaml = comments_yaml(&comments).unwrap();
        assert!(yaml.contains("author: Alice"));
        assert!(yaml.contains("content: Nice one"));
    }
}
