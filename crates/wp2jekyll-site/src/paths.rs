//! Output path computation.
//!
//! All paths derive from the post's permalink and publication date. The
//! month component is not zero-padded; the permalink's own segments keep
//! whatever padding WordPress gave them.

use chrono::Datelike;
use wp2jekyll_core::Post;

/// Final permalink segment, e.g. `/2020/05/my-post/` -> `my-post`.
pub fn post_name(post: &Post) -> String {
    post.link
        .trim_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("")
        .to_string()
}

/// Rendered post path:
/// `{posts_dir}/{year}/{month}/{link-segments-dash-joined}.md`.
pub fn post_file_path(post: &Post, posts_dir: &str) -> String {
    let name = post
        .link
        .trim_matches('/')
        .split('/')
        .collect::<Vec<_>>()
        .join("-");
    format!(
        "{}/{}/{}/{}.md",
        posts_dir,
        post.published.year(),
        post.published.month(),
        name
    )
}

/// Per-post asset directory:
/// `{assets_dir}/{year}/{month}/{post-name}`.
pub fn asset_dir(post: &Post, assets_dir: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        assets_dir,
        post.published.year(),
        post.published.month(),
        post_name(post)
    )
}

/// Comment data file path: `{comments_dir}/{post-name}.yml`.
pub fn comments_file_path(post: &Post, comments_dir: &str) -> String {
    format!("{}/{}.yml", comments_dir, post_name(post))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn post() -> Post {
        Post {
            title: "First Post".to_string(),
            link: "/2020/05/first-post/".to_string(),
            published: DateTime::parse_from_rfc2822("Tue, 12 May 2020 10:30:00 +0000").unwrap(),
            categories: vec![],
            tags: vec![],
            content: String::new(),
            comments: vec![],
        }
    }

    #[test]
    fn test_post_name() {
        assert_eq!(post_name(&post()), "first-post");
    }

    #[test]
    fn test_post_file_path() {
        assert_eq!(
            post_file_path(&post(), "_posts"),
            "_posts/2020/5/2020-05-first-post.md"
        );
    }

    #[test]
    fn test_asset_dir() {
        assert_eq!(asset_dir(&post(), "assets"), "assets/2020/5/first-post");
    }

    #[test]
    fn test_comments_file_path() {
        assert_eq!(
            comments_file_path(&post(), "_data/comments"),
            "_data/comments/first-post.yml"
        );
    }
}
