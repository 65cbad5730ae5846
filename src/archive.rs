//! Archive handling: export zip in, Jekyll zip out, plus the in-place
//! fix-up walk over an existing posts directory.

use log::{debug, info, warn};
use std::fs;
use std::io::{Read, Seek, Write};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use wp2jekyll_config::Config;
use wp2jekyll_core::{AssetEntry, Post, Result, Wp2JekyllError};
use wp2jekyll_feed::extract_feed;
use wp2jekyll_rewrite::{render, rewrite_code_blocks, AssetOptions, DelimiterDialect};
use wp2jekyll_site as site;

/// Where the asset manifest lands inside the output zip.
pub const ASSET_MANIFEST_PATH: &str = "wp2jekyll-assets.yml";

/// Outcome of an `import` run.
#[derive(Debug, Default)]
pub struct ImportSummary {
    /// Posts written to the output archive
    pub imported: usize,
    /// Posts skipped because their delimiters were malformed
    pub skipped: usize,
}

/// Outcome of a `fix-code` run.
#[derive(Debug, Default)]
pub struct FixSummary {
    /// Files whose content changed
    pub rewritten: usize,
    /// Files skipped because their delimiters were malformed
    pub skipped: usize,
}

/// Convert an export zip on disk into a Jekyll zip on disk.
pub fn import(
    export_path: &Path,
    output_path: &Path,
    config: &Config,
    max_posts: Option<usize>,
) -> Result<ImportSummary> {
    let input = fs::File::open(export_path)?;
    let output = fs::File::create(output_path)?;
    import_streams(input, output, config, max_posts)
}

/// Convert an export archive read from `input` into a Jekyll archive
/// written to `output`.
///
/// Every non-empty `*.xml` entry, in name order, is extracted as a feed.
/// A post whose delimiters fail validation is logged and skipped;
/// sibling posts are unaffected. `max_posts` caps the total number of
/// posts imported across all entries.
pub fn import_streams<R: Read + Seek, W: Write + Seek>(
    input: R,
    output: W,
    config: &Config,
    max_posts: Option<usize>,
) -> Result<ImportSummary> {
    let mut archive = ZipArchive::new(input).map_err(zip_err)?;
    let mut writer = ZipWriter::new(output);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();

    let mut summary = ImportSummary::default();
    let mut manifest: Vec<AssetEntry> = Vec::new();
    let mut remaining = max_posts;

    'entries: for name in names {
        if !name.ends_with(".xml") {
            continue;
        }

        let mut entry = archive.by_name(&name).map_err(zip_err)?;
        if entry.size() == 0 {
            continue;
        }
        info!("Opening '{}'...", name);

        let mut xml = String::new();
        entry.read_to_string(&mut xml)?;
        drop(entry);

        let feed = extract_feed(&xml)?;
        info!("{} published posts", feed.posts.len());

        for post in &feed.posts {
            if remaining == Some(0) {
                break 'entries;
            }

            match import_post(post, &feed.attachments, config, &mut writer, options) {
                Ok(mut assets) => {
                    manifest.append(&mut assets);
                    summary.imported += 1;
                    if let Some(n) = remaining.as_mut() {
                        *n -= 1;
                    }
                }
                Err(Wp2JekyllError::MalformedDelimiters(msg)) => {
                    warn!("Skipping '{}': {}", post.title, msg);
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    if !manifest.is_empty() {
        let yaml = serde_yaml::to_string(&manifest)
            .map_err(|e| Wp2JekyllError::Archive(format!("manifest serialization: {}", e)))?;
        writer
            .start_file(ASSET_MANIFEST_PATH, options)
            .map_err(zip_err)?;
        writer.write_all(yaml.as_bytes())?;
    }

    writer.finish().map_err(zip_err)?;
    Ok(summary)
}

/// Render one post and write it (plus its comment data file) to the
/// output archive. Returns the post's referenced assets.
fn import_post<W: Write + Seek>(
    post: &Post,
    attachments: &[String],
    config: &Config,
    writer: &mut ZipWriter<W>,
    options: SimpleFileOptions,
) -> Result<Vec<AssetEntry>> {
    let path = site::post_file_path(post, &config.layout.posts_dir);
    info!("  Processing {}...", path);

    let asset_dir = site::asset_dir(post, &config.layout.assets_dir);
    let asset_options = AssetOptions {
        asset_dir: &asset_dir,
        root_relative: config.rewrite.root_relative_assets,
    };

    let rendered = render(
        &post.content,
        attachments.iter().map(String::as_str),
        &asset_options,
    )?;
    let document = site::with_front_matter(post, &rendered.content);

    writer.start_file(path.as_str(), options).map_err(zip_err)?;
    writer.write_all(document.as_bytes())?;

    if !post.comments.is_empty() {
        let comments_path = site::comments_file_path(post, &config.layout.comments_dir);
        let yaml = site::comments_yaml(&post.comments)?;
        writer
            .start_file(comments_path.as_str(), options)
            .map_err(zip_err)?;
        writer.write_all(yaml.as_bytes())?;
    }

    Ok(rendered.assets)
}

/// Walk a directory tree and rewrite comment-delimited code regions in
/// Markdown files in place.
///
/// Files whose delimiters fail validation are logged and skipped; files
/// without code markers are left untouched.
pub fn fix_code(dir: &Path) -> Result<FixSummary> {
    let mut summary = FixSummary::default();

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| Wp2JekyllError::Archive(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_markdown = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("md") | Some("markdown")
        );
        if !is_markdown {
            continue;
        }

        let content = fs::read_to_string(path)?;
        let spans = match DelimiterDialect::comment().spans_strict(&content) {
            Ok(spans) => spans,
            Err(e) => {
                warn!("Skipping '{}': {}", path.display(), e);
                summary.skipped += 1;
                continue;
            }
        };
        if spans.is_empty() {
            continue;
        }

        debug!("Code found in '{}'", path.display());
        let rewritten = rewrite_code_blocks(&content, &spans);
        if rewritten != content {
            fs::write(path, rewritten)?;
            summary.rewritten += 1;
        }
    }

    Ok(summary)
}

fn zip_err(e: zip::result::ZipError) -> Wp2JekyllError {
    Wp2JekyllError::Archive(e.to_string())
}
