//! wp2jekyll Feed
//!
//! Extraction of post records from a WordPress WXR export feed.
//!
//! # Overview
//!
//! A WXR document is an RSS channel whose `item` elements carry posts,
//! pages, and attachments, distinguished by `wp:post_type`. This crate
//! turns one feed document into:
//!
//! - the ordered list of published posts (status `publish`, type `post`)
//!   with title, permalink path, publication date, categories, tags, raw
//!   content, and comments;
//! - the feed-wide list of attachment locators (`guid` of every
//!   `attachment` item), the candidate set for asset rewriting.
//!
//! Elements are matched by local name so the `wp:` prefix in the export
//! never matters. The one exception is `encoded`, which exists in both
//! the `content:` and `excerpt:` namespaces; only `content:encoded` is
//! the post body.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;
use wp2jekyll_core::{Comment, Post, Result, Wp2JekyllError};

/// One extracted feed document.
#[derive(Debug, Default)]
pub struct Feed {
    /// Published posts in document order
    pub posts: Vec<Post>,
    /// Attachment locators referenced anywhere in the feed
    pub attachments: Vec<String>,
}

/// Accumulates one `item` element while scanning.
#[derive(Debug, Default)]
struct RawItem {
    title: String,
    link: String,
    pub_date: String,
    guid: String,
    status: String,
    post_type: String,
    content: String,
    categories: Vec<String>,
    tags: Vec<String>,
    comments: Vec<RawComment>,
}

/// Accumulates one `wp:comment` element.
#[derive(Debug, Default)]
struct RawComment {
    author: String,
    author_ip: String,
    date_gmt: String,
    content: String,
}

/// Extract posts and attachment locators from one WXR document.
pub fn extract_feed(xml: &str) -> Result<Feed> {
    let mut reader = Reader::from_str(xml);

    let mut feed = Feed::default();
    let mut item: Option<RawItem> = None;
    let mut comment: Option<RawComment> = None;
    let mut category_domain: Option<String> = None;
    let mut capturing = false;
    let mut buf_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name();
                let local = local_name(name.as_ref());

                if local == b"item" {
                    item = Some(RawItem::default());
                    continue;
                }
                if item.is_none() {
                    continue;
                }

                match local {
                    b"comment" => comment = Some(RawComment::default()),
                    b"category" => {
                        category_domain = None;
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"domain" {
                                category_domain =
                                    Some(String::from_utf8_lossy(&attr.value).into_owned());
                            }
                        }
                        capturing = true;
                        buf_text.clear();
                    }
                    // `excerpt:encoded` shares the local name; only the
                    // content namespace carries the post body
                    b"encoded" if name.as_ref() == b"content:encoded" => {
                        capturing = true;
                        buf_text.clear();
                    }
                    b"title" | b"link" | b"pubDate" | b"guid" | b"status" | b"post_type"
                    | b"comment_author" | b"comment_author_IP" | b"comment_date_gmt"
                    | b"comment_content" => {
                        capturing = true;
                        buf_text.clear();
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                if capturing {
                    buf_text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::CData(e)) => {
                if capturing {
                    buf_text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if capturing {
                    let entity = String::from_utf8_lossy(e.as_ref()).into_owned();
                    if let Some(resolved) = resolve_entity(&entity) {
                        buf_text.push_str(&resolved);
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name = e.name();
                let local = local_name(name.as_ref());

                if local == b"item" {
                    if let Some(raw) = item.take() {
                        finish_item(raw, &mut feed)?;
                    }
                    continue;
                }

                let Some(raw) = item.as_mut() else { continue };
                let text = buf_text.clone();
                capturing = false;

                if let Some(c) = comment.as_mut() {
                    match local {
                        b"comment_author" => c.author = text,
                        b"comment_author_IP" => c.author_ip = text,
                        b"comment_date_gmt" => c.date_gmt = text,
                        b"comment_content" => c.content = text,
                        b"comment" => {
                            if let Some(done) = comment.take() {
                                raw.comments.push(done);
                            }
                        }
                        _ => {}
                    }
                    continue;
                }

                match local {
                    b"title" => raw.title = text,
                    b"link" => raw.link = text,
                    b"pubDate" => raw.pub_date = text,
                    b"guid" => raw.guid = text,
                    b"status" => raw.status = text,
                    b"post_type" => raw.post_type = text,
                    b"encoded" if name.as_ref() == b"content:encoded" => raw.content = text,
                    b"category" => match category_domain.take().as_deref() {
                        Some("category") => raw.categories.push(text),
                        Some("post_tag") => raw.tags.push(text),
                        _ => {}
                    },
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Wp2JekyllError::Feed(format!("XML error: {}", e))),
            _ => {}
        }
    }

    Ok(feed)
}

/// Turn one completed `item` into a post or attachment record.
fn finish_item(raw: RawItem, feed: &mut Feed) -> Result<()> {
    if raw.post_type == "attachment" {
        if !raw.guid.is_empty() {
            feed.attachments.push(raw.guid);
        }
        return Ok(());
    }
    if raw.status != "publish" || raw.post_type != "post" {
        return Ok(());
    }

    let published = parse_pub_date(&raw.pub_date)?;
    let comments = raw
        .comments
        .into_iter()
        .map(|c| {
            Ok(Comment {
                author: c.author,
                author_ip: c.author_ip,
                date: parse_gmt_date(&c.date_gmt)?,
                content: c.content,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    feed.posts.push(Post {
        title: raw.title,
        link: link_path(&raw.link),
        published,
        categories: raw.categories,
        tags: raw.tags,
        content: raw.content,
        comments,
    });

    Ok(())
}

/// Parse an RSS `pubDate` (RFC 2822).
fn parse_pub_date(text: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(text.trim())
        .map_err(|e| Wp2JekyllError::Feed(format!("bad pubDate '{}': {}", text.trim(), e)))
}

/// Parse a `wp:comment_date_gmt` value (`YYYY-MM-DD HH:MM:SS`, GMT).
fn parse_gmt_date(text: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text.trim(), "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| Wp2JekyllError::Feed(format!("bad comment date '{}': {}", text.trim(), e)))
}

/// Reduce a permalink to its absolute path, dropping scheme and host.
fn link_path(link: &str) -> String {
    match link.find("://") {
        Some(scheme) => match link[scheme + 3..].find('/') {
            Some(host) => link[scheme + 3 + host..].to_string(),
            None => "/".to_string(),
        },
        None => link.to_string(),
    }
}

/// Extract the local name from a possibly prefixed XML name
/// (e.g. `wp:status` -> `status`).
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

/// Resolve general entity references emitted by the reader.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "amp" => return Some("&".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "quot" => return Some("\"".to_string()),
        "apos" => return Some("'".to_string()),
        _ => {}
    }
    let num = entity.strip_prefix('#')?;
    let codepoint = if let Some(hex) = num.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        num.parse::<u32>().ok()?
    };
    char::from_u32(codepoint).map(|c| c.to_string())
}
