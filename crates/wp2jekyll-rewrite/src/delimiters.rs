//! Paired begin/end delimiter scanning.
//!
//! Two dialects mark code regions in exported content: an HTML-comment
//! marker pair used in already-generated site files, and the WordPress
//! `[code]...[/code]` shortcode found in feed bodies. Both pair the k-th
//! begin with the k-th end by discovery order — delimiters are sequential,
//! never nested.

use regex::Regex;
use std::sync::LazyLock;
use wp2jekyll_core::{Result, Wp2JekyllError};

/// The HTML-comment marker dialect:
/// `<!-- begin code rust -->` ... `<!-- end code -->`.
static COMMENT_DIALECT: LazyLock<DelimiterDialect> = LazyLock::new(|| DelimiterDialect {
    begin: Regex::new(r"<!--\s*begin\s+code(?:\s+(?P<lang>[A-Za-z0-9_+#.-]+))?\s*-->").unwrap(),
    end: Regex::new(r"<!--\s*end\s+code\s*-->").unwrap(),
});

/// The shortcode dialect: `[code lang=rust]` ... `[/code]`.
static SHORTCODE_DIALECT: LazyLock<DelimiterDialect> = LazyLock::new(|| DelimiterDialect {
    begin: Regex::new(r"\[code(?:\s+lang=(?P<lang>[^\]\s]+))?\]").unwrap(),
    end: Regex::new(r"\[/code\]").unwrap(),
});

/// One occurrence of a begin or end delimiter pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterMatch {
    /// Byte offset of the match start
    pub start: usize,
    /// Matched length in bytes
    pub len: usize,
    /// Language annotation captured from a begin marker, if any
    pub lang: Option<String>,
}

impl DelimiterMatch {
    /// Byte offset just past the matched text.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A validated begin/end pair bounding a code payload.
///
/// Spans produced for one document are ordered by offset and
/// non-overlapping: `begin.start < end.start`, and the next span's begin
/// lies past this span's end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpan {
    /// The begin marker occurrence
    pub begin: DelimiterMatch,
    /// The paired end marker occurrence
    pub end: DelimiterMatch,
}

/// A begin/end delimiter pattern pair.
///
/// The two built-in dialects are compiled once and shared by reference;
/// scanning holds no state between calls.
pub struct DelimiterDialect {
    begin: Regex,
    end: Regex,
}

impl DelimiterDialect {
    /// The HTML-comment marker dialect.
    pub fn comment() -> &'static Self {
        &COMMENT_DIALECT
    }

    /// The `[code]...[/code]` shortcode dialect.
    pub fn shortcode() -> &'static Self {
        &SHORTCODE_DIALECT
    }

    /// All begin-marker occurrences, left to right.
    fn begins(&self, content: &str) -> Vec<DelimiterMatch> {
        self.begin
            .captures_iter(content)
            .map(|cap| {
                let m = cap.get(0).expect("capture group 0 always present");
                DelimiterMatch {
                    start: m.start(),
                    len: m.len(),
                    lang: cap.name("lang").map(|l| l.as_str().to_string()),
                }
            })
            .collect()
    }

    /// All end-marker occurrences, left to right.
    fn ends(&self, content: &str) -> Vec<DelimiterMatch> {
        self.end
            .find_iter(content)
            .map(|m| DelimiterMatch {
                start: m.start(),
                len: m.len(),
                lang: None,
            })
            .collect()
    }

    /// Collect code spans, validating the full matched sequence before
    /// returning anything.
    ///
    /// Fails with [`Wp2JekyllError::MalformedDelimiters`] when the begin
    /// and end counts differ, when any pair (k-th begin with k-th end)
    /// has its end at or before its begin, or when a begin marker falls
    /// inside the previous pair's region. No partial result is produced.
    pub fn spans_strict(&self, content: &str) -> Result<Vec<CodeSpan>> {
        let begins = self.begins(content);
        let ends = self.ends(content);

        if begins.len() != ends.len() {
            return Err(Wp2JekyllError::MalformedDelimiters(format!(
                "{} begin marker(s) but {} end marker(s)",
                begins.len(),
                ends.len()
            )));
        }

        for (begin, end) in begins.iter().zip(ends.iter()) {
            if begin.start >= end.start {
                return Err(Wp2JekyllError::MalformedDelimiters(format!(
                    "end marker at byte {} does not follow its begin marker at byte {}",
                    end.start, begin.start
                )));
            }
        }

        for (end, next_begin) in ends.iter().zip(begins.iter().skip(1)) {
            if next_begin.start < end.end() {
                return Err(Wp2JekyllError::MalformedDelimiters(format!(
                    "begin marker at byte {} falls inside the region ending at byte {}",
                    next_begin.start,
                    end.end()
                )));
            }
        }

        Ok(begins
            .into_iter()
            .zip(ends)
            .map(|(begin, end)| CodeSpan { begin, end })
            .collect())
    }

    /// Collect code spans leniently.
    ///
    /// A begin marker with no end marker after it forms no span; the
    /// literal marker text stays in the document and scanning continues
    /// past it. Begin markers inside an already-formed span belong to
    /// that span's payload. End markers with no preceding begin are
    /// plain text.
    pub fn spans_lenient(&self, content: &str) -> Vec<CodeSpan> {
        let ends = self.ends(content);
        let mut spans = Vec::new();
        let mut next_end = 0;
        let mut consumed = 0;

        for begin in self.begins(content) {
            if begin.start < consumed {
                // Inside the previous span's payload
                continue;
            }
            while next_end < ends.len() && ends[next_end].start < begin.end() {
                next_end += 1;
            }
            if next_end == ends.len() {
                // Unterminated open delimiter: leave it as literal text
                break;
            }
            let end = ends[next_end].clone();
            next_end += 1;
            consumed = end.end();
            spans.push(CodeSpan { begin, end });
        }

        spans
    }
}
