//! Post record and news document models

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Fallback title for records without one
pub const UNTITLED: &str = "Untitled";

/// One normalized news entry
///
/// Every optional field is omitted from serialized output when absent.
/// On input the aliases other producer variants use (`image`, `excerpt`,
/// `content`) are accepted; empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier derived from the source file name
    pub slug: String,

    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication date, as a sortable `YYYY-MM-DD...` string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Preview image URL
    #[serde(default, alias = "image", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Short description
    #[serde(default, alias = "excerpt", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Long-form text, plain with blank-line-separated paragraphs
    #[serde(default, alias = "content", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Post {
    /// Create a post with only its slug set
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: None,
            date: None,
            thumbnail: None,
            summary: None,
            body: None,
        }
    }

    /// Display title, falling back to the standard placeholder
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED)
    }

    /// Sort/display date; empty strings count as absent
    pub fn date_key(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.is_empty())
    }
}

/// Order a collection newest first.
///
/// Lexical comparison is sufficient for zero-padded ISO-like dates.
/// Undated records sort after every dated one; the sort is stable, so
/// their relative order is preserved.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| match (a.date_key(), b.date_key()) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Wire shape of the compiled document.
///
/// Producer variants emit either an object wrapping an `items` field or a
/// bare array; both are accepted. This compiler always emits the wrapped
/// form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NewsDocument {
    Wrapped { items: Vec<Post> },
    Bare(Vec<Post>),
}

impl NewsDocument {
    /// The canonical output shape
    pub fn wrap(items: Vec<Post>) -> Self {
        NewsDocument::Wrapped { items }
    }

    /// Unwrap into the record sequence, whichever shape was read
    pub fn into_posts(self) -> Vec<Post> {
        match self {
            NewsDocument::Wrapped { items } => items,
            NewsDocument::Bare(items) => items,
        }
    }
}
