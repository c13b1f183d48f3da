//! Front-matter parsing
//!
//! News posts carry a deliberately flat front-matter dialect: an opening
//! `---` line, one `key: value` pair per line, and a closing `---` line
//! before the body. No nesting, no lists, no multi-line values.

/// Front-matter fields recognized on a news post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub thumbnail: Option<String>,
    pub summary: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    ///
    /// A file without a well-formed delimiter pair degrades gracefully:
    /// empty front-matter, the whole file (trimmed) as body.
    pub fn parse(content: &str) -> (Self, &str) {
        match split_document(content) {
            Some((block, body)) => (Self::from_block(block), body.trim()),
            None => (FrontMatter::default(), content.trim()),
        }
    }

    /// Parse the delimited block as flat `key: value` lines.
    ///
    /// The first colon delimits; values are trimmed and unwrapped of one
    /// layer of enclosing double quotes. Unrecognized keys are ignored.
    fn from_block(block: &str) -> Self {
        let mut fm = FrontMatter::default();

        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = unquote(value.trim());
            if value.is_empty() {
                continue;
            }

            match key.trim() {
                "title" => fm.title = Some(value.to_string()),
                "date" => fm.date = Some(value.to_string()),
                "thumbnail" => fm.thumbnail = Some(value.to_string()),
                "summary" => fm.summary = Some(value.to_string()),
                _ => {}
            }
        }

        fm
    }
}

/// Split a document into its front-matter block and body.
///
/// The opening delimiter must be the first line; the closing delimiter is
/// the next line consisting of exactly three hyphens. Returns `None` when
/// either delimiter is missing.
fn split_document(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if line.trim_end() == "---" {
            let block = &content[block_start..offset];
            let body = &content[offset + line.len()..];
            return Some((block, body));
        }
        offset += line.len();
    }

    None
}

/// Strip one layer of enclosing double quotes
fn unquote(value: &str) -> &str {
    if value.len() >= 2 {
        if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
            return inner;
        }
    }
    value
}
