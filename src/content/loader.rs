//! Content loader - turns a directory of markdown files into post records

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{sort_newest_first, FrontMatter, Post};

/// Load every post under `source_dir`, newest first.
///
/// A missing directory yields an empty collection, not an error.
/// Unreadable files are skipped with a warning so a single bad file
/// cannot sink the whole run.
pub fn load_posts(source_dir: &Path) -> Result<Vec<Post>> {
    if !source_dir.exists() {
        tracing::debug!("Source directory {:?} does not exist", source_dir);
        return Ok(Vec::new());
    }

    let mut posts: Vec<Post> = Vec::new();

    for entry in WalkDir::new(source_dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_markdown_file(path) {
            continue;
        }

        let Some(slug) = file_slug(path) else {
            tracing::warn!("Skipping {:?}: cannot derive a slug", path);
            continue;
        };

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Skipping unreadable file {:?}: {}", path, e);
                continue;
            }
        };

        let post = build_post(slug, &raw);

        // Slugs are unique in the output; the later file in listing order
        // wins, loudly.
        if let Some(pos) = posts.iter().position(|p| p.slug == post.slug) {
            tracing::warn!(
                "Duplicate slug '{}' from {:?}, replacing earlier record",
                post.slug,
                path
            );
            posts[pos] = post;
        } else {
            posts.push(post);
        }
    }

    sort_newest_first(&mut posts);

    Ok(posts)
}

/// Build one record from a source file's text
fn build_post(slug: String, raw: &str) -> Post {
    let (fm, body) = FrontMatter::parse(raw);

    Post {
        slug,
        title: fm.title,
        date: fm.date,
        thumbnail: fm.thumbnail,
        summary: fm.summary,
        body: (!body.is_empty()).then(|| body.to_string()),
    }
}

/// Derive the slug from the file's base name, extension removed
fn file_slug(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    (!stem.is_empty()).then(|| stem.to_string())
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
