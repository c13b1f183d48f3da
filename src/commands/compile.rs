//! Compile markdown sources into the news document

use anyhow::Result;
use std::fs;

use crate::content::{loader, NewsDocument};
use crate::Newsbox;

/// Run the compiler once.
///
/// The output document is fully overwritten on every run; there is no
/// incremental update. A missing source directory compiles to an empty
/// collection.
pub fn run(app: &Newsbox) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = loader::load_posts(&app.source_dir)?;
    tracing::info!("Loaded {} posts from {:?}", posts.len(), app.source_dir);

    let document = NewsDocument::wrap(posts);
    let json = serde_json::to_string_pretty(&document)?;

    if let Some(parent) = app.output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&app.output_path, json)?;

    let duration = start.elapsed();
    tracing::info!(
        "Compiled {:?} in {:.2}s",
        app.output_path,
        duration.as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;
    use std::path::Path;

    fn compile_in(base: &Path) -> Vec<Post> {
        let app = Newsbox::new(base).unwrap();
        run(&app).unwrap();

        let json = fs::read_to_string(&app.output_path).unwrap();
        let document: NewsDocument = serde_json::from_str(&json).unwrap();
        document.into_posts()
    }

    #[test]
    fn test_round_trip_one_record_per_file() {
        let base = tempfile::tempdir().unwrap();
        let source = base.path().join("content/news");
        fs::create_dir_all(&source).unwrap();

        fs::write(
            source.join("launch.md"),
            "---\ntitle: \"Launch Day\"\ndate: 2024-03-01\n---\nWe shipped.\n\nThanks all.",
        )
        .unwrap();
        fs::write(source.join("hiring.md"), "---\ndate: 2024-04-02\n---\n").unwrap();

        let posts = compile_in(base.path());
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "hiring");
        assert_eq!(posts[1].slug, "launch");
        assert_eq!(posts[1].title, Some("Launch Day".to_string()));
        assert_eq!(posts[1].body, Some("We shipped.\n\nThanks all.".to_string()));
    }

    #[test]
    fn test_missing_source_compiles_to_empty_document() {
        let base = tempfile::tempdir().unwrap();
        let posts = compile_in(base.path());
        assert!(posts.is_empty());
    }

    #[test]
    fn test_output_is_overwritten() {
        let base = tempfile::tempdir().unwrap();
        let source = base.path().join("content/news");
        fs::create_dir_all(&source).unwrap();

        fs::write(source.join("a.md"), "---\ntitle: A\n---\n").unwrap();
        assert_eq!(compile_in(base.path()).len(), 1);

        fs::remove_file(source.join("a.md")).unwrap();
        fs::write(source.join("b.md"), "---\ntitle: B\n---\n").unwrap();

        let posts = compile_in(base.path());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "b");
    }
}
